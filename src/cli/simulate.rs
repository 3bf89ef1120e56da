//! `simulate` command: run one event against a document fixture.

use std::fs;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;

use code_sync::host::{MemoryDocument, MemoryWindow, NodeSpec};
use code_sync::reload::{ChangeEvent, CodeSync, EventDispatcher, InboundEvent, ReloadOutcome};
use code_sync::{SyncConfig, log};

use super::args::SimulateArgs;

/// What happened to the fixture.
#[derive(Debug, Serialize)]
pub struct SimulateReport {
    pub event: String,
    pub outcomes: Vec<ReloadOutcome>,
    pub reloads: usize,
    pub document: Vec<NodeSpec>,
}

/// Print the report as JSON on stdout.
pub fn run_simulate(args: &SimulateArgs, config: SyncConfig) -> Result<()> {
    let report = simulate(args, config)?;
    log!("sync"; "`{}`: {} outcome(s), {} page reload(s)",
        report.event, report.outcomes.len(), report.reloads);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn simulate(args: &SimulateArgs, config: SyncConfig) -> Result<SimulateReport> {
    let content = fs::read_to_string(&args.doc)
        .with_context(|| format!("failed to read document `{}`", args.doc.display()))?;
    let nodes: Vec<NodeSpec> = serde_json::from_str(&content)
        .with_context(|| format!("invalid document `{}`", args.doc.display()))?;

    let document = MemoryDocument::from_nodes(nodes);
    let window = MemoryWindow::new();
    let sync = Rc::new(CodeSync::with_config(
        document.clone(),
        window.clone(),
        config,
    ));

    let mut dispatcher = EventDispatcher::strict();
    sync.init(&mut dispatcher);

    let inbound = inbound_event(args)?;
    let outcomes = dispatcher
        .dispatch(&inbound.event, &inbound.data)
        .with_context(|| format!("`{}` failed", inbound.event))?;

    Ok(SimulateReport {
        event: inbound.event,
        outcomes,
        reloads: window.reload_count(),
        document: document.snapshot(),
    })
}

fn inbound_event(args: &SimulateArgs) -> Result<InboundEvent> {
    if let Some(path) = &args.event {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read event `{}`", path.display()))?;
        return InboundEvent::from_json(&content)
            .with_context(|| format!("invalid event `{}`", path.display()));
    }
    if let Some(change) = &args.change {
        return Ok(InboundEvent::file_reload(&ChangeEvent::from_path(change)));
    }
    Ok(InboundEvent::browser_reload(args.browser_reload))
}
