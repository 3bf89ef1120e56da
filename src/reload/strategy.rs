//! Reload Strategy
//!
//! One cycle per change event:
//!
//! ```text
//! Idle -> Classifying -> Patching   -> Idle
//!                     -> FullReload -> Idle
//! ```
//!
//! Classifying scans the document for the event's asset type. Unpatchable
//! types reload the page. Patchable types have every matching element's URL
//! rewritten with a fresh cache-busting suffix; no match means no-op.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::host::{Document, Element, HostError, Window};

use super::dispatch::{EventSource, Handler};
use super::matcher::find_matches;
use super::message::{
    BROWSER_RELOAD, ChangeEvent, FILE_RELOAD, PatchedAsset, ReloadOutcome, is_truthy,
};
use super::normalize::normalize;
use super::scan::scan;
use super::window::WindowAccessor;

// =============================================================================
// Cache Buster
// =============================================================================

/// Source of cache-busting stamps.
///
/// Millisecond timestamps, bumped when needed so that every stamp is
/// strictly greater than the previous one.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicU64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_stamp(&self) -> u64 {
        let now = now_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(prev + 1)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

// =============================================================================
// Engine
// =============================================================================

/// Asset-matching reload engine bound to one document and window.
#[derive(Debug)]
pub struct CodeSync<D, W> {
    document: D,
    window: WindowAccessor<W>,
    config: SyncConfig,
    buster: CacheBuster,
}

impl<D: Document, W: Window> CodeSync<D, W> {
    pub fn new(document: D, window: W) -> Self {
        Self::with_config(document, window, SyncConfig::default())
    }

    pub fn with_config(document: D, window: W, config: SyncConfig) -> Self {
        Self {
            document,
            window: WindowAccessor::new(window),
            config,
            buster: CacheBuster::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn window(&self) -> &WindowAccessor<W> {
        &self.window
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Run one reload cycle for `event`.
    pub fn reload(&self, event: &ChangeEvent) -> Result<ReloadOutcome, SyncError> {
        if !self.config.inject_changes {
            self.window.reload_browser(true)?;
            return Ok(ReloadOutcome::FullReload);
        }

        let Some(found) = scan(&self.document, &event.file_extension)? else {
            crate::debug!("reload"; ".{} cannot be injected", event.file_extension);
            self.window.reload_browser(true)?;
            return Ok(ReloadOutcome::FullReload);
        };

        let target = normalize(&event.asset_file_name);
        let matches = find_matches(&found.elements, target, found.attribute);
        if matches.is_empty() {
            crate::debug!("sync"; "{} is not referenced by this page", target);
            return Ok(ReloadOutcome::Unchanged);
        }

        let mut patched = Vec::with_capacity(matches.len());
        for elem in &matches {
            if let Some(asset) = self.swap_file(elem, found.attribute)? {
                patched.push(asset);
            }
        }
        if patched.is_empty() {
            return Ok(ReloadOutcome::Unchanged);
        }
        Ok(ReloadOutcome::Patched(patched))
    }

    /// Reload the page if `should_reload` is set.
    pub fn reload_browser(&self, should_reload: bool) -> Result<ReloadOutcome, SyncError> {
        Ok(if self.window.reload_browser(should_reload)? {
            ReloadOutcome::FullReload
        } else {
            ReloadOutcome::Unchanged
        })
    }

    /// Point `elem` at its bare URL plus a fresh `?<bust_param>=<stamp>`.
    ///
    /// An element that no longer has `attribute` is left alone.
    fn swap_file(
        &self,
        elem: &D::Element,
        attribute: &str,
    ) -> Result<Option<PatchedAsset>, HostError> {
        let Some(current) = elem.attribute(attribute) else {
            crate::debug!("sync"; "{} has no {}, skipped", elem.id(), attribute);
            return Ok(None);
        };
        let timestamp = self.buster.next_stamp();
        let url = format!(
            "{}?{}={}",
            normalize(&current),
            self.config.bust_param,
            timestamp
        );

        elem.set_attribute(attribute, &url)?;
        let element_id = elem.id();
        crate::log!("inject"; "{} -> {}", element_id, url);

        Ok(Some(PatchedAsset {
            element_id,
            attribute: attribute.to_string(),
            url,
            timestamp,
        }))
    }
}

impl<D, W> CodeSync<D, W>
where
    D: Document + 'static,
    W: Window + 'static,
{
    /// Bound `file:reload` handler.
    pub fn reload_handler(self: &Rc<Self>) -> Handler {
        let sync = Rc::clone(self);
        Box::new(move |payload: &Value| -> Result<ReloadOutcome, SyncError> {
            let event: ChangeEvent = serde_json::from_value(payload.clone())?;
            sync.reload(&event)
        })
    }

    /// Bound `browser:reload` handler.
    pub fn browser_reload_handler(self: &Rc<Self>) -> Handler {
        let sync = Rc::clone(self);
        Box::new(move |payload: &Value| sync.reload_browser(is_truthy(payload)))
    }

    /// Register both entry points on `source`.
    pub fn init(self: &Rc<Self>, source: &mut impl EventSource) {
        source.on(FILE_RELOAD, self.reload_handler());
        source.on(BROWSER_RELOAD, self.browser_reload_handler());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryDocument, MemoryWindow, NodeSpec};

    #[test]
    fn test_cache_buster_strictly_increasing() {
        let buster = CacheBuster::new();
        let mut prev = 0;
        for _ in 0..1000 {
            let next = buster.next_stamp();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_swap_file_leaves_missing_attribute_alone() {
        let doc = MemoryDocument::from_nodes(vec![
            NodeSpec::new("img", "lazy").with_attr("data-src", "/img/lazy.png"),
        ]);
        let sync = CodeSync::new(doc.clone(), MemoryWindow::new());
        let lazy = doc.element("lazy").unwrap();

        assert!(sync.swap_file(&lazy, "src").unwrap().is_none());
        assert_eq!(lazy.attribute("src"), None);
    }

    #[test]
    fn test_cache_buster_tracks_clock() {
        let before = now_millis();
        let stamp = CacheBuster::new().next_stamp();
        assert!(stamp >= before);
    }
}
