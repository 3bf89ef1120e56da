//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// code-sync live reload engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sync.toml)
    #[arg(short = 'C', long, global = true, default_value = "sync.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run one event against a document fixture and print the result
    #[command(visible_alias = "s")]
    Simulate {
        #[command(flatten)]
        args: SimulateArgs,
    },

    /// Show how a changed file would be handled
    #[command(visible_alias = "c")]
    Classify {
        /// Changed file paths
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,
    },
}

/// Simulate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Document fixture: JSON list of `{tag, id, attrs}` nodes
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub doc: PathBuf,

    /// Event envelope file: `{"event": "...", "data": ...}`
    #[arg(
        short,
        long,
        conflicts_with_all = ["change", "browser_reload"],
        required_unless_present_any = ["change", "browser_reload"],
        value_hint = clap::ValueHint::FilePath
    )]
    pub event: Option<PathBuf>,

    /// Changed file, sent as `file:reload` with its file name only
    #[arg(long, conflicts_with = "browser_reload")]
    pub change: Option<String>,

    /// Send `browser:reload` with a truthy payload
    #[arg(long)]
    pub browser_reload: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulate_change() {
        let cli = Cli::try_parse_from([
            "code-sync",
            "simulate",
            "--doc",
            "page.json",
            "--change",
            "css/style.css",
        ])
        .unwrap();

        let Commands::Simulate { args } = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.doc, PathBuf::from("page.json"));
        assert_eq!(args.change.as_deref(), Some("css/style.css"));
        assert!(args.event.is_none());
        assert_eq!(cli.config, PathBuf::from("sync.toml"));
    }

    #[test]
    fn test_simulate_requires_one_input() {
        assert!(Cli::try_parse_from(["code-sync", "simulate", "--doc", "page.json"]).is_err());
        assert!(
            Cli::try_parse_from([
                "code-sync",
                "simulate",
                "--doc",
                "page.json",
                "--change",
                "a.css",
                "--browser-reload",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::try_parse_from(["code-sync", "-v", "classify", "a.css", "b.html"]).unwrap();
        assert!(cli.verbose);
        let Commands::Classify { paths } = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(paths, ["a.css", "b.html"]);
    }
}
