//! Logging utilities with colored output.
//!
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` for output only shown in verbose mode
//!
//! Logs go to stderr so that stdout stays machine-readable.
//!
//! # Example
//!
//! ```ignore
//! log!("inject"; "{} -> {}", id, url);
//! debug!("sync"; "dispatching `{}`", event);
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose or `sync.verbose`)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when verbose mode is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let out = stderr();
    let clear = out.is_terminal();
    write_line(&mut out.lock(), clear, &prefix, message);
}

/// Write one log line, clearing the rest of the terminal line first when
/// `clear` is set. Redirected output gets no escape codes.
fn write_line(out: &mut impl Write, clear: bool, prefix: &str, message: &str) {
    if clear {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "inject" => prefix.bright_green().bold().to_string(),
        "reload" => prefix.bright_blue().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        assert!(colorize_prefix("inject", "inject").contains("[inject]"));
        assert!(colorize_prefix("Sync", "sync").contains("[Sync]"));
    }

    #[test]
    fn test_redirected_line_has_no_escape_codes() {
        let mut buf = Vec::new();
        write_line(&mut buf, false, "[sync]", "hello");
        assert_eq!(String::from_utf8(buf).unwrap(), "[sync] hello\n");
    }

    #[test]
    fn test_terminal_line_clears_first() {
        let mut buf = Vec::new();
        write_line(&mut buf, true, "[sync]", "hello");
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with('\u{1b}'));
        assert!(line.ends_with("[sync] hello\n"));
    }
}
