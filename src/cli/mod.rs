//! CLI command implementations.

pub mod args;
pub mod classify;
pub mod simulate;

pub use args::{Cli, Commands};
