//! Engine error types.

use thiserror::Error;

use crate::host::HostError;

/// Errors surfaced by a reload cycle or by event dispatch.
///
/// Unpatchable assets and unreferenced assets are outcomes, not errors;
/// see [`ReloadOutcome`](crate::reload::ReloadOutcome).
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("malformed event payload")]
    Payload(#[from] serde_json::Error),

    #[error("no handler registered for `{0}`")]
    UnknownEvent(String),
}
