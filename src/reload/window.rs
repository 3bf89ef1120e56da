//! Window access.

use crate::host::{HostError, Window};

/// Seam over the host window.
///
/// The unconditional `browser:reload` event and the "nothing patchable"
/// fallback both go through [`reload_browser`](Self::reload_browser); only
/// the flag differs.
#[derive(Debug, Clone)]
pub struct WindowAccessor<W> {
    window: W,
}

impl<W: Window> WindowAccessor<W> {
    pub fn new(window: W) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Reload the page when `should_reload` is set. Returns whether it did.
    pub fn reload_browser(&self, should_reload: bool) -> Result<bool, HostError> {
        if !should_reload {
            return Ok(false);
        }
        crate::log!("reload"; "reloading page");
        self.window().reload()?;
        Ok(true)
    }
}
