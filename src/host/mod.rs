//! Host Capabilities
//!
//! The engine never touches a global `window` or `document`. Everything it
//! needs from the page is reached through these traits, so a browser binding,
//! a headless DOM, or the in-memory fakes in [`memory`] can drive it.
//!
//! # Traits
//!
//! - [`Document`] - enumerate live elements by tag name
//! - [`Element`] - read/write one attribute of a live node
//! - [`Window`] - full page navigation reload

pub mod memory;

use thiserror::Error;

pub use memory::{MemoryDocument, MemoryElement, MemoryWindow, NodeSpec};

// =============================================================================
// Errors
// =============================================================================

/// Failure reported by the host environment.
///
/// The engine does not recover from these: they propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host capability unavailable: {0}")]
    Unavailable(String),

    #[error("host operation failed: {0}")]
    Failed(String),
}

// =============================================================================
// Capabilities
// =============================================================================

/// Handle to a live DOM node.
///
/// Handles are cheap to clone and refer to the same node; writes go through
/// `&self` the way DOM handles do.
pub trait Element: Clone {
    /// Stable identity for logging and tests (the `id` attribute or similar).
    fn id(&self) -> String;

    /// Current value of `name`, `None` if the node has no such attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError>;
}

/// Document accessor.
pub trait Document {
    type Element: Element;

    /// All elements with the given tag name, in document order.
    ///
    /// Called once per reload cycle; implementations must not cache.
    fn elements_by_tag(&self, tag: &str) -> Result<Vec<Self::Element>, HostError>;
}

/// Global window handle.
pub trait Window {
    /// `location.reload()`
    fn reload(&self) -> Result<(), HostError>;
}

impl<D: Document + ?Sized> Document for &D {
    type Element = D::Element;

    fn elements_by_tag(&self, tag: &str) -> Result<Vec<Self::Element>, HostError> {
        (**self).elements_by_tag(tag)
    }
}

impl<W: Window + ?Sized> Window for &W {
    fn reload(&self) -> Result<(), HostError> {
        (**self).reload()
    }
}
