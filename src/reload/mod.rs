//! Reload Module
//!
//! Decides how a file change reaches the loaded page: patch the URL of
//! matching stylesheets and images, or reload the whole page.
//!
//! # Architecture
//!
//! ```text
//! EventDispatcher -> CodeSync -> scan -> find_matches -> swap (patch)
//!   (file:reload)   (classify)  (tags)   (suffix match)
//!                             \-> WindowAccessor (full reload)
//! ```
//!
//! # Modules
//!
//! - `dispatch` - Named event handler registration
//! - `matcher` - Suffix matching of element URLs against a changed file
//! - `message` - Payload types (change event, envelope, outcome)
//! - `normalize` - Cache-busting suffix removal
//! - `registry` - Extension -> tag -> attribute tables
//! - `scan` - Candidate element enumeration
//! - `strategy` - The reload cycle
//! - `window` - Page reload seam

pub mod dispatch;
pub mod matcher;
pub mod message;
pub mod normalize;
pub mod registry;
pub mod scan;
pub mod strategy;
pub mod window;


pub use dispatch::{EventDispatcher, EventSource, Handler};
pub use matcher::find_matches;
pub use message::{ChangeEvent, InboundEvent, PatchedAsset, ReloadOutcome};
pub use normalize::normalize;
pub use registry::{attribute_for, tag_for};
pub use scan::{Scan, scan};
pub use strategy::{CacheBuster, CodeSync};
pub use window::WindowAccessor;
