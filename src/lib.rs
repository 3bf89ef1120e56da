//! code-sync - live reload engine for the browser side of a dev server.
//!
//! A file change arrives as `file:reload`. Stylesheets and images referenced
//! by the page get their URL patched with a cache-busting suffix so the
//! browser refetches them in place; anything else reloads the page.
//!
//! ```ignore
//! let sync = Rc::new(CodeSync::new(document, window));
//! sync.init(&mut socket);
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod logger;
pub mod reload;

pub use config::{ConfigError, SyncConfig};
pub use error::SyncError;
pub use host::{Document, Element, HostError, Window};
pub use reload::{ChangeEvent, CodeSync, EventDispatcher, EventSource, ReloadOutcome};
