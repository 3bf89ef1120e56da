//! Sync Message Protocol
//!
//! JSON payloads exchanged with the development server, and the outcome of
//! one reload cycle.
//!
//! # Events
//!
//! - `file:reload`: a file changed, try a targeted patch ([`ChangeEvent`])
//! - `browser:reload`: reload the page if the payload is truthy

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event name for file change notifications.
pub const FILE_RELOAD: &str = "file:reload";

/// Event name for unconditional page reloads.
pub const BROWSER_RELOAD: &str = "browser:reload";

/// One file change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Changed file name or path suffix (e.g. `style.css`, `css/site.css`)
    pub asset_file_name: String,
    /// Extension without the dot (e.g. `css`)
    pub file_extension: String,
}

impl ChangeEvent {
    pub fn new(asset_file_name: impl Into<String>, file_extension: impl Into<String>) -> Self {
        Self {
            asset_file_name: asset_file_name.into(),
            file_extension: file_extension.into(),
        }
    }

    /// Build from a changed path.
    ///
    /// Only the file name is kept, as a dev server sends it: a watcher path
    /// like `/home/me/site/css/style.css` is never a suffix of a page URL.
    pub fn from_path(path: &str) -> Self {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        Self::new(name, ext)
    }
}

/// Wire envelope: `{"event": "file:reload", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl InboundEvent {
    pub fn file_reload(change: &ChangeEvent) -> Self {
        Self {
            event: FILE_RELOAD.to_string(),
            data: serde_json::to_value(change).unwrap_or_default(),
        }
    }

    pub fn browser_reload(reload: bool) -> Self {
        Self {
            event: BROWSER_RELOAD.to_string(),
            data: Value::Bool(reload),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse from JSON string
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// JavaScript truthiness of a JSON payload.
///
/// `false`, `null`, `0` and `""` are falsy; arrays and objects are truthy
/// even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// One element rewritten with a cache-busted URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchedAsset {
    pub element_id: String,
    pub attribute: String,
    /// New attribute value
    pub url: String,
    /// Cache-busting stamp embedded in `url`
    pub timestamp: u64,
}

/// Result of one reload cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "patched", rename_all = "snake_case")]
pub enum ReloadOutcome {
    /// Matching elements were patched in place, in document order
    Patched(Vec<PatchedAsset>),
    /// The whole page was reloaded
    FullReload,
    /// Nothing on the page references the asset
    Unchanged,
}

impl ReloadOutcome {
    /// Last element patched in this cycle.
    pub fn last_patched(&self) -> Option<&PatchedAsset> {
        match self {
            Self::Patched(assets) => assets.last(),
            _ => None,
        }
    }

    pub fn is_full_reload(&self) -> bool {
        matches!(self, Self::FullReload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_change_event_wire_format() {
        let event: ChangeEvent =
            serde_json::from_str(r#"{"assetFileName":"style.css","fileExtension":"css"}"#)
                .unwrap();
        assert_eq!(event, ChangeEvent::new("style.css", "css"));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""assetFileName":"style.css""#));
    }

    #[test]
    fn test_change_event_from_path() {
        assert_eq!(
            ChangeEvent::from_path("css/site.min.css"),
            ChangeEvent::new("site.min.css", "css")
        );
        assert_eq!(
            ChangeEvent::from_path("/home/me/site/css/style.css").asset_file_name,
            "style.css"
        );
        assert_eq!(
            ChangeEvent::from_path(r"C:\site\img\logo.png"),
            ChangeEvent::new("logo.png", "png")
        );
        assert_eq!(ChangeEvent::from_path("Makefile").file_extension, "");
        assert_eq!(ChangeEvent::from_path("a.d/file").file_extension, "");
    }

    #[test]
    fn test_inbound_envelope() {
        let msg = InboundEvent::file_reload(&ChangeEvent::new("logo.png", "png"));
        let json = msg.to_json();
        assert!(json.contains(r#""event":"file:reload""#));

        let parsed = InboundEvent::from_json(&json).unwrap();
        assert_eq!(parsed.data["fileExtension"], "png");

        let bare = InboundEvent::from_json(r#"{"event":"browser:reload"}"#).unwrap();
        assert_eq!(bare.data, Value::Null);
    }

    #[test]
    fn test_truthiness() {
        for v in [json!(true), json!(1), json!("yes"), json!([]), json!({})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
        for v in [json!(false), json!(0), json!(0.0), json!(""), Value::Null] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ReloadOutcome::Patched(vec![PatchedAsset {
            element_id: "match1".to_string(),
            attribute: "href".to_string(),
            url: "/style.css?rel=1".to_string(),
            timestamp: 1,
        }]);
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains(r#""type":"patched""#));
        assert_eq!(outcome.last_patched().unwrap().element_id, "match1");

        let json = serde_json::to_string(&ReloadOutcome::FullReload).unwrap();
        assert_eq!(json, r#"{"type":"full_reload"}"#);
    }
}
