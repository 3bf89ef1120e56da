//! Asset type registry.
//!
//! Two static tables: file extension to markup tag, and tag to the attribute
//! holding the asset URL. An extension missing here cannot be patched in
//! place and falls back to a full page reload.

/// Tag names that carry patchable assets.
pub mod tags {
    pub const LINK: &str = "link";
    pub const IMG: &str = "img";
}

/// URL-bearing attribute names.
pub mod attrs {
    pub const HREF: &str = "href";
    pub const SRC: &str = "src";
}

/// Tag whose elements reference assets with this extension.
///
/// Case-insensitive; a leading `.` is ignored.
pub fn tag_for(extension: &str) -> Option<&'static str> {
    let ext = extension.strip_prefix('.').unwrap_or(extension);
    match ext.to_ascii_lowercase().as_str() {
        // Stylesheets
        "css" => Some(tags::LINK),

        // Images
        "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" | "avif" | "ico" | "bmp" => {
            Some(tags::IMG)
        }

        _ => None,
    }
}

/// Attribute holding the asset URL on elements of this tag.
pub fn attribute_for(tag: &str) -> Option<&'static str> {
    match tag.to_ascii_lowercase().as_str() {
        "link" => Some(attrs::HREF),
        "img" => Some(attrs::SRC),
        _ => None,
    }
}
