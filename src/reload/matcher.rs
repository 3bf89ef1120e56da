//! Asset matching.
//!
//! An element matches when its normalized attribute value ends with the
//! target path, and the suffix starts a path segment. This distinguishes
//! `/a/style.css` from `/b/other-style.css` while ignoring host and
//! directory depth of the reference.

use crate::host::Element;

use super::normalize::normalize;

/// Target prefix that matches every candidate.
pub const WILDCARD: char = '*';

/// Elements whose `attribute` references `target`, in document order.
///
/// Elements without the attribute never match, and neither does an empty
/// target. A target starting with `*` matches every element that carries
/// the attribute.
pub fn find_matches<E: Element>(elements: &[E], target: &str, attribute: &str) -> Vec<E> {
    let wildcard = target.starts_with(WILDCARD);

    elements
        .iter()
        .filter(|elem| {
            elem.attribute(attribute)
                .is_some_and(|value| wildcard || references(normalize(&value), target))
        })
        .cloned()
        .collect()
}

/// `path` ends with `target` at a segment boundary.
fn references(path: &str, target: &str) -> bool {
    if target.is_empty() {
        return false;
    }
    path.strip_suffix(target)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with('/') || target.starts_with('/'))
}
