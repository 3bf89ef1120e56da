//! Element scanning.

use crate::host::{Document, HostError};

use super::registry::{attribute_for, tag_for};

/// Candidate elements for one asset type, plus the attribute to compare.
#[derive(Debug, Clone)]
pub struct Scan<E> {
    pub elements: Vec<E>,
    pub attribute: &'static str,
}

/// Enumerate every element that could reference an asset with `extension`.
///
/// Returns `Ok(None)` when the extension is not patchable. The document is
/// queried on every call, since earlier cycles or page scripts may have
/// changed it.
pub fn scan<D: Document>(
    document: &D,
    extension: &str,
) -> Result<Option<Scan<D::Element>>, HostError> {
    let Some(tag) = tag_for(extension) else {
        return Ok(None);
    };
    let Some(attribute) = attribute_for(tag) else {
        return Ok(None);
    };

    let elements = document.elements_by_tag(tag)?;
    crate::debug!("sync"; "{} <{}> candidate(s) for .{}", elements.len(), tag, extension);

    Ok(Some(Scan {
        elements,
        attribute,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Element, MemoryDocument, NodeSpec};

    #[test]
    fn test_scan_returns_elements_and_attr() {
        let doc = MemoryDocument::from_nodes(vec![
            NodeSpec::new("link", "stub1").with_attr("href", "http://localhost:8080/style.css"),
            NodeSpec::new("img", "pic").with_attr("src", "/pic.png"),
        ]);

        let scan = scan(&doc, "css").unwrap().unwrap();
        assert_eq!(scan.elements[0].id(), "stub1");
        assert_eq!(scan.elements.len(), 1);
        assert_eq!(scan.attribute, "href");
    }

    #[test]
    fn test_scan_unknown_extension() {
        let doc = MemoryDocument::new();
        assert!(scan(&doc, "html").unwrap().is_none());
        assert_eq!(doc.query_count(), 0);
    }

    #[test]
    fn test_scan_is_not_cached() {
        let doc = MemoryDocument::new();
        assert!(scan(&doc, "png").unwrap().unwrap().elements.is_empty());

        doc.push(NodeSpec::new("img", "late").with_attr("src", "/late.png"));
        let scan = scan(&doc, "png").unwrap().unwrap();
        assert_eq!(scan.elements.len(), 1);
        assert_eq!(doc.query_count(), 2);
    }

    #[test]
    fn test_scan_propagates_host_error() {
        let doc = MemoryDocument::new();
        doc.set_unavailable(true);
        assert!(scan(&doc, "css").is_err());
    }
}
