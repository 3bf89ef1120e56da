//! In-memory host.
//!
//! A flat list of nodes shared between the document and its handles.
//! Single-threaded, like the page it stands in for. Used by the `simulate`
//! command and by tests in place of a browser.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{Document, Element, HostError, Window};

// =============================================================================
// Document
// =============================================================================

/// Serializable description of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub tag: String,
    pub id: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl NodeSpec {
    pub fn new(tag: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: id.into(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

type Nodes = Rc<RefCell<Vec<NodeSpec>>>;

/// Document backed by a node list.
///
/// Clones share the same nodes, so a test can keep one handle while the
/// engine owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Nodes,
    queries: Rc<Cell<usize>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<NodeSpec>) -> Self {
        Self {
            nodes: Rc::new(RefCell::new(nodes)),
            ..Self::default()
        }
    }

    /// Append a node and return a handle to it.
    pub fn push(&self, node: NodeSpec) -> MemoryElement {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        MemoryElement {
            nodes: Rc::clone(&self.nodes),
            index: nodes.len() - 1,
        }
    }

    /// Handle to the first node with the given id.
    pub fn element(&self, id: &str) -> Option<MemoryElement> {
        let index = self.nodes.borrow().iter().position(|n| n.id == id)?;
        Some(MemoryElement {
            nodes: Rc::clone(&self.nodes),
            index,
        })
    }

    /// Copy of the current node list.
    pub fn snapshot(&self) -> Vec<NodeSpec> {
        self.nodes.borrow().clone()
    }

    /// Number of `elements_by_tag` calls served so far.
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }

    /// Make every subsequent query fail with [`HostError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn elements_by_tag(&self, tag: &str) -> Result<Vec<MemoryElement>, HostError> {
        if self.unavailable.get() {
            return Err(HostError::Unavailable("document".to_string()));
        }
        self.queries.set(self.queries.get() + 1);

        let nodes = self.nodes.borrow();
        Ok(nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.tag.eq_ignore_ascii_case(tag))
            .map(|(index, _)| MemoryElement {
                nodes: Rc::clone(&self.nodes),
                index,
            })
            .collect())
    }
}

/// Handle to one node of a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    nodes: Nodes,
    index: usize,
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.nodes
            .borrow()
            .get(self.index)
            .map(|n| n.id.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.nodes.borrow().get(self.index)?.attrs.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes
            .get_mut(self.index)
            .ok_or_else(|| HostError::Failed(format!("node #{} detached", self.index)))?;
        node.attrs.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Window
// =============================================================================

/// Window that counts reloads instead of navigating.
#[derive(Debug, Clone, Default)]
pub struct MemoryWindow {
    reloads: Rc<Cell<usize>>,
    failing: bool,
}

impl MemoryWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// A window whose `reload` always fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.get()
    }
}

impl Window for MemoryWindow {
    fn reload(&self) -> Result<(), HostError> {
        if self.failing {
            return Err(HostError::Failed("location.reload".to_string()));
        }
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }
}
