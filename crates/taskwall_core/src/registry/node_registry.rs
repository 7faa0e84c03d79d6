//! Node registry: creation-ordered arena of task cards.
//!
//! # Responsibility
//! - Own every live node and hand out stable `NodeId` handles.
//! - Preserve creation order for deterministic listing and redraw.
//!
//! # Invariants
//! - No two registered nodes share an id.
//! - `remove` is idempotent and returns the removed node so callers can
//!   cascade link deletion and visual erasure.

use crate::model::geometry::Point;
use crate::model::node::{Node, NodeId};
use crate::registry::{RegistryError, RegistryResult};

/// Creation-ordered owner of all task cards.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node at `origin` with default size and empty content.
    ///
    /// # Errors
    /// Rejects non-finite origins via model validation.
    pub fn create(&mut self, origin: Point) -> RegistryResult<NodeId> {
        self.insert(Node::new(origin))
    }

    /// Registers a caller-constructed node.
    ///
    /// # Errors
    /// Rejects invalid records and duplicate ids.
    pub fn insert(&mut self, node: Node) -> RegistryResult<NodeId> {
        node.validate()?;
        if self.contains(node.uuid) {
            return Err(RegistryError::DuplicateNode(node.uuid));
        }
        let id = node.uuid;
        self.nodes.push(node);
        Ok(id)
    }

    /// Removes a node, returning it for cascade handling.
    ///
    /// Removing an unknown id is a no-op and returns `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let index = self.nodes.iter().position(|node| node.uuid == id)?;
        Some(self.nodes.remove(index))
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.uuid == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.uuid == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
