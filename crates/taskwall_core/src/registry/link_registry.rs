//! Link registry: owner of directed connections between cards.
//!
//! # Responsibility
//! - Own every live link and hand out stable `LinkId` handles.
//! - Reject links whose endpoints are not registered nodes.
//! - Cascade-remove links incident to a deleted node.
//!
//! # Invariants
//! - A registered link never references a node absent from the node registry
//!   at creation time; node removal must call `remove_incident` in the same
//!   handler to keep that true afterwards.
//! - Self-links and duplicate pairs are accepted; no dedup is enforced.

use crate::model::link::{Link, LinkId};
use crate::model::node::NodeId;
use crate::registry::node_registry::NodeRegistry;
use crate::registry::{RegistryError, RegistryResult};

/// Owner of all links currently on the canvas.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    links: Vec<Link>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directed link from `source` to `target`.
    ///
    /// Self-links and duplicates of an existing pair are permitted.
    ///
    /// # Errors
    /// Returns `InvalidReference` when either endpoint is not registered in
    /// `nodes`; a link must never be born dangling.
    pub fn create(
        &mut self,
        source: NodeId,
        target: NodeId,
        nodes: &NodeRegistry,
    ) -> RegistryResult<LinkId> {
        for endpoint in [source, target] {
            if !nodes.contains(endpoint) {
                return Err(RegistryError::InvalidReference(endpoint));
            }
        }
        let link = Link::new(source, target);
        let id = link.uuid;
        self.links.push(link);
        Ok(id)
    }

    /// Removes one link by handle.
    ///
    /// Removing an unknown id is a no-op and returns `None`.
    pub fn remove(&mut self, id: LinkId) -> Option<Link> {
        let index = self.links.iter().position(|link| link.uuid == id)?;
        Some(self.links.remove(index))
    }

    /// Removes every link whose source or target equals `node`.
    ///
    /// Returns the removed set so the drawing surface can erase the matching
    /// line visuals.
    pub fn remove_incident(&mut self, node: NodeId) -> Vec<Link> {
        let mut removed = Vec::new();
        self.links.retain(|link| {
            if link.is_incident(node) {
                removed.push(*link);
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn get(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|link| link.uuid == id)
    }

    /// Iterates links in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
