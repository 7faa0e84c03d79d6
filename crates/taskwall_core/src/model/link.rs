//! Link domain model.
//!
//! # Responsibility
//! - Define the directed connection between two nodes.
//!
//! # Invariants
//! - `source`/`target` are non-owning references into the node registry;
//!   endpoint coordinates are never stored, only recomputed from live boxes.
//! - Self-links and duplicate pairs are valid states, not errors.

use crate::model::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a link, independent of any rendered line visual.
pub type LinkId = Uuid;

/// Directed connection from one card to another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Stable global ID used for surface addressing and removal.
    pub uuid: LinkId,
    /// Node the line starts at.
    pub source: NodeId,
    /// Node the line points to.
    pub target: NodeId,
}

impl Link {
    /// Creates a link with a generated stable ID.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            source,
            target,
        }
    }

    /// Returns whether this link touches `node` as source or target.
    pub fn is_incident(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// Returns whether both endpoints reference the same node.
    pub fn is_self_link(&self) -> bool {
        self.source == self.target
    }
}
