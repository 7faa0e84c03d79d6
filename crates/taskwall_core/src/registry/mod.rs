//! Arena registries owning nodes and links.
//!
//! # Responsibility
//! - Own the live set of cards and the live set of links between them.
//! - Enforce referential consistency: no link may reference an absent node.
//!
//! # Invariants
//! - Registry writes must call model validation before mutating state.
//! - Removal operations are idempotent; removing an absent handle is a no-op.
//! - Node removal cascades to incident links atomically with the node.

pub mod link_registry;
pub mod node_registry;

use crate::model::node::{ModelError, NodeId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-level failures for node and link ownership operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegistryError {
    /// Model validation rejected the record.
    Validation(ModelError),
    /// A node with this id is already registered.
    DuplicateNode(NodeId),
    /// A link endpoint references a node absent from the registry.
    InvalidReference(NodeId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateNode(id) => write!(f, "node already registered: {id}"),
            Self::InvalidReference(id) => {
                write!(f, "link endpoint references unknown node: {id}")
            }
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for RegistryError {
    fn from(value: ModelError) -> Self {
        Self::Validation(value)
    }
}
