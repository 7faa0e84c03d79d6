//! Node (task card) domain model.
//!
//! # Responsibility
//! - Define the canonical movable, resizable, completable card record.
//! - Provide lifecycle helpers for position, height auto-fit and completion.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another node.
//! - `origin` is the top-left corner in viewport space and is always finite.
//! - `size.height` never falls below [`MIN_NODE_HEIGHT`]; width is owned by
//!   the drawing surface's native resize affordance after creation.
//! - `completed` is presentation state only and never affects geometry.

use crate::model::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a node, independent of any rendered visual.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NodeId = Uuid;

/// Width every new card starts with.
pub const DEFAULT_NODE_WIDTH: f64 = 200.0;
/// Lower bound for the auto-fitted card height.
pub const MIN_NODE_HEIGHT: f64 = 50.0;

/// Validation failures for node construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    NilUuid,
    NonFinitePosition { x: f64, y: f64 },
    InvalidSize { width: f64, height: f64 },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "node uuid must not be nil"),
            Self::NonFinitePosition { x, y } => {
                write!(f, "node position must be finite, got ({x}, {y})")
            }
            Self::InvalidSize { width, height } => {
                write!(f, "node size must be finite and positive, got {width}x{height}")
            }
        }
    }
}

impl Error for ModelError {}

/// Canonical record for one task card on the canvas.
///
/// The rendered visual is owned by the drawing surface; this model keeps the
/// commanded position/size plus the data state the surface projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable global ID used for linking and surface addressing.
    pub uuid: NodeId,
    /// Top-left corner in viewport space.
    pub origin: Point,
    /// Commanded extent. Width may drift on the surface via native resize.
    pub size: Size,
    /// Card body text. Editing semantics live outside this crate.
    pub content: String,
    /// Completion flag, toggled by the node context gesture.
    pub completed: bool,
}

impl Node {
    /// Creates a new card at `origin` with default size and empty content.
    pub fn new(origin: Point) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            origin,
            size: Size::new(DEFAULT_NODE_WIDTH, MIN_NODE_HEIGHT),
            content: String::new(),
            completed: false,
        }
    }

    /// Creates a card with a caller-provided stable ID.
    ///
    /// # Errors
    /// Rejects nil uuids; identity must be usable as a registry key.
    pub fn with_id(uuid: NodeId, origin: Point) -> Result<Self, ModelError> {
        if uuid.is_nil() {
            return Err(ModelError::NilUuid);
        }
        let mut node = Self::new(origin);
        node.uuid = uuid;
        Ok(node)
    }

    /// Validates identity and geometry invariants.
    ///
    /// Write paths must call this before registering or mutating a node.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.uuid.is_nil() {
            return Err(ModelError::NilUuid);
        }
        if !self.origin.is_finite() {
            return Err(ModelError::NonFinitePosition {
                x: self.origin.x,
                y: self.origin.y,
            });
        }
        if !self.size.is_valid() {
            return Err(ModelError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(())
    }

    /// The commanded bounding box. The surface's live box may differ after
    /// native width resizes; anchor queries go through the surface instead.
    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.origin, self.size)
    }

    /// Repositions the card's top-left corner.
    pub fn move_to(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Auto-fits height to the intrinsic content height, clamped to the
    /// minimum card height.
    pub fn fit_height(&mut self, intrinsic_height: f64) {
        self.size.height = intrinsic_height.max(MIN_NODE_HEIGHT);
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
