//! Drawing-surface seam.
//!
//! # Responsibility
//! - Define the contract the core issues position commands through, keeping
//!   it free of any rendering-library dependency.
//! - Expose live bounding-box queries so anchors always reflect the latest
//!   position and size, including native width resizes the core never sees.
//!
//! # Invariants
//! - `node_box` queries a live box; implementations must not serve stale
//!   geometry from before the most recent command.
//! - A `PointerCapture` returned by `capture_pointer` is released exactly
//!   once, by the gesture that acquired it.

pub mod headless;

use crate::model::geometry::{Point, Rect, Size};
use crate::model::link::LinkId;
use crate::model::node::{Node, NodeId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Failures reported by the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    /// The node's visual has not been realized yet; defer geometry work.
    NotReady(NodeId),
}

impl Display for SurfaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotReady(id) => write!(f, "node visual not realized yet: {id}"),
        }
    }
}

impl Error for SurfaceError {}

/// Token for one scoped pointer-capture session.
///
/// Acquired at drag start, released at drag end, never shared between
/// gestures; move/up routing lives exactly as long as the drag.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an unreleased capture leaks the pointer to a finished gesture"]
pub struct PointerCapture(u64);

impl PointerCapture {
    pub fn new(token: u64) -> Self {
        Self(token)
    }

    pub fn token(&self) -> u64 {
        self.0
    }
}

/// External collaborator that renders cards and lines.
///
/// The core owns all decisions; the surface owns pixels, text layout and the
/// native width-resize affordance. Implementations hold the authoritative
/// live boxes the geometry resolver queries.
pub trait DrawingSurface {
    /// Realizes a card visual at the node's commanded box.
    fn place_node(&mut self, node: &Node);

    /// Repositions an existing card visual.
    fn move_node(&mut self, id: NodeId, origin: Point) -> SurfaceResult<()>;

    /// Resizes an existing card visual (height auto-fit path).
    fn resize_node(&mut self, id: NodeId, size: Size) -> SurfaceResult<()>;

    /// Erases a card visual. Unknown ids are ignored.
    fn remove_node(&mut self, id: NodeId);

    /// Live bounding box of a card visual in viewport coordinates.
    fn node_box(&self, id: NodeId) -> SurfaceResult<Rect>;

    /// Realizes a line visual with both endpoints.
    fn place_link(&mut self, id: LinkId, from: Point, to: Point);

    /// Updates the endpoints of an existing line visual.
    fn update_link(&mut self, id: LinkId, from: Point, to: Point);

    /// Erases a line visual. Unknown ids are ignored.
    fn remove_link(&mut self, id: LinkId);

    /// Projects the completion flag onto the card's styling.
    fn set_completed(&mut self, id: NodeId, completed: bool);

    /// Shows or clears the resize cursor hint on a card.
    fn set_resize_hint(&mut self, id: NodeId, active: bool);

    /// Drops input focus from a card's content without inserting anything.
    fn release_focus(&mut self, id: NodeId);

    /// Routes subsequent pointer moves to the active gesture.
    fn capture_pointer(&mut self) -> PointerCapture;

    /// Ends a capture session started by `capture_pointer`.
    fn release_pointer(&mut self, capture: PointerCapture);
}
