//! Gesture mode and input-event vocabulary.
//!
//! # Responsibility
//! - Define the single process-wide interaction mode driving pointer
//!   interpretation.
//! - Define the input events the surface/input layer feeds into the board.
//!
//! # Invariants
//! - Exactly one mode is active at any time; drag, resize-hover and pending
//!   link are mutually exclusive by construction, not by flag discipline.
//! - The link modifier is sampled at press time, never tracked separately.

use crate::model::geometry::{Point, Vector};
use crate::model::link::LinkId;
use crate::model::node::NodeId;
use crate::surface::PointerCapture;

/// Width of the resize hot zone along a card's right edge, in pixels.
pub const RESIZE_HOT_ZONE_PX: f64 = 10.0;

/// Pointer button, as sampled at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// What the pointer event landed on, resolved by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas outside every card and line.
    Canvas,
    /// A card's container or content.
    Node(NodeId),
    /// A line visual's stroke.
    Link(LinkId),
}

/// Logical keys scoped to a focused card's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Ends editing without inserting content.
    Commit,
    /// Deletes the focused card and cascades its links.
    Delete,
}

/// State owned by one active drag, from press to release.
#[derive(Debug)]
pub struct DragSession {
    /// Card being moved.
    pub node: NodeId,
    /// Press point minus the card's live top-left at press time; invariant
    /// for the whole drag.
    pub grab_offset: Vector,
    /// Scoped capture released exactly once, at pointer-up.
    pub(crate) capture: PointerCapture,
}

/// The single interaction mode.
///
/// One tagged variant instead of independent drag/resize/link flags; two
/// gestures being active at once is unrepresentable.
#[derive(Debug)]
pub enum GestureMode {
    /// No gesture in progress; presses and clicks classify fresh.
    Idle,
    /// A card follows the pointer; moves reposition, up ends the drag.
    Dragging(DragSession),
    /// The pointer hovers a card's resize hot zone; the surface's native
    /// affordance owns the actual width change, the mode only suppresses
    /// drag/create/link classification.
    Resizing { node: NodeId },
    /// First link press happened; the next modifier press picks the target.
    LinkPending { source: NodeId },
}

impl GestureMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Stable mode name for structured log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::Resizing { .. } => "resizing",
            Self::LinkPending { .. } => "link_pending",
        }
    }
}

/// One input event in canvas/viewport space.
///
/// This is the complete input surface of the core; all board mutation happens
/// synchronously inside the handler for one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        at: Point,
        target: PointerTarget,
        button: PointerButton,
        /// Link modifier state sampled at press time.
        link_modifier: bool,
    },
    PointerMove {
        at: Point,
        target: PointerTarget,
    },
    PointerUp {
        at: Point,
    },
    Click {
        at: Point,
        target: PointerTarget,
    },
    /// Secondary-click context-menu intent on a card or line.
    ContextMenu {
        target: PointerTarget,
    },
    /// Commit/Delete key while `node`'s content has focus.
    Key {
        key: EditKey,
        node: NodeId,
    },
    /// Surface callback: displayed text wrapped to new lines.
    ContentGrown {
        node: NodeId,
        intrinsic_height: f64,
    },
}
