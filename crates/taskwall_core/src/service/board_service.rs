//! Board orchestrator: the gesture state machine over both registries.
//!
//! # Responsibility
//! - Classify pointer/key input against the single gesture mode and mutate
//!   registries and surface accordingly.
//! - Keep the fixed ordering mutate -> refresh inside every handler call.
//!
//! # Invariants
//! - All board mutation happens synchronously inside these handlers; there is
//!   no other write path.
//! - Node removal and the cascade of its incident links happen in the same
//!   handler call; no dangling link is observable between events.
//! - A drag's pointer capture is released exactly once, at pointer-up (or at
//!   removal of the dragged node, the only other way the session can end).

use crate::gesture::{
    DragSession, EditKey, GestureMode, InputEvent, PointerButton, PointerTarget,
    RESIZE_HOT_ZONE_PX,
};
use crate::model::geometry::Point;
use crate::model::link::LinkId;
use crate::model::node::NodeId;
use crate::registry::link_registry::LinkRegistry;
use crate::registry::node_registry::NodeRegistry;
use crate::registry::RegistryError;
use crate::service::geometry_service;
use crate::surface::{DrawingSurface, SurfaceError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Umbrella error for board event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardError {
    /// Registry rejected the mutation (validation, unknown reference).
    Registry(RegistryError),
    /// The drawing surface could not serve the request yet.
    Surface(SurfaceError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "{err}"),
            Self::Surface(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<RegistryError> for BoardError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

impl From<SurfaceError> for BoardError {
    fn from(value: SurfaceError) -> Self {
        Self::Surface(value)
    }
}

/// The interactive canvas core: registries, gesture mode and surface handle.
pub struct Board<S: DrawingSurface> {
    surface: S,
    nodes: NodeRegistry,
    links: LinkRegistry,
    mode: GestureMode,
}

impl<S: DrawingSurface> Board<S> {
    /// Creates an empty board issuing commands to `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            nodes: NodeRegistry::new(),
            links: LinkRegistry::new(),
            mode: GestureMode::Idle,
        }
    }

    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    pub fn links(&self) -> &LinkRegistry {
        &self.links
    }

    pub fn mode(&self) -> &GestureMode {
        &self.mode
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access for native affordances (width resize, focus).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Routes one input event to its handler.
    pub fn handle(&mut self, event: InputEvent) -> BoardResult<()> {
        match event {
            InputEvent::PointerDown {
                at,
                target,
                button,
                link_modifier,
            } => self.pointer_down(at, target, button, link_modifier),
            InputEvent::PointerMove { at, target } => self.pointer_move(at, target),
            InputEvent::PointerUp { at } => self.pointer_up(at),
            InputEvent::Click { at, target } => self.click(at, target),
            InputEvent::ContextMenu { target } => self.context_menu(target),
            InputEvent::Key { key, node } => self.key(key, node),
            InputEvent::ContentGrown {
                node,
                intrinsic_height,
            } => self.content_grown(node, intrinsic_height),
        }
    }

    /// Primary/secondary press; classifies drag and link gestures.
    pub fn pointer_down(
        &mut self,
        at: Point,
        target: PointerTarget,
        button: PointerButton,
        link_modifier: bool,
    ) -> BoardResult<()> {
        match self.mode {
            // Hot-zone hover: the native resize affordance owns this press.
            GestureMode::Resizing { .. } => return Ok(()),
            // Capture routes presses to the active drag; nothing new starts.
            GestureMode::Dragging(_) => return Ok(()),
            GestureMode::Idle | GestureMode::LinkPending { .. } => {}
        }
        let PointerTarget::Node(node) = target else {
            return Ok(());
        };
        if !self.nodes.contains(node) {
            // Stale target from a visual removed earlier in the same frame.
            return Ok(());
        }
        if link_modifier {
            self.link_press(node)
        } else if button == PointerButton::Primary {
            self.begin_drag(node, at)
        } else {
            Ok(())
        }
    }

    /// Pointer move; repositions during a drag, otherwise evaluates the
    /// resize hot zone.
    pub fn pointer_move(&mut self, at: Point, target: PointerTarget) -> BoardResult<()> {
        let (node, grab_offset) = match &self.mode {
            GestureMode::Dragging(session) => (session.node, session.grab_offset),
            _ => {
                self.update_resize_hover(at, target);
                return Ok(());
            }
        };

        let origin = at - grab_offset;
        let Some(card) = self.nodes.get_mut(node) else {
            return Ok(());
        };
        card.move_to(origin);
        self.surface.move_node(node, origin)?;
        self.refresh_links();
        Ok(())
    }

    /// Pointer release; ends an active drag and releases its capture.
    pub fn pointer_up(&mut self, _at: Point) -> BoardResult<()> {
        if !matches!(self.mode, GestureMode::Dragging(_)) {
            return Ok(());
        }
        if let GestureMode::Dragging(session) =
            std::mem::replace(&mut self.mode, GestureMode::Idle)
        {
            self.surface.release_pointer(session.capture);
            debug!(
                "event=drag_end module=board status=ok node={}",
                session.node
            );
        }
        Ok(())
    }

    /// Click; creates a node when it lands on empty canvas while idle.
    pub fn click(&mut self, at: Point, target: PointerTarget) -> BoardResult<()> {
        if !matches!(target, PointerTarget::Canvas) {
            return Ok(());
        }
        if !self.mode.is_idle() {
            // Resize hover, pending link or drag suppress creation.
            return Ok(());
        }
        self.create_node(at).map(|_| ())
    }

    /// Creates a card at `at` with default size and empty content.
    pub fn create_node(&mut self, at: Point) -> BoardResult<NodeId> {
        let id = self.nodes.create(at)?;
        if let Some(node) = self.nodes.get(id) {
            self.surface.place_node(node);
        }
        info!(
            "event=node_created module=board status=ok node={id} x={} y={}",
            at.x, at.y
        );
        Ok(id)
    }

    /// Creates a directed link and realizes its line visual.
    ///
    /// Self-links and duplicates are permitted; unknown endpoints are
    /// rejected with `InvalidReference` before anything mutates.
    pub fn create_link(&mut self, source: NodeId, target: NodeId) -> BoardResult<LinkId> {
        for endpoint in [source, target] {
            if !self.nodes.contains(endpoint) {
                return Err(RegistryError::InvalidReference(endpoint).into());
            }
        }
        let from = geometry_service::anchor_center(&self.surface, source)?;
        let to = geometry_service::anchor_center(&self.surface, target)?;
        let id = self.links.create(source, target, &self.nodes)?;
        self.surface.place_link(id, from, to);
        info!(
            "event=link_created module=board status=ok link={id} source={source} target={target}"
        );
        Ok(id)
    }

    /// Secondary-click intent: toggles completion on a card, deletes a line.
    pub fn context_menu(&mut self, target: PointerTarget) -> BoardResult<()> {
        match target {
            PointerTarget::Node(node) => self.toggle_completed(node),
            PointerTarget::Link(link) => {
                self.remove_link(link);
                Ok(())
            }
            PointerTarget::Canvas => Ok(()),
        }
    }

    /// Flips a card's completion flag; pure data + presentation, the gesture
    /// mode is untouched.
    pub fn toggle_completed(&mut self, node: NodeId) -> BoardResult<()> {
        let Some(card) = self.nodes.get_mut(node) else {
            return Ok(());
        };
        let completed = card.toggle_completed();
        self.surface.set_completed(node, completed);
        info!(
            "event=completion_toggled module=board status=ok node={node} completed={completed}"
        );
        Ok(())
    }

    /// Commit/Delete key scoped to a focused card.
    pub fn key(&mut self, key: EditKey, node: NodeId) -> BoardResult<()> {
        match key {
            EditKey::Commit => {
                self.surface.release_focus(node);
                Ok(())
            }
            EditKey::Delete => {
                self.remove_node(node);
                Ok(())
            }
        }
    }

    /// Removes a card and cascades every incident link atomically.
    ///
    /// Idempotent: unknown ids are a no-op.
    pub fn remove_node(&mut self, node: NodeId) {
        if self.nodes.remove(node).is_none() {
            return;
        }
        self.surface.remove_node(node);
        let removed = self.links.remove_incident(node);
        for link in &removed {
            self.surface.remove_link(link.uuid);
        }

        // Gesture state must not keep referencing the removed card.
        let mode = std::mem::replace(&mut self.mode, GestureMode::Idle);
        self.mode = match mode {
            GestureMode::Dragging(session) if session.node == node => {
                self.surface.release_pointer(session.capture);
                GestureMode::Idle
            }
            GestureMode::LinkPending { source } if source == node => GestureMode::Idle,
            GestureMode::Resizing { node: hovered } if hovered == node => GestureMode::Idle,
            other => other,
        };

        info!(
            "event=node_removed module=board status=ok node={node} cascaded_links={}",
            removed.len()
        );
    }

    /// Removes one link only. Idempotent.
    pub fn remove_link(&mut self, link: LinkId) {
        if self.links.remove(link).is_none() {
            return;
        }
        self.surface.remove_link(link);
        info!("event=link_removed module=board status=ok link={link}");
    }

    /// Surface callback: displayed text wrapped to new lines; auto-fits the
    /// card height and refreshes links against the changed box.
    pub fn content_grown(&mut self, node: NodeId, intrinsic_height: f64) -> BoardResult<()> {
        let Some(card) = self.nodes.get_mut(node) else {
            return Ok(());
        };
        card.fit_height(intrinsic_height);
        let size = card.size;
        self.surface.resize_node(node, size)?;
        self.refresh_links();
        Ok(())
    }

    fn begin_drag(&mut self, node: NodeId, at: Point) -> BoardResult<()> {
        // Grab offset comes from the live box, not the commanded origin, so
        // native width resizes cannot skew the drag.
        let live = self.surface.node_box(node)?;
        let grab_offset = at - live.origin;
        if let GestureMode::LinkPending { source } = self.mode {
            // A plain press is a real gesture; it outranks the armed link.
            debug!(
                "event=link_pending_dropped module=board status=ok source={source} reason=drag"
            );
        }
        let capture = self.surface.capture_pointer();
        self.mode = GestureMode::Dragging(DragSession {
            node,
            grab_offset,
            capture,
        });
        debug!(
            "event=drag_start module=board status=ok node={node} grab_dx={} grab_dy={}",
            grab_offset.dx, grab_offset.dy
        );
        Ok(())
    }

    fn link_press(&mut self, node: NodeId) -> BoardResult<()> {
        match self.mode {
            GestureMode::LinkPending { source } => {
                // Clear the pending state first so a rejected link cannot
                // leave the machine armed.
                self.mode = GestureMode::Idle;
                self.create_link(source, node).map(|_| ())
            }
            _ => {
                self.mode = GestureMode::LinkPending { source: node };
                debug!("event=link_pending module=board status=ok source={node}");
                Ok(())
            }
        }
    }

    /// Hot-zone evaluation on pointer-move (and only there; a press inside
    /// the zone before any move still classifies as drag — a known race,
    /// kept deliberately).
    fn update_resize_hover(&mut self, at: Point, target: PointerTarget) {
        let current = match &self.mode {
            GestureMode::Idle => None,
            GestureMode::Resizing { node } => Some(*node),
            // An armed link outranks hover feedback.
            _ => return,
        };

        let hovered = match target {
            PointerTarget::Node(node) => self.surface.node_box(node).ok().and_then(|live| {
                let in_zone = live.contains(at) && live.right() - at.x < RESIZE_HOT_ZONE_PX;
                in_zone.then_some(node)
            }),
            _ => None,
        };

        if current == hovered {
            return;
        }
        if let Some(prev) = current {
            self.surface.set_resize_hint(prev, false);
        }
        match hovered {
            Some(next) => {
                self.surface.set_resize_hint(next, true);
                self.mode = GestureMode::Resizing { node: next };
                debug!("event=resize_hover module=board status=ok node={next}");
            }
            None => {
                self.mode = GestureMode::Idle;
            }
        }
    }

    fn refresh_links(&mut self) {
        let _ = geometry_service::refresh_all(&mut self.surface, self.links.iter());
    }
}
