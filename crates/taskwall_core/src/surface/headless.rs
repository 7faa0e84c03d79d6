//! In-memory drawing surface.
//!
//! # Responsibility
//! - Provide a complete `DrawingSurface` implementation with no display,
//!   used by the smoke CLI and by tests.
//! - Model the native width-resize affordance the real surface owns.
//!
//! # Invariants
//! - `node_box` reports `NotReady` until `place_node` realized the visual.
//! - Capture tokens are unique per session and tracked until released.

use crate::model::geometry::{Point, Rect, Size};
use crate::model::link::LinkId;
use crate::model::node::{Node, NodeId};
use crate::surface::{DrawingSurface, PointerCapture, SurfaceError, SurfaceResult};
use std::collections::{BTreeMap, BTreeSet};

/// Headless surface tracking visuals as plain data.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    boxes: BTreeMap<NodeId, Rect>,
    completed: BTreeSet<NodeId>,
    focused: BTreeSet<NodeId>,
    resize_hints: BTreeSet<NodeId>,
    lines: BTreeMap<LinkId, (Point, Point)>,
    next_capture: u64,
    active_captures: BTreeSet<u64>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Native width-resize affordance; changes the live box without any
    /// notification to the core, exactly like a user-dragged resize handle.
    pub fn resize_width(&mut self, id: NodeId, width: f64) -> SurfaceResult<()> {
        let rect = self
            .boxes
            .get_mut(&id)
            .ok_or(SurfaceError::NotReady(id))?;
        rect.size.width = width;
        Ok(())
    }

    /// Marks a card's content as focused, as a real surface would on click.
    pub fn focus_node(&mut self, id: NodeId) {
        self.focused.insert(id);
    }

    pub fn is_focused(&self, id: NodeId) -> bool {
        self.focused.contains(&id)
    }

    pub fn is_completed_styled(&self, id: NodeId) -> bool {
        self.completed.contains(&id)
    }

    pub fn has_resize_hint(&self, id: NodeId) -> bool {
        self.resize_hints.contains(&id)
    }

    pub fn line_endpoints(&self, id: LinkId) -> Option<(Point, Point)> {
        self.lines.get(&id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.boxes.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of capture sessions still open; zero after every finished drag.
    pub fn active_captures(&self) -> usize {
        self.active_captures.len()
    }
}

impl DrawingSurface for HeadlessSurface {
    fn place_node(&mut self, node: &Node) {
        self.boxes.insert(node.uuid, node.bounding_box());
        if node.completed {
            self.completed.insert(node.uuid);
        }
    }

    fn move_node(&mut self, id: NodeId, origin: Point) -> SurfaceResult<()> {
        let rect = self
            .boxes
            .get_mut(&id)
            .ok_or(SurfaceError::NotReady(id))?;
        rect.origin = origin;
        Ok(())
    }

    fn resize_node(&mut self, id: NodeId, size: Size) -> SurfaceResult<()> {
        let rect = self
            .boxes
            .get_mut(&id)
            .ok_or(SurfaceError::NotReady(id))?;
        rect.size = size;
        Ok(())
    }

    fn remove_node(&mut self, id: NodeId) {
        self.boxes.remove(&id);
        self.completed.remove(&id);
        self.focused.remove(&id);
        self.resize_hints.remove(&id);
    }

    fn node_box(&self, id: NodeId) -> SurfaceResult<Rect> {
        self.boxes.get(&id).copied().ok_or(SurfaceError::NotReady(id))
    }

    fn place_link(&mut self, id: LinkId, from: Point, to: Point) {
        self.lines.insert(id, (from, to));
    }

    fn update_link(&mut self, id: LinkId, from: Point, to: Point) {
        if let Some(endpoints) = self.lines.get_mut(&id) {
            *endpoints = (from, to);
        }
    }

    fn remove_link(&mut self, id: LinkId) {
        self.lines.remove(&id);
    }

    fn set_completed(&mut self, id: NodeId, completed: bool) {
        if completed {
            self.completed.insert(id);
        } else {
            self.completed.remove(&id);
        }
    }

    fn set_resize_hint(&mut self, id: NodeId, active: bool) {
        if active {
            self.resize_hints.insert(id);
        } else {
            self.resize_hints.remove(&id);
        }
    }

    fn release_focus(&mut self, id: NodeId) {
        self.focused.remove(&id);
    }

    fn capture_pointer(&mut self) -> PointerCapture {
        self.next_capture += 1;
        self.active_captures.insert(self.next_capture);
        PointerCapture::new(self.next_capture)
    }

    fn release_pointer(&mut self, capture: PointerCapture) {
        self.active_captures.remove(&capture.token());
    }
}

#[cfg(test)]
mod tests {
    use super::HeadlessSurface;
    use crate::model::geometry::Point;
    use crate::model::node::Node;
    use crate::surface::{DrawingSurface, SurfaceError};
    use uuid::Uuid;

    #[test]
    fn node_box_signals_not_ready_before_placement() {
        let surface = HeadlessSurface::new();
        let unknown = Uuid::new_v4();
        let err = surface
            .node_box(unknown)
            .expect_err("unrealized visual should not have a box");
        assert_eq!(err, SurfaceError::NotReady(unknown));
    }

    #[test]
    fn placement_realizes_the_commanded_box() {
        let mut surface = HeadlessSurface::new();
        let node = Node::new(Point::new(40.0, 60.0));
        surface.place_node(&node);

        let live = surface.node_box(node.uuid).expect("box should be live");
        assert_eq!(live, node.bounding_box());
    }

    #[test]
    fn capture_tokens_are_unique_and_released() {
        let mut surface = HeadlessSurface::new();
        let first = surface.capture_pointer();
        let second = surface.capture_pointer();
        assert_ne!(first.token(), second.token());
        assert_eq!(surface.active_captures(), 2);

        surface.release_pointer(first);
        surface.release_pointer(second);
        assert_eq!(surface.active_captures(), 0);
    }

    #[test]
    fn native_width_resize_changes_the_live_box_only() {
        let mut surface = HeadlessSurface::new();
        let node = Node::new(Point::new(0.0, 0.0));
        surface.place_node(&node);

        surface
            .resize_width(node.uuid, 320.0)
            .expect("realized node should resize");
        let live = surface.node_box(node.uuid).expect("box should be live");
        assert_eq!(live.size.width, 320.0);
        assert_eq!(live.size.height, node.size.height);
    }
}
