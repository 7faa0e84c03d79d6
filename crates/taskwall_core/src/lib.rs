//! Interaction core for the taskwall canvas.
//! This crate is the single source of truth for gesture and link invariants.

pub mod gesture;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;
pub mod surface;

pub use gesture::{
    DragSession, EditKey, GestureMode, InputEvent, PointerButton, PointerTarget,
    RESIZE_HOT_ZONE_PX,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::geometry::{Point, Rect, Size, Vector};
pub use model::link::{Link, LinkId};
pub use model::node::{ModelError, Node, NodeId, DEFAULT_NODE_WIDTH, MIN_NODE_HEIGHT};
pub use registry::link_registry::LinkRegistry;
pub use registry::node_registry::NodeRegistry;
pub use registry::{RegistryError, RegistryResult};
pub use service::board_service::{Board, BoardError, BoardResult};
pub use service::geometry_service::{anchor_center, refresh_all, refresh_link, RefreshOutcome};
pub use surface::headless::HeadlessSurface;
pub use surface::{DrawingSurface, PointerCapture, SurfaceError, SurfaceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
