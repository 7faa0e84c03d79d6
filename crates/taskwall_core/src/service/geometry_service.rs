//! Link-geometry resolver.
//!
//! # Responsibility
//! - Compute anchor points from live node boxes, never from cached geometry.
//! - Recompute link endpoints on demand and push them to the drawing surface.
//!
//! # Invariants
//! - Anchors come from `DrawingSurface::node_box` at call time, so endpoints
//!   reflect native width resizes the core was never notified about.
//! - `refresh_all` runs strictly after the triggering mutation, inside the
//!   same handler invocation; no link is drawn against a stale box.

use crate::model::geometry::Point;
use crate::model::link::{Link, LinkId};
use crate::model::node::NodeId;
use crate::surface::{DrawingSurface, SurfaceError, SurfaceResult};
use log::debug;

/// Result of one full link refresh pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Links whose endpoints were recomputed and pushed to the surface.
    pub refreshed: usize,
    /// Links skipped because an endpoint visual is not realized yet; the
    /// caller defers these to a later pass.
    pub deferred: Vec<LinkId>,
}

impl RefreshOutcome {
    pub fn all_refreshed(&self) -> bool {
        self.deferred.is_empty()
    }
}

/// Returns the current anchor point (box center) of a node, queried live.
///
/// # Errors
/// `NotReady` when the node's visual has not been realized; the caller must
/// defer instead of guessing a box.
pub fn anchor_center<S: DrawingSurface>(surface: &S, node: NodeId) -> SurfaceResult<Point> {
    Ok(surface.node_box(node)?.center())
}

/// Recomputes one link's endpoints from the live boxes of its nodes.
pub fn refresh_link<S: DrawingSurface>(surface: &mut S, link: &Link) -> SurfaceResult<()> {
    let from = anchor_center(surface, link.source)?;
    let to = anchor_center(surface, link.target)?;
    surface.update_link(link.uuid, from, to);
    Ok(())
}

/// Recomputes every link's endpoints, deferring links with unrealized
/// endpoints instead of failing the whole pass.
pub fn refresh_all<'a, S, I>(surface: &mut S, links: I) -> RefreshOutcome
where
    S: DrawingSurface,
    I: IntoIterator<Item = &'a Link>,
{
    let mut outcome = RefreshOutcome {
        refreshed: 0,
        deferred: Vec::new(),
    };
    for link in links {
        match refresh_link(surface, link) {
            Ok(()) => outcome.refreshed += 1,
            Err(SurfaceError::NotReady(node)) => {
                debug!(
                    "event=link_refresh_deferred module=geometry status=deferred link={} node={node}",
                    link.uuid
                );
                outcome.deferred.push(link.uuid);
            }
        }
    }
    outcome
}
