//! Domain model for the interactive task canvas.
//!
//! # Responsibility
//! - Define canonical data structures used by registries and services.
//! - Keep geometry, card and link shapes free of any rendering dependency.
//!
//! # Invariants
//! - Every domain object is identified by a stable uuid handle, never by a
//!   rendered visual.
//! - Link endpoint coordinates are derived state and never persisted here.

pub mod geometry;
pub mod link;
pub mod node;
