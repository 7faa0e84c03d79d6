//! Use-case services over the registries and the drawing surface.
//!
//! # Responsibility
//! - Orchestrate gesture classification and registry mutation (`board_service`).
//! - Resolve link geometry from live boxes (`geometry_service`).
//!
//! # Invariants
//! - Services never bypass registry validation or surface contracts.
//! - Mutation and geometry refresh keep the fixed order mutate -> refresh
//!   within one handler call.

pub mod board_service;
pub mod geometry_service;
