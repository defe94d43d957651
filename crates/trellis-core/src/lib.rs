//! Core types for the Trellis sizer layout engine.
//!
//! This crate provides the foundational types used by the layout crate:
//! - Geometry primitives (axes, borders, rectangles)
//! - Alignment and fill flags
//! - Sizer configuration
//! - Error types

pub mod config;
pub mod errors;
pub mod flags;
pub mod geometry;

pub use config::*;
pub use errors::*;
pub use flags::*;
pub use geometry::*;

pub use glam::Vec2;
