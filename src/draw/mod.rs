//! Raster drawing primitives shared by the texture generators.
//!
//! This module defines the pieces the generators compose:
//! - [`color`]: the fixed palette plus clamped channel arithmetic
//! - [`stroke`]: polyline and arc stroking over `imageproc` canvases

pub mod color;
pub mod stroke;

// Re-export the stroking entry points at module level
pub use stroke::{draw_arc_mut, draw_polyline_mut};
