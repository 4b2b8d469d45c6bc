//! Library exports for the texturegen generators.
//!
//! Exposes the texture generators alongside the drawing and output
//! helpers they rely on so that tests (and other tools) can drive the
//! generators directly with seeded randomness and custom parameters.

pub mod draw;
pub mod output;
pub mod texture;
