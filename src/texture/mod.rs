//! The three texture generators.
//!
//! Each generator is a pure function from a parameter struct (and, for
//! the wall, an injected random source) to an owned image buffer:
//! - [`checkerboard`]: alternating-tile floor texture, opaque RGB
//! - [`face`]: smiley-face sprite on a transparent RGBA canvas
//! - [`wall`]: noisy cement surface with optional cracks, opaque RGB

pub mod checkerboard;
pub mod face;
pub mod wall;

pub use checkerboard::CheckerboardParams;
pub use face::FaceParams;
pub use wall::WallParams;
