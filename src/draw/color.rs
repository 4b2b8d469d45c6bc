//! Palette constants and clamped channel arithmetic.

use image::{Rgb, Rgba};

// ============================================================================
// Texture Palette
// ============================================================================

/// Light gray used for the even checkerboard tiles (R=180, G=180, B=180).
pub const CHECKER_LIGHT: Rgb<u8> = Rgb([180, 180, 180]);

/// Dark gray used for the odd checkerboard tiles (R=100, G=100, B=100).
pub const CHECKER_DARK: Rgb<u8> = Rgb([100, 100, 100]);

/// Base cement color, a light gray the noise pass perturbs (R=210, G=210, B=210).
pub const CEMENT_BASE: Rgb<u8> = Rgb([210, 210, 210]);

/// Darker gray used for crack polylines on the cement wall.
pub const CRACK_GRAY: Rgb<u8> = Rgb([100, 100, 100]);

/// Opaque yellow fill of the face circle.
pub const FACE_YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);

/// Opaque black used for the face outline, eyes, and mouth.
pub const INK_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fully transparent pixel, the background of the face sprite.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// ============================================================================
// Channel Arithmetic
// ============================================================================

/// Adds `delta` to every channel of `color`, clamping each result to [0, 255].
///
/// This is the per-sample operation of the wall noise pass: one signed
/// delta is applied uniformly to all three channels so the perturbed
/// pixel stays on the gray axis of the base color.
///
/// # Arguments
/// * `color` - Base color to perturb
/// * `delta` - Signed offset applied to each channel
pub fn shift(color: Rgb<u8>, delta: i32) -> Rgb<u8> {
    let Rgb([r, g, b]) = color;
    Rgb([
        shift_channel(r, delta),
        shift_channel(g, delta),
        shift_channel(b, delta),
    ])
}

fn shift_channel(value: u8, delta: i32) -> u8 {
    (i32::from(value) + delta).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_applies_delta_to_all_channels() {
        assert_eq!(shift(CEMENT_BASE, -10), Rgb([200, 200, 200]));
        assert_eq!(shift(CEMENT_BASE, 30), Rgb([240, 240, 240]));
    }

    #[test]
    fn shift_clamps_at_channel_bounds() {
        assert_eq!(shift(Rgb([250, 250, 250]), 50), Rgb([255, 255, 255]));
        assert_eq!(shift(Rgb([5, 5, 5]), -50), Rgb([0, 0, 0]));
    }

    #[test]
    fn shift_with_zero_delta_is_identity() {
        assert_eq!(shift(CHECKER_LIGHT, 0), CHECKER_LIGHT);
    }
}
