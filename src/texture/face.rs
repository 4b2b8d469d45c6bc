//! Smiley-face sprite generator.

use image::RgbaImage;
use imageproc::drawing::draw_filled_circle_mut;

use crate::draw::color;
use crate::draw::stroke::draw_arc_mut;

/// Output filename for the face sprite.
pub const FILE_NAME: &str = "happy_face_texture.png";

/// Parameters for the face sprite.
///
/// Every measurement of the sprite derives from the face radius
/// (`width * face_scale`), so the whole face scales uniformly when the
/// canvas size changes.
#[derive(Debug, Clone)]
pub struct FaceParams {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Face radius as a fraction of the canvas width.
    pub face_scale: f64,
    /// Width of the face outline and mouth stroke in pixels.
    pub stroke_width: i32,
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            face_scale: 0.45,
            stroke_width: 4,
        }
    }
}

/// Generates the face sprite on a fully transparent canvas.
///
/// Draw order matters: the face disc first, then the eyes, then the
/// mouth; later draws replace earlier pixels where they overlap.
/// Deterministic: identical parameters produce byte-identical output.
pub fn generate(params: &FaceParams) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(params.width, params.height, color::TRANSPARENT);

    let cx = (params.width / 2) as i32;
    let cy = (params.height / 2) as i32;
    let face_radius = (params.width as f64 * params.face_scale) as i32;

    // Face disc: a black circle with the yellow fill inset by the
    // stroke width, leaving the outline as a ring.
    draw_filled_circle_mut(&mut canvas, (cx, cy), face_radius, color::INK_BLACK);
    draw_filled_circle_mut(
        &mut canvas,
        (cx, cy),
        face_radius - params.stroke_width,
        color::FACE_YELLOW,
    );

    // Eyes: two filled dots above the horizontal midline.
    let eye_radius = (face_radius as f64 * 0.15) as i32;
    let eye_cy = cy - face_radius / 3;
    for eye_cx in [cx - face_radius / 2, cx + face_radius / 2] {
        draw_filled_circle_mut(&mut canvas, (eye_cx, eye_cy), eye_radius, color::INK_BLACK);
    }

    // Mouth: an arc through the bottom of a box that spans from just
    // above the center down to three quarters of the face radius.
    let mouth_top = cy - (face_radius as f64 * 0.2) as i32;
    let mouth_bottom = cy + (face_radius as f64 * 0.75) as i32;
    let mouth_half_width = (face_radius as f64 * 0.75) as i32;
    draw_arc_mut(
        &mut canvas,
        (cx, (mouth_top + mouth_bottom) / 2),
        (mouth_half_width, (mouth_bottom - mouth_top) / 2),
        20.0,
        160.0,
        params.stroke_width,
        color::INK_BLACK,
    );

    canvas
}
