//! Polyline and arc stroking on top of `imageproc` primitives.

use imageproc::drawing::{Canvas, draw_filled_circle_mut, draw_line_segment_mut};

/// Draws a connected 1-pixel polyline through `points`.
///
/// Consecutive points are joined with straight line segments, matching
/// the meandering crack strokes of the wall texture. Fewer than two
/// points draw nothing.
///
/// # Arguments
/// * `canvas` - Target canvas to draw on
/// * `points` - Sequence of (x, y) vertices to connect
/// * `color` - Stroke color
pub fn draw_polyline_mut<C>(canvas: &mut C, points: &[(i32, i32)], color: C::Pixel)
where
    C: Canvas,
{
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line_segment_mut(
            canvas,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            color,
        );
    }
}

/// Strokes an elliptical arc with a given width.
///
/// The arc lies on the ellipse centered at `center` with half-axes
/// `radii`, swept from `start_deg` to `end_deg`. Angles follow the
/// raster convention: 0 degrees points right (3 o'clock) and angles
/// increase clockwise, so a 20..160 degree sweep passes through the
/// bottom of the ellipse.
///
/// The path is sampled densely (about one sample per pixel of arc
/// length) and each sample is stamped with a filled dot of half the
/// stroke width, which keeps the stroke connected at any sweep.
///
/// # Arguments
/// * `canvas` - Target canvas to draw on
/// * `center` - Ellipse center (x, y)
/// * `radii` - Ellipse half-axes (horizontal, vertical)
/// * `start_deg` - Sweep start angle in degrees
/// * `end_deg` - Sweep end angle in degrees
/// * `width` - Stroke width in pixels
/// * `color` - Stroke color
pub fn draw_arc_mut<C>(
    canvas: &mut C,
    center: (i32, i32),
    radii: (i32, i32),
    start_deg: f64,
    end_deg: f64,
    width: i32,
    color: C::Pixel,
) where
    C: Canvas,
{
    let (cx, cy) = center;
    let (rx, ry) = radii;
    if rx <= 0 || ry <= 0 || width <= 0 {
        return;
    }

    let sweep = (end_deg - start_deg).to_radians().abs();
    let max_radius = rx.max(ry) as f64;
    // One sample per pixel of (outer-bound) arc length, at least two.
    let steps = ((sweep * max_radius).ceil() as usize).max(2);
    let stamp_radius = (width / 2).max(1);

    let start = start_deg.to_radians();
    let step = (end_deg - start_deg).to_radians() / steps as f64;
    for i in 0..=steps {
        let theta = start + step * i as f64;
        let x = cx as f64 + rx as f64 * theta.cos();
        let y = cy as f64 + ry as f64 * theta.sin();
        draw_filled_circle_mut(
            canvas,
            (x.round() as i32, y.round() as i32),
            stamp_radius,
            color,
        );
    }
}
