//! Noisy cement wall texture generator.

use image::{Rgb, RgbImage, imageops};
use rand::Rng;

use crate::draw::color;
use crate::draw::stroke::draw_polyline_mut;

/// Output filename for the wall texture.
pub const FILE_NAME: &str = "cement_texture.png";

/// Parameters for the cement wall texture.
#[derive(Debug, Clone)]
pub struct WallParams {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Flat color the canvas starts from.
    pub base_color: Rgb<u8>,
    /// Maximum absolute per-channel deviation of one noise sample.
    pub noise_intensity: i32,
    /// Number of noise samples scattered over the canvas.
    pub noise_points: u32,
    /// Number of crack polylines to overlay. Disabled by default.
    pub num_cracks: u32,
    /// Stroke color of the crack polylines.
    pub crack_color: Rgb<u8>,
    /// Sigma of the final Gaussian blur.
    pub blur_sigma: f32,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            base_color: color::CEMENT_BASE,
            noise_intensity: 50,
            noise_points: 20_000,
            num_cracks: 0,
            crack_color: color::CRACK_GRAY,
            blur_sigma: 0.5,
        }
    }
}

/// Generates the wall texture from an injected random source.
///
/// Three passes over an owned canvas: sparse per-pixel noise, optional
/// crack polylines, and a full-canvas Gaussian blur. Reproducible only
/// when `rng` is seeded; the binary seeds it from entropy by default.
pub fn generate<R: Rng>(params: &WallParams, rng: &mut R) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(params.width, params.height, params.base_color);

    apply_noise(&mut canvas, params, rng);

    for _ in 0..params.num_cracks {
        let path = crack_path(params.width, params.height, rng);
        draw_polyline_mut(&mut canvas, &path, params.crack_color);
    }

    imageops::blur(&canvas, params.blur_sigma)
}

/// Scatters `noise_points` single-pixel samples over the canvas.
///
/// Each sample picks a uniform pixel and one delta in
/// [-noise_intensity, +noise_intensity], applied to all three channels
/// of the base color with clamping. Samples may collide (last write
/// wins) and most pixels receive none, so the noise stays sparse.
fn apply_noise<R: Rng>(canvas: &mut RgbImage, params: &WallParams, rng: &mut R) {
    for _ in 0..params.noise_points {
        let x = rng.gen_range(0..canvas.width());
        let y = rng.gen_range(0..canvas.height());
        let delta = rng.gen_range(-params.noise_intensity..=params.noise_intensity);
        canvas.put_pixel(x, y, color::shift(params.base_color, delta));
    }
}

/// Random-walks one crack polyline, clamped to the canvas bounds.
///
/// Starts at a uniform pixel and takes a random number of steps in
/// [20, 100], each displacing both axes by a value in [-2, 2]. Every
/// intermediate point is clamped so the whole path stays on canvas.
fn crack_path<R: Rng>(width: u32, height: u32, rng: &mut R) -> Vec<(i32, i32)> {
    let max_x = width as i32 - 1;
    let max_y = height as i32 - 1;

    let mut x = rng.gen_range(0..=max_x);
    let mut y = rng.gen_range(0..=max_y);
    let length: usize = rng.gen_range(20..=100);

    let mut points = Vec::with_capacity(length + 1);
    points.push((x, y));
    for _ in 0..length {
        x = (x + rng.gen_range(-2..=2)).clamp(0, max_x);
        y = (y + rng.gen_range(-2..=2)).clamp(0, max_y);
        points.push((x, y));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_canvas_is_512_square() {
        let mut rng = StdRng::seed_from_u64(1);
        let texture = generate(&WallParams::default(), &mut rng);
        assert_eq!(texture.dimensions(), (512, 512));
    }

    #[test]
    fn identical_seeds_reproduce_the_texture() {
        let params = WallParams::default();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate(&params, &mut rng_a).as_raw(),
            generate(&params, &mut rng_b).as_raw()
        );
    }

    #[test]
    fn noise_stays_within_intensity_of_the_base_color() {
        let params = WallParams::default();
        let mut canvas = RgbImage::from_pixel(params.width, params.height, params.base_color);
        let mut rng = StdRng::seed_from_u64(7);

        apply_noise(&mut canvas, &params, &mut rng);

        let base = i32::from(params.base_color[0]);
        for pixel in canvas.pixels() {
            let Rgb([r, g, b]) = *pixel;
            // A single delta shifts all three channels together.
            assert_eq!(r, g);
            assert_eq!(g, b);
            let deviation = (i32::from(r) - base).abs();
            assert!(deviation <= params.noise_intensity);
        }
    }

    #[test]
    fn crack_path_stays_on_canvas_with_small_steps() {
        let mut rng = StdRng::seed_from_u64(3);
        let path = crack_path(512, 512, &mut rng);

        assert!(path.len() >= 21 && path.len() <= 101);
        for pair in path.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            assert!((0..512).contains(&x1) && (0..512).contains(&y1));
            assert!((x1 - x0).abs() <= 2 && (y1 - y0).abs() <= 2);
        }
    }

    #[test]
    fn crack_pass_runs_when_enabled() {
        // The crack pass is disabled by default and visually unverified;
        // this only checks the code path completes within bounds.
        let params = WallParams {
            num_cracks: 5,
            ..WallParams::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let texture = generate(&params, &mut rng);
        assert_eq!(texture.dimensions(), (512, 512));
    }
}
