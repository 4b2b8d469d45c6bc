//! Output path resolution, PNG saving, and viewer launch.

use std::path::{Path, PathBuf};

use image::{EncodableLayout, ImageBuffer, PixelWithColorType};
use thiserror::Error;

/// Errors that can occur while writing a finished texture.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not resolve a desktop or home directory")]
    DesktopUnavailable,

    #[error("failed to encode or write texture: {0}")]
    Image(#[from] image::ImageError),
}

/// Resolves the default output directory: the user's desktop.
///
/// Uses the platform desktop directory when one is configured, and
/// falls back to `Desktop` under the home directory otherwise. The
/// directory is not created if missing; writing into it will fail.
pub fn default_output_dir() -> Result<PathBuf, OutputError> {
    if let Some(desktop) = dirs::desktop_dir() {
        return Ok(desktop);
    }
    dirs::home_dir()
        .map(|home| home.join("Desktop"))
        .ok_or(OutputError::DesktopUnavailable)
}

/// Encodes a texture as PNG at `directory/file_name`.
///
/// Encode and I/O failures propagate unchanged; there are no retries
/// and no cleanup of partial output.
///
/// # Arguments
/// * `texture` - Finished image buffer to encode
/// * `directory` - Directory to write into (must already exist)
/// * `file_name` - Output filename, including extension
///
/// # Returns
/// Path to the written file
pub fn save_texture<P>(
    texture: &ImageBuffer<P, Vec<P::Subpixel>>,
    directory: &Path,
    file_name: &str,
) -> Result<PathBuf, OutputError>
where
    P: PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    let path = directory.join(file_name);

    log::info!(
        "Saving {}x{} texture to: {}",
        texture.width(),
        texture.height(),
        path.display()
    );
    texture.save(&path)?;
    log::debug!("Texture written: {}", path.display());

    Ok(path)
}

/// Opens a written texture in the host's default image viewer.
///
/// Best-effort: failure to launch a viewer is logged and ignored, as
/// it is not required for correctness.
pub fn open_in_viewer(path: &Path) {
    log::debug!("Opening {} in the default viewer", path.display());
    if let Err(err) = open::that(path) {
        log::warn!("Could not open {} in a viewer: {err}", path.display());
    }
}
