// Export the canvas to a PNG file.

use crate::error::Error;
use crate::surface::DrawingSurface;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// `finger-paint-<unix seconds>.png` inside `dir`.
pub fn default_path(dir: &Path) -> PathBuf {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    dir.join(format!("finger-paint-{secs}.png"))
}

/// Write committed strokes over the background. The stroke in progress is not included.
pub fn save_png(surface: &DrawingSurface, path: &Path) -> Result<(), Error> {
    let (width, height) = (surface.width(), surface.height());
    let image = RgbaImage::from_raw(width, height, surface.flatten_rgba()?)
        .ok_or(Error::SnapshotBuffer { width, height })?;
    image.save(path)?;
    Ok(())
}
