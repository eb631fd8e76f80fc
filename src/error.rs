// One error type for the whole program. Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),   // Creating the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String), // Pushing the frame to the window failed
    #[error("cannot allocate a {width}x{height} raster buffer")]
    RasterAlloc { width: u32, height: u32 },
    #[error("snapshot buffer does not match {width}x{height}")]
    SnapshotBuffer { width: u32, height: u32 },
    #[error("snapshot export error: {0}")]
    Snapshot(#[from] image::ImageError),
}
