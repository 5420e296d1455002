//! Persists exported canvases. The engine never touches the filesystem itself.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use ppmkit_engine::PixelCanvas;

/// Writes the canvas as `P3` text to `path`, replacing any existing file.
pub fn save(canvas: &PixelCanvas, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open {} for output", path.display()))?;
    canvas
        .write_to(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}x{} image to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

pub fn write_stdout(canvas: &PixelCanvas) -> Result<()> {
    canvas
        .write_to(io::stdout().lock())
        .context("failed to write image to stdout")
}
