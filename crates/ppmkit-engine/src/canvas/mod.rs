//! In-memory pixel grid and its text export.

mod export;
mod pixel_canvas;

pub use export::PpmText;
pub use pixel_canvas::{PixelCanvas, DEFAULT_COLOR_DEPTH};
