//! Value types shared by the canvas and the rasterizer.
//!
//! Canvas space:
//! - Integer pixel coordinates
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod point;

pub use color::Color;
pub use point::Point2D;
