//! ppmkit engine crate.
//!
//! An in-memory pixel canvas, the algorithms that rasterize shapes onto it,
//! and export to plain-text PPM (`P3`).
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Color`, `Point2D` |
//! | [`canvas`] | `PixelCanvas`, `P3` export |
//! | [`raster`] | `Rasterizer`, `RasterConfig`, curve evaluation, binomials |
//! | [`error`] | `RasterError` |
//! | [`logging`] | `env_logger` setup |
//!
//! # Quick start
//!
//! ```rust
//! use ppmkit_engine::canvas::PixelCanvas;
//! use ppmkit_engine::coords::{Color, Point2D};
//!
//! let mut canvas = PixelCanvas::new("out.ppm", Color::black(), 8, 8)?;
//! canvas
//!     .raster()
//!     .draw_checkered(2, 2, Color::white(), Color::rgb(255, 0, 0))?
//!     .draw_line(0, 0, 7, 7, Color::rgb(0, 0, 255), 1)
//!     .draw_bezier(&[Point2D::new(0, 7), Point2D::new(4, 0), Point2D::new(7, 7)], Color::white(), 1)?;
//!
//! assert!(canvas.export().starts_with("P3\n8 8\n255\n"));
//! # Ok::<(), ppmkit_engine::error::RasterError>(())
//! ```

pub mod canvas;
pub mod coords;
pub mod error;
pub mod logging;
pub mod raster;

pub use canvas::PixelCanvas;
pub use coords::{Color, Point2D};
pub use error::RasterError;
pub use raster::{RasterConfig, Rasterizer};
