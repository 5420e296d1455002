//! Shape rasterization.
//!
//! Every algorithm reduces its geometry to [`PixelCanvas::set_pixel`] calls and
//! relies on its silent clamp: coordinates may go negative or past the canvas
//! edge without any clipping here. Fallible operations validate their inputs
//! before the first write, so an `Err` leaves the canvas untouched.
//!
//! | Module | Operations |
//! |--------|------------|
//! | `rect` | `fill`, `draw_rect`, `draw_hline`, `draw_vline`, `draw_empty_rect`, `draw_border` |
//! | `pattern` | `draw_checkered_pattern`, `draw_checkered` |
//! | `line` | `draw_line` |
//! | `curve` | `draw_quad_bezier`, `draw_bezier` |
//! | `binomial` | `binomial_coefficient`, `binomial_row`, `binomial_row_f64` |

mod binomial;
mod config;
mod curve;
mod line;
mod pattern;
mod rect;

pub use binomial::{binomial_coefficient, binomial_row, binomial_row_f64};
pub use config::{BezierBasis, LineMode, PatternRemainder, RasterConfig, DEFAULT_BEZIER_STEPS};
pub use curve::{bezier_point, quad_bezier_point};

use crate::canvas::PixelCanvas;
use crate::coords::{Color, Point2D};

/// Drawing surface borrowed from a [`PixelCanvas`].
///
/// Obtained through [`PixelCanvas::raster`] or [`PixelCanvas::raster_with`].
/// Infallible operations return `&mut Self` so calls can be chained.
pub struct Rasterizer<'a> {
    canvas: &'a mut PixelCanvas,
    config: RasterConfig,
}

impl<'a> Rasterizer<'a> {
    pub(crate) fn new(canvas: &'a mut PixelCanvas, config: RasterConfig) -> Self {
        Self { canvas, config }
    }

    /// Behavior switches this rasterizer was created with.
    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Read access to the canvas while the rasterizer holds it.
    #[inline]
    pub fn canvas(&self) -> &PixelCanvas {
        &*self.canvas
    }

    /// Canvas size as signed coordinates.
    #[inline]
    fn extent(&self) -> (i32, i32) {
        let w = i32::try_from(self.canvas.width()).unwrap_or(i32::MAX);
        let h = i32::try_from(self.canvas.height()).unwrap_or(i32::MAX);
        (w, h)
    }

    /// Writes one pixel from wide coordinates; anything outside `i32` cannot be
    /// on the canvas and is dropped.
    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.canvas.set_pixel(x, y, color);
        }
    }

    /// Horizontal run of `thickness` pixels starting at `p`.
    #[inline]
    fn stamp(&mut self, p: Point2D<i64>, color: Color, thickness: u32) {
        for offset in 0..i64::from(thickness) {
            self.plot(p.x + offset, p.y, color);
        }
    }
}

/// `start..start + len` without overflowing.
#[inline]
fn span(start: i32, len: u32) -> core::ops::Range<i32> {
    let len = i32::try_from(len).unwrap_or(i32::MAX);
    start..start.saturating_add(len)
}
