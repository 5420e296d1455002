use crate::coords::Color;
use crate::error::{RasterError, Result};
use crate::raster::{RasterConfig, Rasterizer};

/// Default maximum channel intensity written to the image header.
pub const DEFAULT_COLOR_DEPTH: u16 = 255;

/// Fixed-size grid of colors.
///
/// Invariants:
/// - `width` and `height` are non-zero and never change after construction.
/// - `buffer.len() == width * height`; pixel `(x, y)` lives at `x + y * width`.
///
/// Writes outside the grid are silently dropped. Drawing code leans on this and
/// never clips on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    name: String,
    width: u32,
    height: u32,
    color_depth: u16,
    buffer: Vec<Color>,
}

impl PixelCanvas {
    /// Creates a canvas filled with `base`, using the default color depth.
    pub fn new(name: impl Into<String>, base: Color, width: u32, height: u32) -> Result<Self> {
        Self::with_color_depth(name, base, width, height, DEFAULT_COLOR_DEPTH)
    }

    /// Creates a canvas with an explicit header color depth.
    ///
    /// `color_depth` is metadata only; stored channels are not rescaled or
    /// checked against it.
    pub fn with_color_depth(
        name: impl Into<String>,
        base: Color,
        width: u32,
        height: u32,
        color_depth: u16,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RasterError::InvalidDimension { width, height })?;

        let name = name.into();
        log::debug!("canvas '{name}' created: {width}x{height}, depth {color_depth}");

        Ok(Self { name, width, height, color_depth, buffer: vec![base; len] })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn color_depth(&self) -> u16 {
        self.color_depth
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.buffer
    }

    /// Pixel buffer viewed as packed RGBA bytes.
    #[inline]
    pub fn as_rgba_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buffer)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(x as usize + y as usize * self.width as usize)
    }

    /// Writes `color` at `(x, y)`. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.buffer[i] = color;
        }
    }

    /// Reads the pixel at `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.buffer[i])
    }

    /// Borrows the canvas for drawing with the default configuration.
    #[inline]
    pub fn raster(&mut self) -> Rasterizer<'_> {
        Rasterizer::new(self, RasterConfig::default())
    }

    /// Borrows the canvas for drawing with an explicit configuration.
    #[inline]
    pub fn raster_with(&mut self, config: RasterConfig) -> Rasterizer<'_> {
        Rasterizer::new(self, config)
    }
}
