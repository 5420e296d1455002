//! Plain-text PPM (`P3`) serialization.
//!
//! ```text
//! P3
//! <width> <height>
//! <color depth>
//! r g b r g b ... \n     one line per row, every triple followed by a space
//! ```
//!
//! Alpha is not serialized.

use std::fmt;
use std::io;

use super::PixelCanvas;

/// Borrowed view that formats a canvas as `P3` text.
#[derive(Debug, Clone, Copy)]
pub struct PpmText<'a> {
    canvas: &'a PixelCanvas,
}

impl fmt::Display for PpmText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.canvas;
        write!(f, "P3\n{} {}\n{}\n", c.width(), c.height(), c.color_depth())?;
        for row in c.pixels().chunks_exact(c.width() as usize) {
            for p in row {
                write!(f, "{} {} {} ", p.r, p.g, p.b)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl PixelCanvas {
    #[inline]
    pub fn ppm(&self) -> PpmText<'_> {
        PpmText { canvas: self }
    }

    /// Serializes the current buffer. Does not mutate the canvas.
    pub fn export(&self) -> String {
        log::debug!("exporting canvas '{}' ({}x{})", self.name(), self.width(), self.height());
        self.ppm().to_string()
    }

    /// Streams the same text as [`export`](Self::export) into `w`.
    pub fn write_to<W: io::Write>(&self, mut w: W) -> io::Result<()> {
        log::debug!("writing canvas '{}' ({}x{})", self.name(), self.width(), self.height());
        write!(w, "{}", self.ppm())?;
        w.flush()
    }
}
