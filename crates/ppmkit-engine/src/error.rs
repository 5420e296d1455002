use std::fmt;

/// Errors raised by canvas construction and drawing operations.
///
/// Every drawing operation validates its inputs before the first pixel write,
/// so an `Err` always means the canvas was left untouched. Out-of-range pixel
/// writes are not errors; they are dropped by [`PixelCanvas::set_pixel`].
///
/// [`PixelCanvas::set_pixel`]: crate::canvas::PixelCanvas::set_pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Canvas width or height is zero, or the pixel count does not fit in memory.
    InvalidDimension { width: u32, height: u32 },
    /// An argument makes the operation undefined (e.g. zero pattern cells).
    InvalidArgument(&'static str),
    /// Geometry collapses to a point where a direction or length is required.
    DegenerateInput(&'static str),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid canvas dimensions {width}x{height}")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::DegenerateInput(msg) => write!(f, "degenerate input: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}

pub type Result<T, E = RasterError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_dimensions() {
        let e = RasterError::InvalidDimension { width: 0, height: 3 };
        assert_eq!(e.to_string(), "invalid canvas dimensions 0x3");
    }

    #[test]
    fn display_carries_message() {
        let e = RasterError::DegenerateInput("zero chord");
        assert_eq!(e.to_string(), "degenerate input: zero chord");
    }
}
