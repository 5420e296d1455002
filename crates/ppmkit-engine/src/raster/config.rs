/// Default number of Bézier parameter steps (`t` advances by `1 / steps`),
/// giving `steps + 1` samples per curve.
pub const DEFAULT_BEZIER_STEPS: u32 = 100_000;

/// How `draw_line` interprets its `thickness` argument.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LineMode {
    /// `thickness` copies of the line, shifted right one pixel at a time.
    #[default]
    Axis,
    /// Copies offset along the line normal, centered on the requested line.
    Perpendicular,
    /// Historical output: `thickness + 1` x-shifted copies, with the start x
    /// added twice.
    Legacy,
}

/// Polynomial basis used by `draw_bezier`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BezierBasis {
    /// Bernstein basis: `C(n,i) (1-t)^(n-i) t^i`.
    #[default]
    Standard,
    /// Historical `C(n,i) (1-t)^(n-1) t^i`.
    /// Only the first control point is an exact endpoint.
    Legacy,
}

/// What happens to pixels left over when a pattern extent is not a multiple
/// of its cell count.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PatternRemainder {
    /// Cells are `extent / count` wide; leftover pixels keep their color.
    #[default]
    Truncate,
    /// The last row and column absorb the leftover pixels.
    StretchLast,
}

/// Rasterizer behavior switches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterConfig {
    pub line_mode: LineMode,
    pub bezier_basis: BezierBasis,
    pub bezier_steps: u32,
    pub pattern_remainder: PatternRemainder,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            line_mode: LineMode::default(),
            bezier_basis: BezierBasis::default(),
            bezier_steps: DEFAULT_BEZIER_STEPS,
            pattern_remainder: PatternRemainder::default(),
        }
    }
}

impl RasterConfig {
    /// Matches historical output, quirks included.
    pub fn legacy() -> Self {
        Self {
            line_mode: LineMode::Legacy,
            bezier_basis: BezierBasis::Legacy,
            ..Self::default()
        }
    }
}
