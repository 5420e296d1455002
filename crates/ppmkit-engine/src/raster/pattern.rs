use crate::coords::Color;
use crate::error::{RasterError, Result};

use super::{PatternRemainder, Rasterizer};

/// Cell layout along one axis of a checkered pattern.
#[derive(Debug, Copy, Clone)]
struct CellAxis {
    start: i64,
    end: i64,
    cell: i64,
    count: u32,
    stretch_last: bool,
}

impl CellAxis {
    fn new(start: i32, end: i32, count: u32, remainder: PatternRemainder) -> Result<Self> {
        if count == 0 {
            return Err(RasterError::InvalidArgument("checkered pattern needs at least one cell per axis"));
        }
        let (start, end) = (i64::from(start), i64::from(end));
        let extent = end - start;
        let stretch_last = remainder == PatternRemainder::StretchLast;
        if !stretch_last && extent > 0 && i64::from(count) > extent {
            return Err(RasterError::InvalidArgument("more checkered cells than pixels along an axis"));
        }
        Ok(Self {
            start,
            end,
            cell: extent / i64::from(count),
            count,
            stretch_last,
        })
    }

    /// First cell that covers any pixel. With zero-width cells only the
    /// stretched last one does.
    fn first_visible(&self) -> u32 {
        if self.cell == 0 { self.count - 1 } else { 0 }
    }

    fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Half-open bounds of cell `i`.
    fn bounds(&self, i: u32) -> (i64, i64) {
        let lo = self.start + i64::from(i) * self.cell;
        let hi = if self.stretch_last && i + 1 == self.count { self.end } else { lo + self.cell };
        (lo, hi)
    }
}

impl Rasterizer<'_> {
    /// Checkerboard of `x_count × y_count` cells over `[x1, x2) × [y1, y2)`.
    ///
    /// Cell size is `(x2 - x1) / x_count` by `(y2 - y1) / y_count` (integer
    /// division); leftover pixels follow [`RasterConfig::pattern_remainder`].
    ///
    /// Coloring uses two toggles. The row toggle starts `true` and flips at the
    /// start of every row; the column toggle is reset to the row toggle's new
    /// value and flips before every cell. A cell gets `a` when the column toggle
    /// is `true`, so the top-left cell is `a`.
    ///
    /// Fails with [`RasterError::InvalidArgument`] if a count is zero. A count
    /// larger than the pixels on its axis is an error under
    /// [`PatternRemainder::Truncate`]; under [`PatternRemainder::StretchLast`]
    /// the leading cells are empty and the last one spans the whole axis,
    /// colored as if every empty cell had been walked. An empty region draws
    /// nothing.
    ///
    /// [`RasterConfig::pattern_remainder`]: super::RasterConfig::pattern_remainder
    #[allow(clippy::too_many_arguments)]
    pub fn draw_checkered_pattern(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x_count: u32,
        y_count: u32,
        a: Color,
        b: Color,
    ) -> Result<&mut Self> {
        let remainder = self.config.pattern_remainder;
        let cols = CellAxis::new(x1, x2, x_count, remainder)?;
        let rows = CellAxis::new(y1, y2, y_count, remainder)?;
        log::trace!("draw_checkered_pattern ({x1},{y1})-({x2},{y2}) {x_count}x{y_count}");

        if cols.is_empty() || rows.is_empty() {
            return Ok(self);
        }

        // Empty leading cells are skipped; each one would have flipped its toggle once.
        let (first_row, first_col) = (rows.first_visible(), cols.first_visible());
        let mut row_toggle = first_row % 2 == 0;
        for row in first_row..rows.count {
            row_toggle = !row_toggle;
            let mut col_toggle = row_toggle ^ (first_col % 2 == 1);
            let (ya, yb) = rows.bounds(row);
            for col in first_col..cols.count {
                col_toggle = !col_toggle;
                let (xa, xb) = cols.bounds(col);
                let color = if col_toggle { a } else { b };
                for y in ya..yb {
                    for x in xa..xb {
                        self.plot(x, y, color);
                    }
                }
            }
        }
        Ok(self)
    }

    /// Checkerboard over the whole canvas.
    pub fn draw_checkered(&mut self, x_count: u32, y_count: u32, a: Color, b: Color) -> Result<&mut Self> {
        let (w, h) = self.extent();
        self.draw_checkered_pattern(0, 0, w, h, x_count, y_count, a, b)
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Color;
    use crate::error::RasterError;
    use crate::raster::test_util::{ascii, blank, painted, BG, INK};
    use crate::raster::{PatternRemainder, RasterConfig};

    const A: Color = INK;
    const B: Color = Color::rgb(255, 0, 0);

    /// `#` for A, `b` for B, `.` for untouched.
    fn grid(c: &crate::canvas::PixelCanvas) -> Vec<String> {
        ascii(c).into_iter().map(|row| row.replace('?', "b")).collect()
    }

    #[test]
    fn two_by_two_cells_on_4x4() {
        let mut c = blank(4, 4);
        c.raster().draw_checkered(2, 2, A, B).unwrap();
        assert_eq!(grid(&c), ["##bb", "##bb", "bb##", "bb##"]);
    }

    #[test]
    fn odd_counts_still_alternate_between_rows() {
        let mut c = blank(3, 3);
        c.raster().draw_checkered(3, 3, A, B).unwrap();
        assert_eq!(grid(&c), ["#b#", "b#b", "#b#"]);
    }

    #[test]
    fn sub_region_only() {
        let mut c = blank(6, 4);
        c.raster().draw_checkered_pattern(1, 1, 5, 3, 4, 2, A, B).unwrap();
        assert_eq!(grid(&c), ["......", ".#b#b.", ".b#b#.", "......"]);
    }

    #[test]
    fn remainder_is_left_untouched_by_default() {
        let mut c = blank(5, 5);
        c.raster().draw_checkered(2, 2, A, B).unwrap();
        assert_eq!(grid(&c), ["##bb.", "##bb.", "bb##.", "bb##.", "....."]);
    }

    #[test]
    fn stretch_last_covers_remainder() {
        let cfg = RasterConfig { pattern_remainder: PatternRemainder::StretchLast, ..Default::default() };
        let mut c = blank(5, 5);
        c.raster_with(cfg).draw_checkered(2, 2, A, B).unwrap();
        assert_eq!(grid(&c), ["##bbb", "##bbb", "bb###", "bb###", "bb###"]);
    }

    #[test]
    fn zero_count_is_rejected_without_drawing() {
        let mut c = blank(4, 4);
        let err = c.raster().draw_checkered(0, 2, A, B).err();
        assert!(matches!(err, Some(RasterError::InvalidArgument(_))));
        let err = c.raster().draw_checkered(2, 0, A, B).err();
        assert!(matches!(err, Some(RasterError::InvalidArgument(_))));
        assert_eq!(painted(&c), 0);
    }

    #[test]
    fn more_cells_than_pixels_is_rejected_when_truncating() {
        let mut c = blank(4, 4);
        let err = c.raster().draw_checkered(5, 1, A, B).err();
        assert!(matches!(err, Some(RasterError::InvalidArgument(_))));
        assert!(c.pixels().iter().all(|&p| p == BG));
    }

    // ── more cells than pixels, stretched ──

    fn stretched() -> RasterConfig {
        RasterConfig { pattern_remainder: PatternRemainder::StretchLast, ..Default::default() }
    }

    #[test]
    fn stretch_last_lets_the_last_cell_span_a_short_axis() {
        // Six zero-width columns: only column 5 is visible, and an odd index takes `b`.
        let mut c = blank(4, 4);
        c.raster_with(stretched()).draw_checkered(6, 1, A, B).unwrap();
        assert_eq!(grid(&c), ["bbbb"; 4]);

        // Five columns: the visible one has an even index.
        let mut c = blank(4, 4);
        c.raster_with(stretched()).draw_checkered(5, 1, A, B).unwrap();
        assert_eq!(grid(&c), ["####"; 4]);
    }

    #[test]
    fn stretch_last_parity_spans_both_axes() {
        // Visible cell is (row 4, col 5): odd sum, so `b` everywhere.
        let mut c = blank(4, 4);
        c.raster_with(stretched()).draw_checkered(6, 5, A, B).unwrap();
        assert_eq!(grid(&c), ["bbbb"; 4]);

        // Short x axis only: rows keep alternating normally.
        let mut c = blank(2, 4);
        c.raster_with(stretched()).draw_checkered(3, 2, A, B).unwrap();
        assert_eq!(grid(&c), ["##", "##", "bb", "bb"]);
    }

    #[test]
    fn stretch_last_with_huge_counts_finishes() {
        let mut c = blank(3, 2);
        c.raster_with(stretched()).draw_checkered(u32::MAX, u32::MAX, A, B).unwrap();
        // (u32::MAX - 1) twice: even sum.
        assert_eq!(grid(&c), ["###", "###"]);
    }

    #[test]
    fn empty_region_is_a_no_op() {
        let mut c = blank(4, 4);
        c.raster().draw_checkered_pattern(3, 0, 1, 4, 2, 2, A, B).unwrap();
        assert_eq!(painted(&c), 0);
    }
}
