use crate::coords::Color;

use super::{span, Rasterizer};

impl Rasterizer<'_> {
    /// Fills the half-open rectangle `[x1, x2) × [y1, y2)`, row by row.
    ///
    /// Empty ranges draw nothing.
    pub fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> &mut Self {
        log::trace!("draw_rect ({x1},{y1})-({x2},{y2})");
        for y in y1..y2 {
            for x in x1..x2 {
                self.canvas.set_pixel(x, y, color);
            }
        }
        self
    }

    /// Fills the whole canvas.
    pub fn fill(&mut self, color: Color) -> &mut Self {
        let (w, h) = self.extent();
        self.draw_rect(0, 0, w, h, color)
    }

    /// Horizontal strip `[x1, x2)` wide and `thickness` rows tall, starting at row `y1`.
    pub fn draw_hline(&mut self, x1: i32, y1: i32, x2: i32, color: Color, thickness: u32) -> &mut Self {
        for y in span(y1, thickness) {
            for x in x1..x2 {
                self.canvas.set_pixel(x, y, color);
            }
        }
        self
    }

    /// Vertical strip `[y1, y2)` tall and `thickness` columns wide, starting at column `x1`.
    pub fn draw_vline(&mut self, x1: i32, y1: i32, y2: i32, color: Color, thickness: u32) -> &mut Self {
        for x in span(x1, thickness) {
            for y in y1..y2 {
                self.canvas.set_pixel(x, y, color);
            }
        }
        self
    }

    /// Outline of `[x1, x2) × [y1, y2)` with strips `thickness` pixels wide.
    ///
    /// Built from four strips: top, bottom, left, right. Corners where strips
    /// overlap are painted twice.
    pub fn draw_empty_rect(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        thickness: u32,
    ) -> &mut Self {
        log::trace!("draw_empty_rect ({x1},{y1})-({x2},{y2}) thickness {thickness}");
        let t = i32::try_from(thickness).unwrap_or(i32::MAX);
        self.draw_hline(x1, y1, x2.saturating_sub(t), color, thickness)
            .draw_hline(x1, y2.saturating_sub(t), x2, color, thickness)
            .draw_vline(x1, y1, y2.saturating_sub(t), color, thickness)
            .draw_vline(x2.saturating_sub(t), y1, y2, color, thickness)
    }

    /// Outline along the canvas edges.
    pub fn draw_border(&mut self, color: Color, thickness: u32) -> &mut Self {
        let (w, h) = self.extent();
        self.draw_empty_rect(0, 0, w, h, color, thickness)
    }
}

#[cfg(test)]
mod tests {
    use crate::raster::test_util::{ascii, blank, painted, BG, INK};

    // ── draw_rect ─────────────────────────────────────────────────────────

    #[test]
    fn full_rect_paints_every_cell() {
        let mut c = blank(5, 4);
        c.raster().draw_rect(0, 0, 5, 4, INK);
        assert!(c.pixels().iter().all(|&p| p == INK));
    }

    #[test]
    fn full_rect_export_is_stable() {
        let mut c = blank(3, 3);
        c.raster().draw_rect(0, 0, 3, 3, INK);
        assert_eq!(c.export(), c.export());
    }

    #[test]
    fn rect_is_half_open() {
        let mut c = blank(4, 4);
        c.raster().draw_rect(1, 1, 3, 2, INK);
        assert_eq!(ascii(&c), ["....", ".##.", "....", "...."]);
    }

    #[test]
    fn inverted_rect_draws_nothing() {
        let mut c = blank(4, 4);
        c.raster().draw_rect(3, 0, 1, 4, INK).draw_rect(0, 3, 4, 3, INK);
        assert_eq!(painted(&c), 0);
    }

    #[test]
    fn rect_past_edges_is_clipped_by_canvas() {
        let mut c = blank(3, 3);
        c.raster().draw_rect(-2, 2, 10, 10, INK);
        assert_eq!(ascii(&c), ["...", "...", "###"]);
    }

    #[test]
    fn fill_covers_canvas() {
        let mut c = blank(2, 3);
        c.raster().fill(INK);
        assert_eq!(painted(&c), 6);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn hline_grows_downwards() {
        let mut c = blank(5, 4);
        c.raster().draw_hline(1, 1, 4, INK, 2);
        assert_eq!(ascii(&c), [".....", ".###.", ".###.", "....."]);
    }

    #[test]
    fn vline_grows_rightwards() {
        let mut c = blank(4, 4);
        c.raster().draw_vline(2, 0, 3, INK, 2);
        assert_eq!(ascii(&c), ["..##", "..##", "..##", "...."]);
    }

    #[test]
    fn zero_thickness_line_draws_nothing() {
        let mut c = blank(4, 4);
        c.raster().draw_hline(0, 0, 4, INK, 0).draw_vline(0, 0, 4, INK, 0);
        assert_eq!(painted(&c), 0);
    }

    // ── draw_empty_rect ───────────────────────────────────────────────────

    #[test]
    fn empty_rect_paints_only_the_border() {
        let mut c = blank(6, 5);
        c.raster().draw_empty_rect(0, 0, 6, 5, INK, 1);
        assert_eq!(ascii(&c), ["######", "#....#", "#....#", "#....#", "######"]);
    }

    #[test]
    fn thick_border_leaves_interior() {
        let (w, h, t) = (8u32, 7u32, 2u32);
        let mut c = blank(w, h);
        c.raster().draw_border(INK, t);

        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let on_border = x < t as i32
                    || y < t as i32
                    || x >= (w - t) as i32
                    || y >= (h - t) as i32;
                let expected = if on_border { INK } else { BG };
                assert_eq!(c.pixel(x, y), Some(expected), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn offset_empty_rect() {
        let mut c = blank(6, 6);
        c.raster().draw_empty_rect(1, 1, 5, 5, INK, 1);
        assert_eq!(
            ascii(&c),
            ["......", ".####.", ".#..#.", ".#..#.", ".####.", "......"]
        );
    }
}
