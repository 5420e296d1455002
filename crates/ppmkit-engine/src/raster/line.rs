use crate::coords::{Color, Point2D};

use super::{LineMode, Rasterizer};

impl Rasterizer<'_> {
    /// Straight line from `(x1, y1)` to `(x2, y2)`.
    ///
    /// The line is sampled at unit steps of arc length: with
    /// `dist = |(x2, y2) - (x1, y1)|`, parameter `t` runs over
    /// `0, 1, ..., floor(dist)` and each sample lands on
    /// `(x1 + floor(t/dist * dx), y1 + floor(t/dist * dy))`. The far endpoint
    /// is only hit when `dist` is a whole number.
    ///
    /// `thickness` is applied according to [`RasterConfig::line_mode`]. A
    /// zero-length line draws a single horizontal run of `thickness` pixels at
    /// the start point.
    ///
    /// [`RasterConfig::line_mode`]: super::RasterConfig::line_mode
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, thickness: u32) -> &mut Self {
        let dx = f64::from(x2) - f64::from(x1);
        let dy = f64::from(y2) - f64::from(y1);
        let dist = (dx * dx + dy * dy).sqrt();
        log::trace!("draw_line ({x1},{y1})-({x2},{y2}) thickness {thickness}");

        let start = Point2D::new(i64::from(x1), i64::from(y1));
        if dist == 0.0 {
            self.stamp(start, color, thickness);
            return self;
        }

        match self.config.line_mode {
            LineMode::Axis => {
                for offset in 0..i64::from(thickness) {
                    self.trace_line(start + Point2D::new(offset, 0), dx, dy, dist, color);
                }
            }
            LineMode::Legacy => {
                // The start x is counted twice and the offset range is inclusive.
                for offset in 0..=i64::from(thickness) {
                    let origin = Point2D::new(2 * start.x + offset, start.y);
                    self.trace_line(origin, dx, dy, dist, color);
                }
            }
            LineMode::Perpendicular => {
                let normal = (-dy / dist, dx / dist);
                let half = (f64::from(thickness) - 1.0) / 2.0;
                // Half-pixel steps across the width so diagonal lines stay solid.
                for step in 0..(2 * u64::from(thickness)).saturating_sub(1) {
                    let offset = step as f64 * 0.5 - half;
                    let shift = Point2D::new(
                        (normal.0 * offset).round() as i64,
                        (normal.1 * offset).round() as i64,
                    );
                    self.trace_line(start + shift, dx, dy, dist, color);
                }
            }
        }
        self
    }

    fn trace_line(&mut self, origin: Point2D<i64>, dx: f64, dy: f64, dist: f64, color: Color) {
        let steps = dist.floor() as u64;
        for step in 0..=steps {
            let s = step as f64 / dist;
            let x = origin.x + (s * dx).floor() as i64;
            let y = origin.y + (s * dy).floor() as i64;
            self.plot(x, y, color);
        }
    }
}
