use crate::coords::{Color, Point2D};
use crate::error::{RasterError, Result};

use super::{binomial_row_f64, BezierBasis, Rasterizer};

/// Quadratic Bézier at `t` by de Casteljau interpolation.
#[inline]
pub fn quad_bezier_point(p1: Point2D<f64>, p2: Point2D<f64>, p3: Point2D<f64>, t: f64) -> Point2D<f64> {
    let a = p1.lerp(p2, t);
    let b = p2.lerp(p3, t);
    a.lerp(b, t)
}

/// Bézier curve of degree `points.len() - 1` at `t`.
///
/// Returns the origin for an empty slice. Under [`BezierBasis::Legacy`] a
/// single control point gets the exponent `-1` and diverges as `t` nears 1.
pub fn bezier_point(points: &[Point2D<f64>], t: f64, basis: BezierBasis) -> Point2D<f64> {
    let Some(n) = points.len().checked_sub(1) else {
        return Point2D::zero();
    };
    let coefficients = coefficients(n);
    bernstein_sum(points, &coefficients, basis, t)
}

fn coefficients(n: usize) -> Vec<f64> {
    binomial_row_f64(n as u32)
}

fn bernstein_sum(points: &[Point2D<f64>], coefficients: &[f64], basis: BezierBasis, t: f64) -> Point2D<f64> {
    let n = points.len() as i32 - 1;
    let mut acc = Point2D::zero();
    for (i, (&p, &c)) in points.iter().zip(coefficients).enumerate() {
        let i = i as i32;
        let exponent = match basis {
            BezierBasis::Standard => n - i,
            BezierBasis::Legacy => n - 1,
        };
        acc += p * (c * (1.0 - t).powi(exponent) * t.powi(i));
    }
    acc
}

impl Rasterizer<'_> {
    /// Quadratic Bézier through control points `p1`, `p2`, `p3`.
    ///
    /// Sampled at `t = s / chord` for `s = 0, 1, ..., floor(chord)`, where
    /// `chord = |p3 - p1|`, plus a final sample at `t = 1`. Sample density
    /// follows the chord, not the arc length, so strongly bent curves can show
    /// gaps. Each sample is stamped as a horizontal run of `thickness` pixels.
    ///
    /// Fails with [`RasterError::DegenerateInput`] when `p1 == p3`.
    pub fn draw_quad_bezier(
        &mut self,
        p1: Point2D<i32>,
        p2: Point2D<i32>,
        p3: Point2D<i32>,
        color: Color,
        thickness: u32,
    ) -> Result<&mut Self> {
        let (a, b, c) = (Point2D::<f64>::from(p1), Point2D::<f64>::from(p2), Point2D::<f64>::from(p3));
        let chord = a.distance(c);
        if chord == 0.0 {
            log::warn!("draw_quad_bezier: zero chord at ({}, {})", p1.x, p1.y);
            return Err(RasterError::DegenerateInput("quadratic curve endpoints coincide"));
        }
        log::trace!("draw_quad_bezier {p1:?} {p2:?} {p3:?} chord {chord:.2}");

        let steps = chord.floor() as u64;
        let mut last = None;
        for step in 0..=steps {
            let p = quad_bezier_point(a, b, c, step as f64 / chord);
            self.stamp_sample(p, &mut last, color, thickness);
        }
        if (steps as f64) < chord {
            self.stamp_sample(c, &mut last, color, thickness);
        }
        Ok(self)
    }

    /// Bézier curve of any degree through `points`, evaluated in the basis
    /// chosen by [`RasterConfig::bezier_basis`].
    ///
    /// `t` runs from 0 to 1 in [`RasterConfig::bezier_steps`] equal steps
    /// (100 001 samples by default). Each sample is stamped as a horizontal run
    /// of `thickness` pixels.
    ///
    /// Fails with [`RasterError::InvalidArgument`] for an empty point list, a
    /// zero step count, or a single point under the legacy basis.
    ///
    /// [`RasterConfig::bezier_basis`]: super::RasterConfig::bezier_basis
    /// [`RasterConfig::bezier_steps`]: super::RasterConfig::bezier_steps
    pub fn draw_bezier(&mut self, points: &[Point2D<i32>], color: Color, thickness: u32) -> Result<&mut Self> {
        let (basis, steps) = (self.config.bezier_basis, self.config.bezier_steps);
        if points.is_empty() {
            return Err(RasterError::InvalidArgument("bezier curve needs at least one control point"));
        }
        if steps == 0 {
            return Err(RasterError::InvalidArgument("bezier step count must be positive"));
        }
        if basis == BezierBasis::Legacy && points.len() < 2 {
            return Err(RasterError::InvalidArgument("legacy bezier basis needs at least two control points"));
        }
        log::trace!("draw_bezier degree {} over {steps} steps ({basis:?})", points.len() - 1);

        let points: Vec<Point2D<f64>> = points.iter().copied().map(Point2D::from).collect();
        let coefficients = coefficients(points.len() - 1);

        let mut last = None;
        for step in 0..=steps {
            let t = f64::from(step) / f64::from(steps);
            let p = bernstein_sum(&points, &coefficients, basis, t);
            self.stamp_sample(p, &mut last, color, thickness);
        }
        Ok(self)
    }

    /// Stamps a curve sample unless it rounds to the same pixel as the previous one.
    fn stamp_sample(&mut self, p: Point2D<f64>, last: &mut Option<Point2D<i64>>, color: Color, thickness: u32) {
        if !p.is_finite() {
            return;
        }
        let pixel = p.floor_i64();
        if *last != Some(pixel) {
            self.stamp(pixel, color, thickness);
            *last = Some(pixel);
        }
    }
}
