use core::ops::{Add, AddAssign, Mul, Sub};

/// 2D point over an integer or floating coordinate type.
///
/// Integer points are what callers usually hand to the rasterizer; curve
/// evaluation converts them to `Point2D<f64>` and accumulates there.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point2D<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2D<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point2D<f64> {
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rounds both coordinates towards negative infinity.
    ///
    /// Out-of-range values saturate, which keeps them out of any canvas.
    #[inline]
    pub fn floor_i64(self) -> Point2D<i64> {
        Point2D::new(self.x.floor() as i64, self.y.floor() as i64)
    }
}

impl From<Point2D<i32>> for Point2D<f64> {
    #[inline]
    fn from(p: Point2D<i32>) -> Self {
        Point2D::new(f64::from(p.x), f64::from(p.y))
    }
}

impl<T> From<(T, T)> for Point2D<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Point2D::new(x, y)
    }
}

impl<T: Add<Output = T>> Add for Point2D<T> {
    type Output = Point2D<T>;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Point2D<T> {
    type Output = Point2D<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point2D<T> {
    type Output = Point2D<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: AddAssign> AddAssign for Point2D<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic() {
        let p = Point2D::new(2, 3) + Point2D::new(4, -1);
        assert_eq!(p * 2, Point2D::new(12, 4));
    }

    #[test]
    fn accumulate() {
        let mut acc = Point2D::zero();
        acc += Point2D::new(1.5, 2.0);
        acc += Point2D::new(0.5, -1.0);
        assert_eq!(acc, Point2D::new(2.0, 1.0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point2D::new(0.0, 10.0);
        let b = Point2D::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point2D::new(5.0, 5.0));
    }

    #[test]
    fn floor_rounds_down_for_negatives() {
        assert_eq!(Point2D::new(-0.5, 1.9).floor_i64(), Point2D::new(-1, 1));
    }

    #[test]
    fn distance_is_euclidean() {
        let d = Point2D::new(0.0, 0.0).distance(Point2D::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn builds_from_tuples() {
        assert_eq!(Point2D::from((4, -2)), Point2D::new(4, -2));
        let pts: Vec<Point2D<f64>> = [(0.5, 1.0), (2.0, 3.5)].into_iter().map(Into::into).collect();
        assert_eq!(pts, [Point2D::new(0.5, 1.0), Point2D::new(2.0, 3.5)]);
    }

    #[test]
    fn widens_integer_points() {
        let p: Point2D<f64> = Point2D::new(-3, 7).into();
        assert_eq!(p, Point2D::new(-3.0, 7.0));
    }
}
