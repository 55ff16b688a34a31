use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use gp_core::{GeomResult, Real, ensure_nonzero_divisor};

/// A point in the plane.
///
/// Equality is exact per component, with no tolerance. NaN and infinities
/// are stored as given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    x: Real,
    y: Real,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> Real {
        self.x
    }

    pub const fn y(&self) -> Real {
        self.y
    }

    pub fn set_x(&mut self, x: Real) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Real) {
        self.y = y;
    }

    /// Euclidean distance between two points.
    pub fn distance_between(a: &Point2D, b: &Point2D) -> Real {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance from `self` to `other`.
    pub fn distance_to(&self, other: &Point2D) -> Real {
        Point2D::distance_between(self, other)
    }

    /// Add `other` in place, returning `self` for chaining.
    pub fn translate(&mut self, other: Point2D) -> &mut Self {
        *self += other;
        self
    }

    /// Subtract `other` in place, returning `self` for chaining.
    pub fn translate_back(&mut self, other: Point2D) -> &mut Self {
        *self -= other;
        self
    }
}

impl From<(Real, Real)> for Point2D {
    fn from((x, y): (Real, Real)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for (Real, Real) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point2D {
    fn sub_assign(&mut self, rhs: Point2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<Real> for Point2D {
    type Output = Point2D;

    fn mul(self, scalar: Real) -> Point2D {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<Real> for Point2D {
    type Output = GeomResult<Point2D>;

    fn div(self, scalar: Real) -> GeomResult<Point2D> {
        let scalar = ensure_nonzero_divisor(scalar, "point / scalar")?;
        Ok(Point2D::new(self.x / scalar, self.y / scalar))
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
