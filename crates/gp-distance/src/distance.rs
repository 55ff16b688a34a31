//! Scalar length with a fixed nanometer representation.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use gp_core::{GeomResult, Length, Real, ensure_nonzero_divisor, m};

use crate::DistanceUnit;

/// A length stored as a whole number of nanometers.
///
/// Conversions into the nanometer count truncate toward zero, so anything
/// finer than one nanometer is dropped at construction time. Two distances are
/// equal iff their nanometer counts are equal, whatever units they came from.
///
/// Range is roughly ±9.2×10^6 km. Out-of-range inputs saturate at the `i64`
/// limits and NaN becomes zero; nothing here detects overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance {
    nanometers: i64,
}

/// Convert `value` in `unit` into whole nanometers, truncating toward zero.
#[inline]
fn to_nanometers(value: Real, unit: DistanceUnit) -> i64 {
    (value * unit.nanometers_per_unit() as Real) as i64
}

impl Distance {
    /// Zero nanometers, same as `Distance::default()`.
    pub const ZERO: Distance = Distance { nanometers: 0 };

    /// Create a distance of `value` expressed in `unit`.
    pub fn new(value: Real, unit: DistanceUnit) -> Self {
        Self {
            nanometers: to_nanometers(value, unit),
        }
    }

    /// Create a distance in the default unit (meters).
    pub fn from_meters(value: Real) -> Self {
        Self::new(value, DistanceUnit::Meter)
    }

    /// Wrap an existing nanometer count without conversion.
    pub const fn from_nanometers(nanometers: i64) -> Self {
        Self { nanometers }
    }

    /// The whole-nanometer count every other unit is derived from.
    pub const fn nanometers(self) -> i64 {
        self.nanometers
    }

    /// This distance expressed in `unit`.
    pub fn value(self, unit: DistanceUnit) -> Real {
        self.nanometers as Real / unit.nanometers_per_unit() as Real
    }

    /// Overwrite this distance with `value` expressed in `unit`.
    pub fn set_value(&mut self, value: Real, unit: DistanceUnit) {
        self.nanometers = to_nanometers(value, unit);
    }

    /// Divide in place by `scalar`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `scalar` is exactly zero; `self` is left
    /// untouched in that case.
    pub fn try_div_assign(&mut self, scalar: Real) -> GeomResult<()> {
        let scalar = ensure_nonzero_divisor(scalar, "distance /= scalar")?;
        self.nanometers = (self.nanometers as Real / scalar) as i64;
        Ok(())
    }

    /// This distance as a uom [`Length`].
    ///
    /// Goes through meters, which is uom's storage unit, so whole-meter
    /// distances come back from `Distance::from` unchanged.
    pub fn to_length(self) -> Length {
        m(self.value(DistanceUnit::Meter))
    }
}

impl From<Length> for Distance {
    fn from(length: Length) -> Self {
        use uom::si::length::meter;
        Self::new(length.get::<meter>(), DistanceUnit::Meter)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance::from_nanometers(self.nanometers.wrapping_add(rhs.nanometers))
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        Distance::from_nanometers(self.nanometers.wrapping_sub(rhs.nanometers))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Distance) {
        self.nanometers = self.nanometers.wrapping_add(rhs.nanometers);
    }
}

impl SubAssign for Distance {
    fn sub_assign(&mut self, rhs: Distance) {
        self.nanometers = self.nanometers.wrapping_sub(rhs.nanometers);
    }
}

impl Mul<Real> for Distance {
    type Output = Distance;

    fn mul(self, scale: Real) -> Distance {
        Distance::new(self.nanometers as Real * scale, DistanceUnit::Nanometer)
    }
}

impl Mul<Distance> for Real {
    type Output = Distance;

    fn mul(self, distance: Distance) -> Distance {
        distance * self
    }
}

impl MulAssign<Real> for Distance {
    fn mul_assign(&mut self, scale: Real) {
        *self = *self * scale;
    }
}

/// Division can fail, so the quotient comes back wrapped: `(d / s)?`.
impl Div<Real> for Distance {
    type Output = GeomResult<Distance>;

    fn div(self, scalar: Real) -> GeomResult<Distance> {
        let scalar = ensure_nonzero_divisor(scalar, "distance / scalar")?;
        Ok(Distance::new(
            self.nanometers as Real / scalar,
            DistanceUnit::Nanometer,
        ))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.value(DistanceUnit::Meter),
            DistanceUnit::Meter
        )
    }
}
