use crate::GeomError;

/// Scalar type for coordinates, unit values and scale factors.
pub type Real = f64;

/// Reject a divisor that is exactly zero (either sign).
///
/// Only exact zero is refused: NaN, infinities and subnormals pass through
/// and follow IEEE-754 division.
pub fn ensure_nonzero_divisor(scalar: Real, what: &'static str) -> Result<Real, GeomError> {
    if scalar == 0.0 {
        tracing::debug!(what, "rejected division by zero");
        Err(GeomError::DivisionByZero { what })
    } else {
        Ok(scalar)
    }
}
