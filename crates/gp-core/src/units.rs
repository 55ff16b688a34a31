// gp-core/src/units.rs

use uom::si::f64::Length as UomLength;

// Public canonical unit type (SI, f64). uom stores it in meters.
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::meter;

    #[test]
    fn meters_are_stored_exactly() {
        for v in [0.0, 1.0, -3.0, 2038.0e3, 0.125] {
            assert_eq!(m(v).get::<meter>(), v);
        }
    }
}
