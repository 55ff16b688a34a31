//! gp-distance: unit-aware scalar length stored as whole nanometers.
//!
//! Every value pivots through a single `i64` nanometer count, so equality and
//! ordering are exact regardless of the unit a distance was built from.

pub mod distance;
pub mod unit;

pub use distance::Distance;
pub use unit::DistanceUnit;
