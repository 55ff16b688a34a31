//! gp-core: shared foundation for the geometry primitives.
//!
//! Contains:
//! - error (the single division failure shared by every primitive)
//! - numeric (Real + divisor guard)
//! - units (uom SI length type + constructor)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{GeomError, GeomResult};
pub use numeric::*;
pub use units::*;
