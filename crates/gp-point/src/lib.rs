//! gp-point: plain 2D point value type.

pub mod point;

pub use point::Point2D;
