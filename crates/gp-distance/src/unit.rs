//! Length units understood by [`Distance`](crate::Distance).

use core::fmt;

/// Nanometers in one of each unit, indexed by `DistanceUnit as usize`.
const NANOMETERS_PER_UNIT: [i64; 6] = [
    1_000_000_000_000, // km
    1_000_000_000,     // m
    10_000_000,        // cm
    1_000_000,         // mm
    1_000,             // µm
    1,                 // nm
];

const SYMBOLS: [&str; 6] = ["km", "m", "cm", "mm", "µm", "nm"];

/// Closed set of supported length units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Kilometer = 0,
    #[default]
    Meter = 1,
    Centimeter = 2,
    Millimeter = 3,
    Micrometer = 4,
    Nanometer = 5,
}

impl DistanceUnit {
    /// All units, coarsest first.
    pub const ALL: [DistanceUnit; 6] = [
        DistanceUnit::Kilometer,
        DistanceUnit::Meter,
        DistanceUnit::Centimeter,
        DistanceUnit::Millimeter,
        DistanceUnit::Micrometer,
        DistanceUnit::Nanometer,
    ];

    /// Number of nanometers in one of this unit.
    #[inline]
    pub const fn nanometers_per_unit(self) -> i64 {
        NANOMETERS_PER_UNIT[self as usize]
    }

    /// Short SI symbol, e.g. `km` or `µm`.
    pub const fn symbol(self) -> &'static str {
        SYMBOLS[self as usize]
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
