//! Integration tests for gp-distance.

use gp_core::GeomError;
use gp_distance::{Distance, DistanceUnit};

const INPUT: f64 = 2038.0;

#[test]
fn same_length_from_three_units() {
    let by_kilo = Distance::new(INPUT, DistanceUnit::Kilometer);
    let by_meter = Distance::new(INPUT * 1.0e3, DistanceUnit::Meter);
    let by_nano = Distance::new(INPUT * 1.0e12, DistanceUnit::Nanometer);

    assert_eq!(by_kilo.value(DistanceUnit::Kilometer), INPUT);
    assert_eq!(by_kilo, by_meter);
    assert_eq!(by_kilo, by_nano);
    assert_eq!(by_meter, by_nano);
}

#[test]
fn sums_across_units() {
    let by_kilo = Distance::new(INPUT, DistanceUnit::Kilometer);
    let by_meter = Distance::new(INPUT * 1.0e3, DistanceUnit::Meter);
    let by_nano = Distance::new(INPUT * 1.0e12, DistanceUnit::Nanometer);

    for sum in [by_kilo + by_meter, by_kilo + by_nano, by_meter + by_nano] {
        assert_eq!(sum.value(DistanceUnit::Kilometer), INPUT * 2.0);
    }
}

#[test]
fn every_unit_reads_back_consistently() {
    let d = Distance::new(1.0, DistanceUnit::Kilometer);
    assert_eq!(d.value(DistanceUnit::Meter), 1.0e3);
    assert_eq!(d.value(DistanceUnit::Centimeter), 1.0e5);
    assert_eq!(d.value(DistanceUnit::Millimeter), 1.0e6);
    assert_eq!(d.value(DistanceUnit::Micrometer), 1.0e9);
    assert_eq!(d.value(DistanceUnit::Nanometer), 1.0e12);
}

#[test]
fn finer_input_is_lossy_in_coarser_unit() {
    // 1234.5678 nm keeps only 1234 nm
    let d = Distance::new(1.2345678, DistanceUnit::Micrometer);
    assert_eq!(d.nanometers(), 1_234);
    assert_eq!(d.value(DistanceUnit::Micrometer), 1.234);
}

#[test]
fn division_by_zero_propagates() {
    fn halve_then_split(d: Distance, parts: f64) -> Result<Distance, GeomError> {
        let half = (d / 2.0)?;
        half / parts
    }

    let d = Distance::new(1.0, DistanceUnit::Kilometer);
    assert_eq!(
        halve_then_split(d, 5.0).unwrap(),
        Distance::new(100.0, DistanceUnit::Meter)
    );
    assert!(matches!(
        halve_then_split(d, 0.0),
        Err(GeomError::DivisionByZero { .. })
    ));

    let mut m = d;
    assert!(m.try_div_assign(0.0).is_err());
    assert_eq!(m, d);
}
