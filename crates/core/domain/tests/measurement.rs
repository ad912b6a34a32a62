use domain::{ACTIVE_POWER_P, MeasurementPoint, MeasurementType, MeasurementValue};

#[test]
fn measurement_point_builds() {
    let point = MeasurementPoint::new(MeasurementType::new(ACTIVE_POWER_P, "W"), 245_i64, 1000);

    assert_eq!(point.identifier(), "ACTIVE_POWER_P");
    assert_eq!(point.unit(), "W");
    assert_eq!(point.value, MeasurementValue::I64(245));
    assert_eq!(point.ts_ms, 1000);
}

#[test]
fn measurement_type_match_is_case_sensitive() {
    let exact = MeasurementType::new("ACTIVE_POWER_P", "W");
    let lower = MeasurementType::new("active_power_p", "W");

    assert!(exact.is(ACTIVE_POWER_P));
    assert!(!lower.is(ACTIVE_POWER_P));
}

#[test]
fn measurement_value_displays_without_precision_loss() {
    assert_eq!(MeasurementValue::I64(9_007_199_254_740_993).to_string(), "9007199254740993");
    assert_eq!(MeasurementValue::F64(12.7).to_string(), "12.7");
}
