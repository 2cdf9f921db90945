use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn pounds_to_kilograms() {
    assert!(close(weight_to_kg(100.0, WeightUnit::Lbs), 45.36));
}

#[test]
fn inches_to_centimeters() {
    assert!(close(height_to_cm(70.0, HeightUnit::Inches), 177.8));
}

#[test]
fn metric_input_passes_through() {
    assert!(close(weight_to_kg(72.5, WeightUnit::Kg), 72.5));
    assert!(close(height_to_cm(180.0, HeightUnit::Cm), 180.0));
}

#[test]
fn pounds_round_trip_recovers_input() {
    let kg = weight_to_kg(100.0, WeightUnit::Lbs);
    assert!(close(weight_from_kg(kg, WeightUnit::Lbs), 100.0));
}

#[test]
fn inches_round_trip_recovers_input() {
    let cm = height_to_cm(70.0, HeightUnit::Inches);
    assert!(close(height_from_cm(cm, HeightUnit::Inches), 70.0));
}

#[test]
fn round_to_two_decimals() {
    assert!(close(round_to(1.234_56, 2), 1.23));
    assert!(close(round_to(1.235_01, 2), 1.24));
    assert!(close(round_to(22.857, 1), 22.9));
}

#[test]
fn round_to_keeps_values_too_large_to_scale() {
    assert_eq!(round_to(1e307, 2), 1e307);
    assert_eq!(round_to(f64::MAX, 1), f64::MAX);
    assert!(round_to(1e307, 2).is_finite());
}

#[test]
fn units_default_to_metric() {
    assert_eq!(HeightUnit::default(), HeightUnit::Cm);
    assert_eq!(WeightUnit::default(), WeightUnit::Kg);
}

#[test]
fn units_use_form_spellings() {
    assert_eq!(serde_json::to_string(&HeightUnit::Inches).unwrap(), "\"inches\"");
    assert_eq!(serde_json::to_string(&WeightUnit::Lbs).unwrap(), "\"lbs\"");
    let unit: WeightUnit = serde_json::from_str("\"kg\"").unwrap();
    assert_eq!(unit, WeightUnit::Kg);
}
