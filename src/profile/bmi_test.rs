use super::*;

#[test]
fn normal_weight_reading() {
    let r = reading(70.0, 175.0).unwrap();
    assert!((r.value - 22.9).abs() < 1e-9);
    assert_eq!(r.category, BmiCategory::NormalWeight);
    assert_eq!(r.color, "green");
}

#[test]
fn underweight_reading() {
    let r = reading(50.0, 175.0).unwrap();
    assert!((r.value - 16.3).abs() < 1e-9);
    assert_eq!(r.category, BmiCategory::Underweight);
}

#[test]
fn bucket_boundaries() {
    assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::classify(18.5), BmiCategory::NormalWeight);
    assert_eq!(BmiCategory::classify(24.9), BmiCategory::NormalWeight);
    assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::classify(29.9), BmiCategory::Overweight);
    assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
}

#[test]
fn classification_uses_rounded_value() {
    // 18.4999 rounds to 18.5 before classification.
    let height_cm = 100.0;
    let r = reading(18.4999, height_cm).unwrap();
    assert!((r.value - 18.5).abs() < 1e-9);
    assert_eq!(r.category, BmiCategory::NormalWeight);
}

#[test]
fn non_positive_inputs_have_no_bmi() {
    assert!(bmi(0.0, 175.0).is_none());
    assert!(bmi(70.0, 0.0).is_none());
    assert!(bmi(-5.0, 175.0).is_none());
    assert!(bmi(f64::NAN, 175.0).is_none());
    assert!(reading(70.0, f64::INFINITY).is_none());
}

#[test]
fn category_serializes_as_label() {
    let json = serde_json::to_value(BmiCategory::NormalWeight).unwrap();
    assert_eq!(json, "Normal weight");
    let json = serde_json::to_value(BmiCategory::Obese).unwrap();
    assert_eq!(json, "Obese");
}
