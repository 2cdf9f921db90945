//! Body-mass index and its four-bucket classification.

use serde::Serialize;

use super::units::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Underweight => "blue",
            Self::NormalWeight => "green",
            Self::Overweight => "orange",
            Self::Obese => "red",
        }
    }
}

/// A computed BMI with its category, as shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
    pub color: &'static str,
}

/// `weight / height_m²`, rounded to one decimal.
///
/// Returns `None` when either measurement is non-positive or not finite.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round_to(weight_kg / (height_m * height_m), 1))
}

/// BMI plus classification. The category is taken from the rounded value.
#[must_use]
pub fn reading(weight_kg: f64, height_cm: f64) -> Option<BmiReading> {
    let value = bmi(weight_kg, height_cm)?;
    let category = BmiCategory::classify(value);
    Some(BmiReading { value, category, color: category.color() })
}

#[cfg(test)]
#[path = "bmi_test.rs"]
mod tests;
