//! Height and weight unit conversion.
//!
//! Profiles are stored in metric. Imperial input is converted at submit time
//! and converted back only for display, both rounded to two decimals.

use serde::{Deserialize, Serialize};

pub const CM_PER_INCH: f64 = 2.54;
pub const KG_PER_LB: f64 = 0.453_592;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

/// Round half away from zero to `decimals` places. Values too large to
/// scale have no fractional digits left and come back unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[must_use]
pub fn height_to_cm(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => round_to(value, 2),
        HeightUnit::Inches => round_to(value * CM_PER_INCH, 2),
    }
}

#[must_use]
pub fn height_from_cm(cm: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => round_to(cm, 2),
        HeightUnit::Inches => round_to(cm / CM_PER_INCH, 2),
    }
}

#[must_use]
pub fn weight_to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => round_to(value, 2),
        WeightUnit::Lbs => round_to(value * KG_PER_LB, 2),
    }
}

#[must_use]
pub fn weight_from_kg(kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => round_to(kg, 2),
        WeightUnit::Lbs => round_to(kg / KG_PER_LB, 2),
    }
}

#[cfg(test)]
#[path = "units_test.rs"]
mod tests;
