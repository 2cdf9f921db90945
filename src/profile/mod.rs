//! Profile: submitted forms, the stored metric profile, and its display view.
//!
//! DESIGN
//! ======
//! Forms arrive as text fields plus unit selectors, exactly as an HTML form
//! posts them. A form that passes validation is normalized once into a
//! `UserProfile` holding metric measurements; the chosen units are kept only
//! as display preferences. `ProfileView` converts back for display and adds
//! the BMI reading.

pub mod bmi;
pub mod units;
pub mod validation;

use serde::{Deserialize, Serialize};

use self::bmi::BmiReading;
use self::units::{HeightUnit, WeightUnit};
use self::validation::{FieldErrors, parse_age, parse_number};

// =============================================================================
// FORMS
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Profile fields as entered. Numeric fields stay text until validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub username: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub gender: String,
    pub fitness_level: String,
    pub workout_frequency: String,
    pub workout_duration: String,
    pub fitness_goal: String,
    pub target_weight: String,
    pub height_unit: HeightUnit,
    pub weight_unit: WeightUnit,
    pub target_weight_unit: WeightUnit,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(flatten)]
    pub profile: ProfileForm,
}

impl ProfileForm {
    /// Validate and convert into a metric profile.
    ///
    /// # Errors
    ///
    /// Returns the field → message map when any check fails.
    pub fn normalize(&self) -> Result<UserProfile, FieldErrors> {
        let errors = validation::validate_profile(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        let parsed = (
            parse_age(&self.age),
            parse_number(&self.weight),
            parse_number(&self.height),
            parse_number(&self.target_weight),
        );
        let (Some(age), Some(weight), Some(height), Some(target_weight)) = parsed else {
            return Err(errors);
        };

        let profile = UserProfile {
            username: self.username.clone(),
            age,
            weight_kg: units::weight_to_kg(weight, self.weight_unit),
            height_cm: units::height_to_cm(height, self.height_unit),
            gender: self.gender.clone(),
            fitness_level: self.fitness_level.clone(),
            workout_frequency: self.workout_frequency.clone(),
            workout_duration: self.workout_duration.clone(),
            fitness_goal: self.fitness_goal.clone(),
            target_weight_kg: units::weight_to_kg(target_weight, self.target_weight_unit),
            height_unit: self.height_unit,
            weight_unit: self.weight_unit,
            target_weight_unit: self.target_weight_unit,
        };

        // Conversion can overflow a finite input.
        let mut errors = FieldErrors::new();
        if !profile.weight_kg.is_finite() {
            errors.insert("weight", "Please enter a valid weight".into());
        }
        if !profile.height_cm.is_finite() {
            errors.insert("height", "Please enter a valid height".into());
        }
        if !profile.target_weight_kg.is_finite() {
            errors.insert("targetWeight", "Please enter a valid target weight".into());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(profile)
    }
}

/// Prefill an edit form from a stored profile, in the user's preferred units.
impl From<&UserProfile> for ProfileForm {
    fn from(p: &UserProfile) -> Self {
        Self {
            username: p.username.clone(),
            age: p.age.to_string(),
            weight: units::weight_from_kg(p.weight_kg, p.weight_unit).to_string(),
            height: units::height_from_cm(p.height_cm, p.height_unit).to_string(),
            gender: p.gender.clone(),
            fitness_level: p.fitness_level.clone(),
            workout_frequency: p.workout_frequency.clone(),
            workout_duration: p.workout_duration.clone(),
            fitness_goal: p.fitness_goal.clone(),
            target_weight: units::weight_from_kg(p.target_weight_kg, p.target_weight_unit).to_string(),
            height_unit: p.height_unit,
            weight_unit: p.weight_unit,
            target_weight_unit: p.target_weight_unit,
        }
    }
}

// =============================================================================
// STORED PROFILE
// =============================================================================

/// Self-reported profile, normalized to kilograms and centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: String,
    pub fitness_level: String,
    pub workout_frequency: String,
    pub workout_duration: String,
    pub fitness_goal: String,
    pub target_weight_kg: f64,
    pub height_unit: HeightUnit,
    pub weight_unit: WeightUnit,
    pub target_weight_unit: WeightUnit,
}

impl UserProfile {
    #[must_use]
    pub fn bmi(&self) -> Option<BmiReading> {
        bmi::reading(self.weight_kg, self.height_cm)
    }

    /// The goal key, or `None` when the profile has no goal set.
    #[must_use]
    pub fn goal(&self) -> Option<&str> {
        Some(self.fitness_goal.as_str()).filter(|g| !g.is_empty())
    }
}

// =============================================================================
// DISPLAY VIEW
// =============================================================================

/// What the profile page shows: the stored profile, the same values in the
/// preferred units, and the BMI reading.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub profile: UserProfile,
    pub display: ProfileForm,
    pub bmi: Option<BmiReading>,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        Self { profile: profile.clone(), display: ProfileForm::from(profile), bmi: profile.bmi() }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
