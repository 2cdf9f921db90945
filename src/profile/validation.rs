//! Form validation: flat, independent field checks.
//!
//! Each check contributes at most one message per field. The only cross-field
//! rule is password confirmation equality. An empty map means the form is valid.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::{LoginForm, ProfileForm, SignupForm};

/// Field name (as the form names it) → user-facing message.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

#[must_use]
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &form.email);
    check_password(&mut errors, &form.password);
    errors
}

#[must_use]
pub fn validate_signup(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &form.email);
    check_password(&mut errors, &form.password);

    if form.confirm_password.is_empty() {
        errors.insert("confirmPassword", "Please confirm your password".into());
    } else if form.password != form.confirm_password {
        errors.insert("confirmPassword", "Passwords do not match".into());
    }

    errors.extend(validate_profile(&form.profile));
    errors
}

#[must_use]
pub fn validate_profile(form: &ProfileForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.username.is_empty() {
        errors.insert("username", "Username is required".into());
    }
    if parse_age(&form.age).is_none() {
        errors.insert("age", "Please enter a valid age".into());
    }
    if parse_number(&form.weight).is_none() {
        errors.insert("weight", "Please enter a valid weight".into());
    }
    if parse_number(&form.height).is_none() {
        errors.insert("height", "Please enter a valid height".into());
    }

    let selections = [
        ("gender", &form.gender, "Please select your gender"),
        ("fitnessLevel", &form.fitness_level, "Please select your fitness level"),
        ("workoutFrequency", &form.workout_frequency, "Please select workout frequency"),
        ("workoutDuration", &form.workout_duration, "Please select workout duration"),
        ("fitnessGoal", &form.fitness_goal, "Please select your fitness goal"),
    ];
    for (field, value, message) in selections {
        if value.is_empty() {
            errors.insert(field, message.into());
        }
    }

    if parse_number(&form.target_weight).is_none() {
        errors.insert("targetWeight", "Please enter a valid target weight".into());
    }

    errors
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !EMAIL_RE.is_match(email) {
        errors.insert("email", "Invalid email format".into());
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required".into());
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters".into());
    }
}

/// A required numeric field: non-blank and parseable as a finite number.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub(crate) fn parse_age(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
