//! Recommendation service: resolves catalog lookups for a user.
//!
//! DESIGN
//! ======
//! Every result carries an optional user-facing message for the empty case,
//! so clients render lists or the message without re-deriving the rules.
//! A profile without a goal is treated the same as no profile.

use serde::Serialize;
use time::Weekday;

use crate::catalog::{self, Exercise, WorkoutDay, serialize_weekday};
use crate::profile::UserProfile;

pub const GOAL_REQUIRED: &str =
    "Please complete your profile with a fitness goal to see personalized exercise recommendations.";
pub const NO_GOAL_EXERCISES: &str = "No exercises found for your fitness goal. Please check back later.";
pub const NO_WORKOUT_TODAY: &str =
    "No workout scheduled for today. Take a rest or choose from the weekly schedule below.";
pub const NO_SCHEDULE: &str = "No workout schedule available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub key: String,
    pub label: String,
}

impl Goal {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string(), label: catalog::goal_label(key) }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryRecommendations {
    pub injury: String,
    pub exercises: &'static [Exercise],
    pub goal: Option<Goal>,
    pub goal_exercises: &'static [Exercise],
    /// Shown on the injury tab when the injury has no exercises.
    pub message: Option<String>,
    /// Shown on the goal tab when there is no goal or it has no exercises.
    pub goal_message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalRecommendations {
    pub goal: Option<Goal>,
    pub exercises: &'static [Exercise],
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TodayWorkout {
    pub goal: Option<Goal>,
    #[serde(serialize_with = "serialize_weekday")]
    pub day: Weekday,
    pub workout: Option<&'static WorkoutDay>,
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklySchedule {
    pub goal: Option<Goal>,
    pub schedule: Option<&'static [WorkoutDay]>,
    pub message: Option<&'static str>,
}

fn goal_of(profile: Option<&UserProfile>) -> Option<&str> {
    profile.and_then(UserProfile::goal)
}

/// Injury exercises alongside the goal exercises for the user's goal. Each
/// list carries its own empty-state message.
#[must_use]
pub fn injury_recommendations(injury: &str, profile: Option<&UserProfile>) -> InjuryRecommendations {
    let exercises = catalog::exercises_for_injury(injury);
    let message = exercises.is_empty().then(|| format!("No exercises found for {injury}"));
    let GoalRecommendations { goal, exercises: goal_exercises, message: goal_message } = goal_recommendations(profile);

    InjuryRecommendations { injury: injury.to_string(), exercises, goal, goal_exercises, message, goal_message }
}

#[must_use]
pub fn goal_recommendations(profile: Option<&UserProfile>) -> GoalRecommendations {
    let Some(goal) = goal_of(profile) else {
        return GoalRecommendations { goal: None, exercises: &[], message: Some(GOAL_REQUIRED) };
    };
    let exercises = catalog::exercises_for_goal(goal);
    let message = exercises.is_empty().then_some(NO_GOAL_EXERCISES);
    GoalRecommendations { goal: Some(Goal::new(goal)), exercises, message }
}

/// The workout for `day` in the user's schedule. No fallback to other days.
#[must_use]
pub fn today_workout(profile: Option<&UserProfile>, day: Weekday) -> TodayWorkout {
    let Some(goal) = goal_of(profile) else {
        return TodayWorkout { goal: None, day, workout: None, message: Some(GOAL_REQUIRED) };
    };
    let workout = catalog::workout_for_day(goal, day);
    let message = workout.is_none().then_some(NO_WORKOUT_TODAY);
    TodayWorkout { goal: Some(Goal::new(goal)), day, workout, message }
}

#[must_use]
pub fn weekly_schedule(profile: Option<&UserProfile>) -> WeeklySchedule {
    let Some(goal) = goal_of(profile) else {
        return WeeklySchedule { goal: None, schedule: None, message: Some(GOAL_REQUIRED) };
    };
    let schedule = catalog::schedule_for_goal(goal).map(|s| s.schedule);
    let message = schedule.is_none().then_some(NO_SCHEDULE);
    WeeklySchedule { goal: Some(Goal::new(goal)), schedule, message }
}

#[cfg(test)]
#[path = "recommend_test.rs"]
mod tests;
