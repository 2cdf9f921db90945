//! Exercise catalog: static injury, goal, and weekly schedule tables.
//!
//! DESIGN
//! ======
//! All three tables are compile-time constants keyed by plain strings. Lookups
//! are exact-match; an unknown key yields an empty slice or `None`, never an
//! error. Order within every list is the literal table order.

mod goals;
mod injuries;
mod schedules;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use time::Weekday;

pub use goals::GOAL_KEYS;
pub use injuries::INJURY_KEYS;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Badge color the client renders next to the difficulty label.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Beginner => "green",
            Self::Intermediate => "orange",
            Self::Advanced => "red",
        }
    }
}

/// A single catalog entry. Immutable; the catalog has no lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub duration: Option<&'static str>,
    pub sets: Option<&'static str>,
    pub reps: Option<&'static str>,
}

/// Serialized with the difficulty badge color alongside the difficulty, and
/// without the optional fields an entry does not carry.
impl Serialize for Exercise {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Exercise", 8)?;
        state.serialize_field("id", self.id)?;
        state.serialize_field("title", self.title)?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("difficulty", &self.difficulty)?;
        state.serialize_field("difficultyColor", self.difficulty.color())?;
        for (key, value) in [("duration", self.duration), ("sets", self.sets), ("reps", self.reps)] {
            match value {
                Some(value) => state.serialize_field(key, value)?,
                None => state.skip_field(key)?,
            }
        }
        state.end()
    }
}

impl Exercise {
    const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        difficulty: Difficulty,
    ) -> Self {
        Self { id, title, description, difficulty, duration: None, sets: None, reps: None }
    }

    const fn duration(self, duration: &'static str) -> Self {
        Self { duration: Some(duration), ..self }
    }

    const fn sets(self, sets: &'static str) -> Self {
        Self { sets: Some(sets), ..self }
    }

    const fn reps(self, reps: &'static str) -> Self {
        Self { reps: Some(reps), ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkoutDay {
    #[serde(serialize_with = "serialize_weekday")]
    pub day: Weekday,
    pub exercises: &'static [Exercise],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkoutSchedule {
    pub goal: &'static str,
    pub schedule: &'static [WorkoutDay],
}

pub(crate) fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(day)
}

// =============================================================================
// LOOKUPS
// =============================================================================

/// Rehabilitation exercises for an injury key. Unknown keys yield an empty slice.
#[must_use]
pub fn exercises_for_injury(injury: &str) -> &'static [Exercise] {
    lookup(injuries::INJURY_EXERCISES, injury)
}

/// Recommended exercises for a goal key. Unknown keys yield an empty slice.
#[must_use]
pub fn exercises_for_goal(goal: &str) -> &'static [Exercise] {
    lookup(goals::GOAL_EXERCISES, goal)
}

#[must_use]
pub fn schedule_for_goal(goal: &str) -> Option<&'static WorkoutSchedule> {
    schedules::WORKOUT_SCHEDULES.iter().find(|s| s.goal == goal)
}

/// The workout for `day` inside the schedule for `goal`, if both exist.
#[must_use]
pub fn workout_for_day(goal: &str, day: Weekday) -> Option<&'static WorkoutDay> {
    schedule_for_goal(goal)?
        .schedule
        .iter()
        .find(|d| d.day == day)
}

/// Human label for a goal key: `weight-loss` → `Weight Loss`.
#[must_use]
pub fn goal_label(goal: &str) -> String {
    goal.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup(table: &'static [(&'static str, &'static [Exercise])], key: &str) -> &'static [Exercise] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, exercises)| exercises)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
