//! Catalog, recommendation, and workout routes.

use axum::extract::Path;
use axum::response::Json;
use time::OffsetDateTime;

use crate::catalog::{GOAL_KEYS, INJURY_KEYS};
use crate::routes::auth::AuthUser;
use crate::services::recommend::{
    self, Goal, GoalRecommendations, InjuryRecommendations, TodayWorkout, WeeklySchedule,
};

/// `GET /api/catalog/injuries`: selectable injury keys in form order.
pub async fn injuries() -> Json<&'static [&'static str]> {
    Json(INJURY_KEYS)
}

/// `GET /api/catalog/goals`: goal keys with display labels.
pub async fn goals() -> Json<Vec<Goal>> {
    Json(GOAL_KEYS.iter().copied().map(Goal::new).collect())
}

/// `GET /api/exercises/injury/{injury}`
pub async fn by_injury(auth: AuthUser, Path(injury): Path<String>) -> Json<InjuryRecommendations> {
    Json(recommend::injury_recommendations(&injury, auth.user.profile.as_ref()))
}

/// `GET /api/exercises/goal`
pub async fn by_goal(auth: AuthUser) -> Json<GoalRecommendations> {
    Json(recommend::goal_recommendations(auth.user.profile.as_ref()))
}

/// `GET /api/workouts/today`: resolved against the server's UTC weekday.
pub async fn today(auth: AuthUser) -> Json<TodayWorkout> {
    let day = OffsetDateTime::now_utc().weekday();
    Json(recommend::today_workout(auth.user.profile.as_ref(), day))
}

/// `GET /api/workouts/schedule`
pub async fn schedule(auth: AuthUser) -> Json<WeeklySchedule> {
    Json(recommend::weekly_schedule(auth.user.profile.as_ref()))
}

#[cfg(test)]
#[path = "exercises_test.rs"]
mod tests;
