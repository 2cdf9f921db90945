use axum::http::StatusCode;

use crate::catalog::{self, GOAL_KEYS, INJURY_KEYS};
use crate::routes::app;
use crate::routes::test_client::get;
use crate::state::test_helpers;

#[tokio::test]
async fn catalog_keys_are_public() {
    let app = app(test_helpers::test_app_state());

    let injuries = get(&app, "/api/catalog/injuries", None).await;
    assert_eq!(injuries.status, StatusCode::OK);
    assert_eq!(injuries.json.as_array().unwrap().len(), INJURY_KEYS.len());
    assert_eq!(injuries.json[0], "Shoulder Pain");

    let goals = get(&app, "/api/catalog/goals", None).await;
    assert_eq!(goals.json.as_array().unwrap().len(), GOAL_KEYS.len());
    assert_eq!(goals.json[0]["key"], "weight-loss");
    assert_eq!(goals.json[0]["label"], "Weight Loss");
}

#[tokio::test]
async fn injury_lookup_decodes_path() {
    let state = test_helpers::test_app_state();
    let app = app(state.clone());
    let (_user, token) = test_helpers::seed_user(&state, Some(test_helpers::dummy_profile("weight-gain"))).await;

    let resp = get(&app, "/api/exercises/injury/Knee%20Pain", Some(&token)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["injury"], "Knee Pain");
    let expected = catalog::exercises_for_injury("Knee Pain");
    let exercises = resp.json["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), expected.len());
    assert_eq!(exercises[0]["id"], expected[0].id);
    assert_eq!(exercises[0]["difficultyColor"], expected[0].difficulty.color());
    assert_eq!(resp.json["goal"]["key"], "weight-gain");
    assert_eq!(resp.json["goalExercises"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unknown_injury_message() {
    let state = test_helpers::test_app_state();
    let app = app(state.clone());
    let (_user, token) = test_helpers::seed_user(&state, None).await;

    let resp = get(&app, "/api/exercises/injury/Broken%20Heart", Some(&token)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["message"], "No exercises found for Broken Heart");
    assert_eq!(
        resp.json["goalMessage"],
        "Please complete your profile with a fitness goal to see personalized exercise recommendations."
    );
}

#[tokio::test]
async fn goal_exercises_need_profile_goal() {
    let state = test_helpers::test_app_state();
    let app = app(state.clone());
    let (_user, token) = test_helpers::seed_user(&state, None).await;

    let resp = get(&app, "/api/exercises/goal", Some(&token)).await;
    assert_eq!(
        resp.json["message"],
        "Please complete your profile with a fitness goal to see personalized exercise recommendations."
    );
}

#[tokio::test]
async fn today_matches_catalog_for_current_day() {
    let state = test_helpers::test_app_state();
    let app = app(state.clone());
    let (_user, token) = test_helpers::seed_user(&state, Some(test_helpers::dummy_profile("weight-loss"))).await;

    let resp = get(&app, "/api/workouts/today", Some(&token)).await;
    assert_eq!(resp.status, StatusCode::OK);
    let day = resp.json["day"].as_str().unwrap().to_string();
    assert_eq!(resp.json["workout"]["day"], day.as_str());
    assert!(!resp.json["workout"]["exercises"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn schedule_lists_week() {
    let state = test_helpers::test_app_state();
    let app = app(state.clone());
    let (_user, token) = test_helpers::seed_user(&state, Some(test_helpers::dummy_profile("general-fitness"))).await;

    let resp = get(&app, "/api/workouts/schedule", Some(&token)).await;
    let days = resp.json["schedule"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Monday");
    assert_eq!(days[6]["day"], "Sunday");
}
