use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    routing::get,
};
use validator::Validate;

use super::{
    model::{MessageResponse, Pagination, WorkoutCreate, WorkoutResponse, WorkoutUpdate},
    service,
};
use crate::{ApiState, auth::AuthUser, error::ApiError};

/// Create the workout routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route(
            "/workouts/{workout_id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

async fn create_workout(
    AuthUser { user_id, .. }: AuthUser,
    State(state): State<ApiState>,
    payload: Result<Json<WorkoutCreate>, JsonRejection>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let workout = service::create_workout(&state.pool, user_id, payload).await?;

    Ok(Json(workout))
}

async fn list_workouts(
    AuthUser { user_id, .. }: AuthUser,
    State(state): State<ApiState>,
    page: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<WorkoutResponse>>, ApiError> {
    let Query(page) = page?;
    page.validate()?;

    let workouts = service::list_workouts(&state.pool, user_id, &page).await?;

    Ok(Json(workouts))
}

async fn get_workout(
    AuthUser { user_id, .. }: AuthUser,
    State(state): State<ApiState>,
    workout_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let Path(workout_id) = workout_id?;

    let workout = service::get_workout(&state.pool, user_id, workout_id).await?;

    Ok(Json(workout))
}

async fn update_workout(
    AuthUser { user_id, .. }: AuthUser,
    State(state): State<ApiState>,
    workout_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<WorkoutUpdate>, JsonRejection>,
) -> Result<Json<WorkoutResponse>, ApiError> {
    let Path(workout_id) = workout_id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let workout = service::update_workout(&state.pool, user_id, workout_id, payload).await?;

    Ok(Json(workout))
}

async fn delete_workout(
    AuthUser { user_id, .. }: AuthUser,
    State(state): State<ApiState>,
    workout_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(workout_id) = workout_id?;

    service::delete_workout(&state.pool, user_id, workout_id).await?;

    Ok(Json(MessageResponse {
        message: "Workout deleted successfully".to_string(),
    }))
}
