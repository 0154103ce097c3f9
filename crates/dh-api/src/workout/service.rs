use std::collections::HashMap;

use dh_db::{
    models::{Exercise, NewExercise},
    repositories::{exercise, user, workout},
};
use sqlx::PgPool;

use super::model::{Pagination, WorkoutCreate, WorkoutResponse, WorkoutUpdate};
use crate::error::ApiError;

/// Returned for both missing and foreign workouts so the two cases cannot be
/// told apart.
pub const WORKOUT_NOT_FOUND: &str = "Workout not found";

/// A valid token naming a user this database has no row for
pub const UNKNOWN_USER: &str = "User not found";

/// Insert the workout and all of its exercises as one unit.
pub async fn create_workout(
    pool: &PgPool,
    user_id: i64,
    payload: WorkoutCreate,
) -> Result<WorkoutResponse, ApiError> {
    let mut tx = pool.begin().await?;

    if !user::exists(&mut *tx, user_id).await? {
        return Err(ApiError::Auth(UNKNOWN_USER.to_string()));
    }

    let workout = workout::insert(&mut *tx, user_id, &payload.name, payload.date).await?;

    let new_exercises: Vec<NewExercise> = payload.exercises.into_iter().map(Into::into).collect();
    exercise::insert_many(&mut *tx, workout.id, &new_exercises).await?;

    let exercises = exercise::list_for_workout(&mut *tx, workout.id).await?;

    tx.commit().await?;

    tracing::info!(
        workout_id = workout.id,
        user_id,
        exercises = exercises.len(),
        "Workout created"
    );

    Ok(WorkoutResponse::new(workout, exercises))
}

/// The caller's workouts ordered by id, windowed by `skip`/`limit`.
pub async fn list_workouts(
    pool: &PgPool,
    user_id: i64,
    page: &Pagination,
) -> Result<Vec<WorkoutResponse>, ApiError> {
    let mut tx = pool.begin().await?;

    let workouts = workout::list_for_user(&mut *tx, user_id, page.skip, page.limit).await?;
    if workouts.is_empty() {
        tx.commit().await?;
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = workouts.iter().map(|w| w.id).collect();
    let mut by_workout: HashMap<i64, Vec<Exercise>> = HashMap::with_capacity(ids.len());
    for exercise in exercise::list_for_workouts(&mut *tx, &ids).await? {
        by_workout
            .entry(exercise.workout_id)
            .or_default()
            .push(exercise);
    }

    tx.commit().await?;

    Ok(workouts
        .into_iter()
        .map(|w| {
            let exercises = by_workout.remove(&w.id).unwrap_or_default();
            WorkoutResponse::new(w, exercises)
        })
        .collect())
}

pub async fn get_workout(
    pool: &PgPool,
    user_id: i64,
    workout_id: i64,
) -> Result<WorkoutResponse, ApiError> {
    let mut tx = pool.begin().await?;

    let workout = workout::find_for_user(&mut *tx, workout_id, user_id)
        .await?
        .ok_or(ApiError::NotFound(WORKOUT_NOT_FOUND))?;
    let exercises = exercise::list_for_workout(&mut *tx, workout.id).await?;

    tx.commit().await?;

    Ok(WorkoutResponse::new(workout, exercises))
}

/// Apply a partial update. When `exercises` is present the whole collection
/// is replaced: every existing row is deleted and the new set inserted with
/// fresh ids. Any early return drops `tx`, which rolls it back.
pub async fn update_workout(
    pool: &PgPool,
    user_id: i64,
    workout_id: i64,
    payload: WorkoutUpdate,
) -> Result<WorkoutResponse, ApiError> {
    let mut tx = pool.begin().await?;

    let workout = workout::update_for_user(
        &mut *tx,
        workout_id,
        user_id,
        payload.name.as_deref(),
        payload.date,
        payload.exercises.is_some(),
    )
    .await?
    .ok_or(ApiError::NotFound(WORKOUT_NOT_FOUND))?;

    if let Some(replacement) = payload.exercises {
        let removed = exercise::delete_for_workout(&mut *tx, workout.id).await?;
        let new_exercises: Vec<NewExercise> = replacement.into_iter().map(Into::into).collect();
        let inserted = exercise::insert_many(&mut *tx, workout.id, &new_exercises).await?;

        tracing::debug!(workout_id, removed, inserted, "Replaced workout exercises");
    }

    let exercises = exercise::list_for_workout(&mut *tx, workout.id).await?;

    tx.commit().await?;

    tracing::info!(workout_id, user_id, "Workout updated");

    Ok(WorkoutResponse::new(workout, exercises))
}

/// Delete a workout; exercises are removed by the foreign key cascade.
pub async fn delete_workout(pool: &PgPool, user_id: i64, workout_id: i64) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    if !workout::delete_for_user(&mut *tx, workout_id, user_id).await? {
        return Err(ApiError::NotFound(WORKOUT_NOT_FOUND));
    }

    tx.commit().await?;

    tracing::info!(workout_id, user_id, "Workout deleted");

    Ok(())
}
