use sqlx::{Executor, Postgres};

use crate::models::{Exercise, NewExercise};

/// Insert all exercises for a workout in a single statement.
pub async fn insert_many<'e, E>(
    executor: E,
    workout_id: i64,
    exercises: &[NewExercise],
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    if exercises.is_empty() {
        return Ok(0);
    }

    let names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
    let sets: Vec<i32> = exercises.iter().map(|e| e.sets).collect();
    let reps: Vec<i32> = exercises.iter().map(|e| e.reps).collect();
    let weights: Vec<f64> = exercises.iter().map(|e| e.weight).collect();

    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO exercises (workout_id, name, sets, reps, weight)
            SELECT $1, e.name, e.sets, e.reps, e.weight
            FROM UNNEST($2::text[], $3::int4[], $4::int4[], $5::float8[])
                AS e(name, sets, reps, weight)
        "#,
    )
    .bind(workout_id)
    .bind(names)
    .bind(sets)
    .bind(reps)
    .bind(weights)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

pub async fn list_for_workout<'e, E>(
    executor: E,
    workout_id: i64,
) -> Result<Vec<Exercise>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, workout_id, name, sets, reps, weight, created_at
            FROM exercises
            WHERE workout_id = $1
            ORDER BY id ASC
        "#,
    )
    .bind(workout_id)
    .fetch_all(executor)
    .await
}

/// Batch variant used when listing, avoids one query per workout.
pub async fn list_for_workouts<'e, E>(
    executor: E,
    workout_ids: &[i64],
) -> Result<Vec<Exercise>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, workout_id, name, sets, reps, weight, created_at
            FROM exercises
            WHERE workout_id = ANY($1)
            ORDER BY workout_id ASC, id ASC
        "#,
    )
    .bind(workout_ids)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, exercise_id: i64) -> Result<Option<Exercise>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, workout_id, name, sets, reps, weight, created_at
            FROM exercises
            WHERE id = $1
        "#,
    )
    .bind(exercise_id)
    .fetch_optional(executor)
    .await
}

pub async fn delete_for_workout<'e, E>(executor: E, workout_id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM exercises
            WHERE workout_id = $1
        "#,
    )
    .bind(workout_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
