use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use crate::models::Workout;

pub async fn insert<'e, E>(
    executor: E,
    user_id: i64,
    name: &str,
    date: DateTime<Utc>,
) -> Result<Workout, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO workouts (user_id, name, date)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, date, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(date)
    .fetch_one(executor)
    .await
}

/// Ownership is part of the predicate: a workout owned by someone else is
/// indistinguishable from one that does not exist.
pub async fn find_for_user<'e, E>(
    executor: E,
    workout_id: i64,
    user_id: i64,
) -> Result<Option<Workout>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, name, date, created_at, updated_at
            FROM workouts
            WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_for_user<'e, E>(
    executor: E,
    user_id: i64,
    skip: i64,
    limit: i64,
) -> Result<Vec<Workout>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, name, date, created_at, updated_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY id ASC
            OFFSET $2
            LIMIT $3
        "#,
    )
    .bind(user_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// Apply the provided fields. Absent fields keep their stored value.
///
/// `updated_at` is stamped only when a field actually changes or when
/// `exercises_replaced` is set, so repeating an update leaves the row as it
/// was. Returns `None` when no workout matches id and owner.
pub async fn update_for_user<'e, E>(
    executor: E,
    workout_id: i64,
    user_id: i64,
    name: Option<&str>,
    date: Option<DateTime<Utc>>,
    exercises_replaced: bool,
) -> Result<Option<Workout>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE workouts
            SET name = COALESCE($3, name),
                date = COALESCE($4, date),
                updated_at = CASE
                    WHEN $5
                        OR COALESCE($3, name) IS DISTINCT FROM name
                        OR COALESCE($4, date) IS DISTINCT FROM date
                    THEN NOW()
                    ELSE updated_at
                END
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, date, created_at, updated_at
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .bind(name)
    .bind(date)
    .bind(exercises_replaced)
    .fetch_optional(executor)
    .await
}

/// Delete a workout; its exercises go with it through `ON DELETE CASCADE`.
/// Returns whether a row matched id and owner.
pub async fn delete_for_user<'e, E>(
    executor: E,
    workout_id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM workouts
            WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
