use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dated training session owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
    pub id: i64,
    /// Owner; every lookup is scoped by this column
    pub user_id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// `None` until the workout is first modified
    pub updated_at: Option<DateTime<Utc>>,
}

/// One movement entry belonging to exactly one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

/// Insert struct for exercises, ids and timestamps are assigned by the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
}
