use chrono::{DateTime, Utc};
use dh_db::models::{Exercise, NewExercise, Workout};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::date_format;

/// Default page size for `GET /workouts`
pub const DEFAULT_LIMIT: i64 = 100;

/// Exercise as submitted by the client, on create and on replace.
///
/// Unknown keys such as a client-side `id` are ignored: exercises are always
/// stored as new rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExerciseCreate {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
}

impl From<ExerciseCreate> for NewExercise {
    fn from(exercise: ExerciseCreate) -> Self {
        Self {
            name: exercise.name,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutCreate {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(deserialize_with = "date_format::deserialize")]
    pub date: DateTime<Utc>,
    /// Required, possibly empty
    #[validate(nested)]
    pub exercises: Vec<ExerciseCreate>,
}

/// Partial update. `None` leaves the stored value untouched; for `exercises`,
/// `Some(vec![])` clears the collection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WorkoutUpdate {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "date_format::deserialize_option")]
    pub date: Option<DateTime<Utc>>,
    #[validate(nested)]
    pub exercises: Option<Vec<ExerciseCreate>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Pagination {
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub skip: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub limit: i64,
}

const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Workout with its exercises, the shape every workout endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub exercises: Vec<Exercise>,
}

impl WorkoutResponse {
    pub fn new(workout: Workout, exercises: Vec<Exercise>) -> Self {
        Self {
            id: workout.id,
            user_id: workout.user_id,
            name: workout.name,
            date: workout.date,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
            exercises,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
