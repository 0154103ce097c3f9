use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::{
    state::ApiState,
    workout::{self, model::MessageResponse},
};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(workout::routes())
        .fallback(handler_404)
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "DiarioDeHierro API".to_string(),
    })
}

/// Liveness: the process is up and serving
async fn health() -> StatusCode {
    StatusCode::OK
}

/// Readiness: the database answers a trivial query
async fn readiness(State(state): State<ApiState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Readiness check failed: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
