use axum::{Router, middleware, routing::get};
use dh_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    dh_api::tracing::init_tracing(&config.env)?;

    let metrics_handle = dh_api::metrics::init_metrics()?;

    // Schema initialization runs once, before the listener accepts connections
    let pool =
        dh_db::ensure_db_and_migrate(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Database schema is up to date");

    let state = ApiState::new(&config, pool);

    let cors = dh_api::middleware::cors::create_cors_layer(&config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let metrics_app = Router::new()
        .route("/metrics", get(dh_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = dh_api::router::router()
        .with_state(state)
        .merge(metrics_app)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(dh_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            dh_api::middleware::request_id::request_id_middleware,
        ));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
