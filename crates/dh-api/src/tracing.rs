//! Log output for the API process.
//!
//! Development gets pretty, file-annotated output at DEBUG; production gets
//! flattened JSON lines at INFO for the log shipper. `RUST_LOG` overrides the
//! default directives in both modes.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Default filter directives when `RUST_LOG` is unset
pub fn default_directives(env: &Environment) -> &'static str {
    if env.is_development() {
        "debug,dh_api=debug,dh_db=debug,tower_http=debug,sqlx=warn"
    } else {
        "info,dh_api=info,dh_db=info,tower_http=info,sqlx=warn"
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(env: &Environment) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = if env.is_development() {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .pretty()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .flatten_event(true)
            .with_target(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(environment = ?env, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for env in [Environment::Development, Environment::Production] {
            let directives = default_directives(&env);
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
        assert!(default_directives(&Environment::Production).starts_with("info"));
    }
}
