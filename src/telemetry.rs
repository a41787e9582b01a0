//! Tracing setup.
//!
//! Logs go to stderr so the typewriter line on stdout stays clean. `RUST_LOG`
//! overrides the configured filter when set.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppSettings;

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_tracing(settings: &AppSettings) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter_layer = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&settings.log_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let registry = tracing_subscriber::registry().with(filter_layer);

        let result = if settings.log_json {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_current_span(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };

        if let Err(e) = result {
            eprintln!("tracing already initialised: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let settings = AppSettings::default();
        init_tracing(&settings);
        init_tracing(&settings);
        tracing::info!("still logging");
    }
}
