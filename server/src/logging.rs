//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(settings: &Settings) -> &'static str {
    if settings.is_prod() {
        "todo_server=info,todo_core=info,tower_http=info"
    } else {
        "todo_server=debug,todo_core=debug,tower_http=debug"
    }
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(settings: &Settings) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(settings).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_logs_less() {
        let prod = Settings {
            environment: "prod".to_string(),
            ..Settings::default()
        };
        assert!(default_filter(&prod).contains("todo_core=info"));
        assert!(default_filter(&Settings::default()).contains("todo_core=debug"));
    }
}
