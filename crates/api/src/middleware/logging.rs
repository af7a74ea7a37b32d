//! Logging initialization.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is unset: the configured level for this
/// workspace's crates, `info` for HTTP tracing, `warn` for everything else.
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "warn,franchise_cms_api={level},franchise_cms={level},domain={level},persistence={level},tower_http=info"
    ))
}

/// Installs the global subscriber. `logging.format` selects `json` or
/// human-readable `pretty` output.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.format == "json" {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(FmtSpan::NONE)
                    .with_target(true),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_includes_workspace_crates() {
        let filter = default_filter("debug").to_string();
        assert!(filter.contains("persistence=debug"));
        assert!(filter.contains("tower_http=info"));
    }
}
