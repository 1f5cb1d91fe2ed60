//! Log output of the command-line tool.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr log subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the filter is `info`; `RUST_LOG=predprey=debug` also
/// shows grid shape and solver status.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
