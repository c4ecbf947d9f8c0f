use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt, EnvFilter };

/// Filter used when `RUST_LOG` is unset or unparsable. Diesel is held at `warn`
/// so query chatter does not drown out request logs.
pub const DEFAULT_LOG_FILTER: &str = "info,diesel=warn";

/// Installs the global `tracing` subscriber.
///
/// The subscriber is a registry with two layers:
/// 1. an [`EnvFilter`] read from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]
/// 2. the human-readable fmt layer writing to stdout
///
/// Call once, at the top of `main`. Later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let _ = tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).try_init();
}
