//! Tracing initialization.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// The filter defaults to `info`, escalated to `debug` when verbose; `RUST_LOG`
/// overrides both. Safe to call more than once; later attempts are ignored,
/// which keeps repeated in-process runs (tests) working.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
        tracing::debug!("still alive");
    }
}
