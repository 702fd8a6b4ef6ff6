//! Logging bootstrap.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when the settings file names none, or an invalid one.
pub const DEFAULT_DIRECTIVE: &str = "windock=info";

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `directive`. Returns
/// `false` if a global subscriber was already installed, which happens
/// when the host reloads the plugin.
pub fn init(directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(directive))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Run `f` under a temporary stderr subscriber at [`DEFAULT_DIRECTIVE`].
///
/// Covers the work done before the settings that choose the real filter
/// are known.
pub fn with_startup_logging<T>(f: impl FnOnce() -> T) -> T {
    scoped(filter_for(DEFAULT_DIRECTIVE), std::io::stderr, f)
}

fn scoped<W, T>(filter: EnvFilter, writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

fn filter_for(directive: &str) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}
