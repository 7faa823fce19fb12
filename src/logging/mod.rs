use anyhow::{anyhow, Context};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Default tracing filter when RUST_LOG is not set. User-facing output goes to
/// stdout via the CLI layer; diagnostics stay quiet unless asked for.
const DEFAULT_LEVEL: &str = "warn";

/// Initialize the tracing framework for the process.
///
/// Honors `RUST_LOG` when present, otherwise falls back to the default level.
/// Errors when invoked more than once per process invocation unless tests
/// explicitly reset the guard.
pub fn init() -> crate::Result<()> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .context("failed to configure tracing level")?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(env_filter)
        .init();

    Ok(())
}

#[cfg(test)]
/// Reset the initialization guard so tests can reconfigure logging multiple times.
pub fn reset_for_tests() {
    LOGGER_INITIALIZED.store(false, Ordering::SeqCst);
}
