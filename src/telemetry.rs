//! Opt-in log output for registry decisions.
//!
//! The registry reports every create, update and skip through `tracing`
//! (`debug!` for creates and updates, `trace!` for skips, `warn!` when a hook
//! or instance fails). Nothing is printed unless the host installs a
//! subscriber, either its own or the one below.

/// Default filter when `RUST_LOG` is unset: quiet dependencies, registry
/// decisions at `info` and above.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "warn,chart_registry=info";

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Only available with the `telemetry` feature; without it this is a no-op
/// returning `false`. Also returns `false` when the host already set a global
/// subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
