//! Optional tracing bootstrap.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! embedding application's job. `init_default_tracing` offers a minimal one
//! for demos and ad-hoc debugging.

/// Installs a compact stderr `tracing` subscriber honoring `RUST_LOG`.
///
/// Falls back to the `info` level when `RUST_LOG` is unset or unparsable.
/// Returns `false` when the `telemetry` feature is disabled or when another
/// subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return subscriber.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
