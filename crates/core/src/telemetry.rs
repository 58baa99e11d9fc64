use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "mochi_budget_core=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Meant for binaries and frontends embedding the engine; the library never
/// calls it on its own. Safe to call more than once, and a no-op if another
/// subscriber is already installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("Mochi budget core tracing initialized");
        }
    });
}
