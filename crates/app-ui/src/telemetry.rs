//! Log output setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "app_ui=info,storage=info";

/// Install the global fmt subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `default_directive`.
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
