//! Installs a `tracing_subscriber` formatting layer, filtered by
//! the `RUST_LOG` environment variable.
//!
//! Records emitted through the `log` facade are bridged into the
//! subscriber, so search progress appears alongside spans:
//! ```bash
//! RUST_LOG=trailfinder=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    // Initialise tracing with subscribers and environment filter
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
