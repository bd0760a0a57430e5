//! Tracing initialization for the `calc` binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or unparsable, so normal runs stay
/// quiet. `RUST_LOG=calc_eval=trace` shows every envelope on the channel.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
        // An embedding program may already have installed a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
