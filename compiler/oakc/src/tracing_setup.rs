//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable switching to indented, span-nested log output.
pub const LOG_TREE_ENV: &str = "OAK_LOG_TREE";

/// Initialize tracing for debug output.
///
/// Call once at startup; later calls do nothing. Nothing is installed unless
/// `RUST_LOG` is set, e.g. `RUST_LOG=oak_eval=debug`. With `OAK_LOG_TREE=1`
/// spans are rendered as an indented tree. Logs go to stderr so they never
/// mix with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1");

        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
