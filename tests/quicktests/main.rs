#[macro_use(quickcheck)]
extern crate quickcheck_macros;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod tree;

static LOGGING: Once = Once::new();

/// Installs a global subscriber once per test binary so `RUST_LOG=trace` shows
/// what the tree is doing.
pub(crate) fn init_logging() {
    LOGGING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );
        if subscriber.try_init().is_err() {
            eprintln!("Tracing subscriber already set");
        }
    });
}
