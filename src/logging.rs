//! Tracing setup for the command-line front end

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a log filter (e.g. `splitbudget=debug`)
pub const LOG_ENV: &str = "SPLITBUDGET_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr
///
/// `SPLITBUDGET_LOG` wins over `default_level`; an unparsable filter falls
/// back to `warn`. Later calls are ignored.
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // a subscriber installed elsewhere (e.g. by a test harness) is kept
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
