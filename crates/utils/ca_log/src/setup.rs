//! Function to setup logging in binaries and tests.

use std::sync::Once;

/// Crates that are too loud on `info`/`debug` to be useful here.
const LOUD_CRATES: [&str; 3] = ["puffin", "serde_json", "insta"];

/// The `RUST_LOG` filter to use: the environment's if set, `info` otherwise,
/// with the loud crates pinned to `warn` unless explicitly configured.
pub fn default_log_filter() -> String {
    let mut rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());

    for loud_crate in LOUD_CRATES {
        if !rust_log.contains(&format!("{loud_crate}=")) {
            rust_log += &format!(",{loud_crate}=warn");
        }
    }

    rust_log
}

/// Directs [`log`] calls to stderr.
///
/// Safe to call more than once: only the first call installs a subscriber.
pub fn setup_logging() {
    static SETUP: Once = Once::new();

    SETUP.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::new(default_log_filter());

        // `try_init` also installs the `tracing-log` bridge, so plain `log` records show up.
        // It only fails if someone else already installed a global subscriber, which is fine.
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}
