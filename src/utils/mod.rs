pub mod time;

use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

pub use time::{Clock, FixedClock, SystemClock};

const DEFAULT_DIR_NAME: &str = ".expense_core";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_LOG_DIRECTIVE: &str = "expense_core=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` overrides the default `expense_core=info` directive. A subscriber
/// installed earlier by the host application is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
