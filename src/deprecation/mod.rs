//! Deprecation advisories.
//!
//! Advisories are emitted through the `log` facade at `warn` level, once per
//! distinct message for the lifetime of the process. They never affect the
//! caller's control flow.

mod config;

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, Mutex, RwLock};

use log::{debug, warn};

pub use config::Config;

/// Log target used for every advisory.
pub const LOG_TARGET: &str = "http_errors";

static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::from_env()));

static EMITTED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

static REQUESTED: AtomicUsize = AtomicUsize::new(0);

/// Install the process-wide advisory configuration.
///
/// The configuration is read from the environment on first use unless this
/// is called earlier.
pub fn configure(config: Config) {
    match CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Get a copy of the current advisory configuration.
pub fn current_config() -> Config {
    match CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Emit an advisory unless the same message was already emitted.
///
/// # Returns
///
/// `true` if this call actually logged the message.
pub fn warn_once(message: &str) -> bool {
    REQUESTED.fetch_add(1, Ordering::Relaxed);

    let config = current_config();
    if !config.enabled {
        debug!(target: LOG_TARGET, "advisory suppressed by configuration: {message}");
        return false;
    }

    let first = {
        let mut emitted = match EMITTED.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        emitted.insert(message.to_string())
    };

    if first {
        warn!(target: LOG_TARGET, "{namespace} deprecated {message}", namespace = config.namespace);
    } else {
        debug!(target: LOG_TARGET, "advisory already emitted: {message}");
    }
    first
}

/// Number of advisories requested so far, including suppressed and repeated ones.
#[cfg(test)]
pub(crate) fn advisory_count() -> usize {
    REQUESTED.load(Ordering::Relaxed)
}
