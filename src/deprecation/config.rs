//! Advisory configuration.

use std::env;

/// Environment variable listing namespaces whose advisories are silenced.
pub const NO_DEPRECATION_VAR: &str = "NO_DEPRECATION";

/// Deprecation advisory configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether advisories are emitted at all.
    pub enabled: bool,
    /// The namespace advisories are reported under.
    pub namespace: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            namespace: "http-errors".to_string(),
        }
    }
}

impl Config {
    /// Build the default configuration, then apply `NO_DEPRECATION`.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var(NO_DEPRECATION_VAR) {
            Ok(value) => config.silenced_by(&value),
            Err(_) => config,
        }
    }

    /// Disable advisories if `list` names this namespace or `*`.
    ///
    /// The list is separated by commas and/or whitespace, and matching is
    /// case-insensitive.
    pub fn silenced_by(mut self, list: &str) -> Self {
        let silenced = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .any(|s| s == "*" || s.eq_ignore_ascii_case(&self.namespace));
        if silenced {
            self.enabled = false;
        }
        self
    }
}
