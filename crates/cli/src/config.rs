//! Environment-driven configuration.

use std::path::PathBuf;

use stockroom_core::Quantity;
use stockroom_inventory::DEFAULT_INVENTORY_FILE;
use stockroom_observability::LogFormat;

pub const ENV_FILE: &str = "STOCKROOM_FILE";
pub const ENV_LOW_THRESHOLD: &str = "STOCKROOM_LOW_THRESHOLD";
pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";

/// Threshold for the low-stock query the demo runs.
pub const DEFAULT_DEMO_LOW_THRESHOLD: Quantity = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inventory_file: PathBuf,
    pub low_threshold: Quantity,
    pub log_format: LogFormat,
    fallbacks: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_threshold: DEFAULT_DEMO_LOW_THRESHOLD,
            log_format: LogFormat::default(),
            fallbacks: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable values fall back to
    /// their defaults and are remembered for [`warn_fallbacks`](Self::warn_fallbacks).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = lookup(ENV_FILE).filter(|v| !v.trim().is_empty()) {
            config.inventory_file = PathBuf::from(file);
        }

        if let Some(raw) = lookup(ENV_LOW_THRESHOLD) {
            match raw.trim().parse::<Quantity>() {
                Ok(threshold) => config.low_threshold = threshold,
                Err(e) => config
                    .fallbacks
                    .push(format!("{ENV_LOW_THRESHOLD}={raw:?} is not an integer ({e}); using {DEFAULT_DEMO_LOW_THRESHOLD}")),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .fallbacks
                    .push(format!("{ENV_LOG_FORMAT}: {e}; using json")),
            }
        }

        config
    }

    pub fn with_inventory_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.inventory_file = path.into();
        self
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// Log every value that fell back to its default.
    ///
    /// Call after logging is initialized.
    pub fn warn_fallbacks(&self) {
        for msg in &self.fallbacks {
            tracing::warn!("{msg}");
        }
    }
}
