//! # Store Configuration
//!
//! Where the catalog service lives, which sort the grid opens with, and how
//! chatty the logs are.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PIZZERIA_CATALOG_URL=http://localhost:3000                         │
//! │     PIZZERIA_DEFAULT_SORT=price                                        │
//! │     PIZZERIA_LOG_FILTER=debug                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pizzeria-store/pizzeria.toml (Linux)                     │
//! │     ~/Library/Application Support/com.pizzeria.store/pizzeria.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3000, sort by rating, "info,pizzeria=debug"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! base_url = "http://localhost:3000"
//!
//! [selection]
//! default_sort = "rating"   # rating | name | price
//!
//! [logging]
//! filter = "info,pizzeria=debug"
//! ```

use pizzeria_core::SortCriterion;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Catalog Settings
// =============================================================================

/// Where to reach the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Base URL; the product list is served at `{base_url}/pizzas`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            base_url: default_base_url(),
        }
    }
}

// =============================================================================
// Selection Settings
// =============================================================================

/// Initial product grid ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionSettings {
    #[serde(default)]
    pub default_sort: SortCriterion,
}

// =============================================================================
// Logging Settings
// =============================================================================

/// Default `tracing` filter, used when `RUST_LOG` is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,pizzeria=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Store Configuration
// =============================================================================

/// Complete store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub selection: SelectionSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StoreConfig {
    /// Creates a config holding the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (pizzeria.toml), when it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::read_file(&path)?,
            Some(path) => {
                debug!(?path, "No config file, starting from defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> StoreResult<Self> {
        info!(?path, "Reading store config");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Loads the config, or the defaults together with the error that made
    /// loading fail.
    ///
    /// Callers that set up logging from the config use this to report the
    /// failure once a subscriber exists.
    pub fn load_or_fallback(config_path: Option<PathBuf>) -> (Self, Option<StoreError>) {
        match Self::load(config_path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        let (config, failure) = Self::load_or_fallback(config_path);
        if let Some(e) = failure {
            warn!(error = %e, "Store config unusable, using defaults");
        }
        config
    }

    /// Writes the config as pretty TOML, creating the parent directory.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path.or_else(Self::default_config_path).ok_or_else(|| {
            StoreError::ConfigSaveFailed("no config directory on this platform".into())
        })?;
        let written = |result: std::io::Result<()>| {
            result.map_err(|e| StoreError::ConfigSaveFailed(format!("{}: {e}", path.display())))
        };

        if let Some(dir) = path.parent() {
            written(std::fs::create_dir_all(dir))?;
        }
        written(std::fs::write(&path, toml::to_string_pretty(self)?))?;

        info!(?path, "Store config written");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        self.catalog_url()?;

        if self.logging.filter.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Parses the catalog base URL, accepting only http and https.
    pub fn catalog_url(&self) -> StoreResult<Url> {
        let url = Url::parse(&self.catalog.base_url)?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(StoreError::InvalidUrl(format!(
                "Catalog URL must use http:// or https://, got: {}://",
                other
            ))),
        }
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PIZZERIA_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.base_url = url;
        }

        if let Some(sort) = lookup("PIZZERIA_DEFAULT_SORT") {
            match sort.parse::<SortCriterion>() {
                Ok(parsed) => {
                    debug!(sort = %parsed, "Overriding default sort from environment");
                    self.selection.default_sort = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring PIZZERIA_DEFAULT_SORT"),
            }
        }

        if let Some(filter) = lookup("PIZZERIA_LOG_FILTER") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pizzeria", "store")
            .map(|dirs| dirs.config_dir().join("pizzeria.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the configured default sort.
    pub fn default_sort(&self) -> SortCriterion {
        self.selection.default_sort
    }

    /// Returns the default log filter.
    pub fn log_filter(&self) -> &str {
        &self.logging.filter
    }
}
