//! # Store Error Types
//!
//! Error types for catalog loads and configuration.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────────────────┐  ┌─────────────────────────────────┐  │
//! │  │  Configuration              │  │  Catalog                        │  │
//! │  │                             │  │                                 │  │
//! │  │  InvalidConfig              │  │  Network   (request failed)     │  │
//! │  │  InvalidUrl                 │  │  Status    (non-2xx response)   │  │
//! │  │  ConfigLoadFailed           │  │  Decode    (not a Product list) │  │
//! │  │  ConfigSaveFailed           │  │                                 │  │
//! │  └─────────────────────────────┘  └─────────────────────────────────┘  │
//! │                                                                         │
//! │  A catalog error always leaves the store exactly as it was.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error type covering every failure a load or config step can hit.
#[derive(Debug, Error)]
pub enum StoreError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid store configuration.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Invalid catalog base URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Catalog Errors
    // =========================================================================
    /// The request never produced a response (DNS, refused, reset, ...).
    #[error("Catalog request failed: {0}")]
    Network(String),

    /// The catalog service answered with a non-success status.
    #[error("Catalog returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body is not a JSON array of products.
    #[error("Catalog response could not be decoded: {0}")]
    Decode(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for StoreError {
    fn from(err: url::ParseError) -> Self {
        StoreError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl StoreError {
    /// Returns true if this error came from talking to the catalog service.
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            StoreError::Network(_) | StoreError::Status { .. } | StoreError::Decode(_)
        )
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidConfig(_)
                | StoreError::InvalidUrl(_)
                | StoreError::ConfigLoadFailed(_)
                | StoreError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(StoreError::Network("refused".into()).is_catalog_error());
        assert!(StoreError::Decode("expected value".into()).is_catalog_error());
        assert!(StoreError::Status {
            status: 500,
            url: "http://localhost:3000/pizzas".into()
        }
        .is_catalog_error());

        assert!(StoreError::InvalidUrl("relative URL".into()).is_config_error());
        assert!(!StoreError::InvalidUrl("relative URL".into()).is_catalog_error());
    }

    #[test]
    fn test_json_errors_are_decode_failures() {
        let err = serde_json::from_str::<Vec<u32>>("<html>").unwrap_err();
        assert!(matches!(StoreError::from(err), StoreError::Decode(_)));
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Status {
            status: 404,
            url: "http://localhost:3000/pizzas".into(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog returned 404 for http://localhost:3000/pizzas"
        );
    }
}
