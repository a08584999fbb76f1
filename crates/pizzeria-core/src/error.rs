//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                       │
//! │  └── CoreError        - Input the domain does not recognise             │
//! │                                                                         │
//! │  pizzeria-store errors (separate crate)                                 │
//! │  └── StoreError       - Catalog fetch and configuration failures        │
//! │                                                                         │
//! │  Cart and sort mutations never fail: they take typed input only.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A sort criterion string that is not one of `rating`, `name`, `price`.
    ///
    /// ## When This Occurs
    /// - The UI sends a criterion the sort menu does not offer
    /// - A config file names a misspelled default sort
    ///
    /// The store treats this as a no-op; config validation rejects it.
    #[error("Unknown sort criterion: '{0}'. Valid options: rating, name, price")]
    UnknownSortCriterion(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
