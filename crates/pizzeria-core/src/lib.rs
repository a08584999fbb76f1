//! # pizzeria-core: Pure Cart & Catalog Logic
//!
//! This crate holds the pizza shop's domain logic as pure functions and
//! plain data, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizzeria Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web page (product grid, cart view)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ owns & passes                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          pizzeria-store (PizzaStore, CatalogClient, config)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizzeria-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │   sort    │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Criterion │  │   │
//! │  │   │ProductKey │  │           │  │ CartEntry │  │ Selection │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and its cart identity `ProductKey`
//! - [`money`] - Integer `Money` for prices and totals
//! - [`cart`] - `Cart`, `CartEntry` and totals
//! - [`sort`] - `SortCriterion` and client-side ordering
//! - [`selection`] - Active category filter and sort
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{Cart, Money, Product};
//!
//! let margherita = Product {
//!     id: 1,
//!     image_url: String::new(),
//!     name: "Margherita".to_string(),
//!     types: vec![0, 1],
//!     sizes: vec![26, 30, 40],
//!     price: Money::from_units(450),
//!     category: 0,
//!     rating: 7.0,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&margherita);
//! cart.add(&margherita);
//!
//! assert_eq!(cart.total_count(), 2);
//! assert_eq!(cart.total_price(), Money::from_units(900));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod selection;
pub mod sort;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry, CartSnapshot, CartTotals};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use selection::{Selection, SortSelection};
pub use sort::{sort_products, SortCriterion};
pub use types::{CategoryId, Product, ProductKey};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Path segment the catalog service serves the product list under.
pub const CATALOG_RESOURCE: &str = "pizzas";
