//! # pizzeria-store: Cart & Catalog Store
//!
//! The state store behind the pizza-ordering page: loads the product list
//! from the catalog service and owns the category/sort selection and the
//! cart.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        pizzeria-store                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 PizzaStore (owned by the page shell)             │  │
//! │  │                                                                  │  │
//! │  │   products: Vec<Product>   selection: Selection   cart: Cart     │  │
//! │  └───────────────┬──────────────────────────────────────────────────┘  │
//! │                  │ load_all / load_by_category / load_sorted           │
//! │                  ▼                                                      │
//! │  ┌────────────────────────┐        ┌──────────────────────────────┐   │
//! │  │  Catalog (trait)       │◄───────│  CatalogClient (reqwest)     │   │
//! │  │  fetch_all             │        │  GET {base}/pizzas[?...]     │   │
//! │  │  fetch_by_category     │        └──────────────┬───────────────┘   │
//! │  │  fetch_sorted          │                       │ HTTP               │
//! │  └────────────────────────┘                       ▼                    │
//! │                                        external catalog service        │
//! │                                                                         │
//! │  Supporting: config (TOML + env), error (StoreError), telemetry         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`store`] - `PizzaStore`, the owned state object
//! - [`catalog`] - `Catalog` trait and the HTTP `CatalogClient`
//! - [`config`] - `StoreConfig` loading, validation, saving
//! - [`error`] - `StoreError` and `StoreResult`
//! - [`telemetry`] - tracing subscriber setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pizzeria_store::{CatalogClient, PizzaStore, StoreConfig};
//!
//! # async fn run() -> pizzeria_store::StoreResult<()> {
//! let config = StoreConfig::load_or_default(None);
//! let catalog = CatalogClient::from_config(&config)?;
//!
//! let mut store = PizzaStore::new();
//! store.load_all(&catalog).await?;
//!
//! if let Some(first) = store.products().first().cloned() {
//!     store.add_to_cart(&first);
//! }
//! println!("{} pizzas, total {}", store.total_count(), store.total_price());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;

#[cfg(test)]
mod testing;

pub use catalog::{Catalog, CatalogClient};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::PizzaStore;
