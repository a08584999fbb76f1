//! # Sort Engine
//!
//! Client-side ordering of the product list.
//!
//! ## Criteria
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Wire name   Compares                       Direction                   │
//! │  ─────────   ────────────────────────────   ─────────                   │
//! │  "rating"    Product.rating (total order)   ascending                   │
//! │  "name"      Product.name (case-folded,     ascending                   │
//! │              then raw as tie-break)                                     │
//! │  "price"     Product.price                  ascending                   │
//! │                                                                         │
//! │  anything else ──► CoreError::UnknownSortCriterion                      │
//! │                    (callers treat it as "leave the list alone")         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All sorts are stable: products that compare equal keep the order the
//! catalog service returned them in.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::Product;

// =============================================================================
// Sort Criterion
// =============================================================================

/// A field the product list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortCriterion {
    /// Order by popularity score.
    #[default]
    Rating,
    /// Order by display name.
    Name,
    /// Order by unit price.
    Price,
}

impl SortCriterion {
    /// Every criterion, in the order the sort menu lists them.
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Rating,
        SortCriterion::Name,
        SortCriterion::Price,
    ];

    /// Returns the wire name, also used as the catalog's `_sort` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Rating => "rating",
            SortCriterion::Name => "name",
            SortCriterion::Price => "price",
        }
    }

    /// Compares two products under this criterion (ascending).
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortCriterion::Rating => a.rating.total_cmp(&b.rating),
            SortCriterion::Name => compare_names(&a.name, &b.name),
            SortCriterion::Price => a.price.cmp(&b.price),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriterion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortCriterion::Rating),
            "name" => Ok(SortCriterion::Name),
            "price" => Ok(SortCriterion::Price),
            other => Err(CoreError::UnknownSortCriterion(other.to_string())),
        }
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Reorders `products` in place, ascending by `criterion`.
///
/// ## Example
/// ```rust
/// use pizzeria_core::sort::{sort_products, SortCriterion};
/// use pizzeria_core::{Money, Product};
///
/// let pizza = |id: u32, price: i64| Product {
///     id,
///     image_url: String::new(),
///     name: format!("Pizza {id}"),
///     types: vec![],
///     sizes: vec![],
///     price: Money::from_units(price),
///     category: 0,
///     rating: 0.0,
/// };
///
/// let mut products = vec![pizza(1, 10), pizza(2, 5), pizza(3, 8)];
/// sort_products(&mut products, SortCriterion::Price);
///
/// let prices: Vec<i64> = products.iter().map(|p| p.price.units()).collect();
/// assert_eq!(prices, vec![5, 8, 10]);
/// ```
pub fn sort_products(products: &mut [Product], criterion: SortCriterion) {
    products.sort_by(|a, b| criterion.compare(a, b));
}

/// Name ordering that approximates a locale collation without a locale
/// database: case-insensitive first, raw code points to break ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// =============================================================================
// Unit Tests
// =============================================================================
