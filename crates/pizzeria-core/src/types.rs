//! # Domain Types
//!
//! The catalog record and the key that identifies it inside a cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │        │   ProductKey    │                        │
//! │  │  ─────────────  │ key()  │  ─────────────  │                        │
//! │  │  id             │ ─────► │  compact JSON   │                        │
//! │  │  imageUrl       │        │  of every field │                        │
//! │  │  name           │        └─────────────────┘                        │
//! │  │  types / sizes  │                                                    │
//! │  │  price (Money)  │        ┌─────────────────┐                        │
//! │  │  category       │        │   CartEntry     │ (cart.rs)              │
//! │  │  rating         │ ─────► │  Product+count  │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product's cart identity is derived from ALL of its fields, not just `id`.
//! Two catalog rows with identical fields share one cart entry; a row whose
//! price (or any other field) changes while in the cart becomes a new entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

/// Category identifier as used by the catalog service's `category` filter.
pub type CategoryId = u32;

// =============================================================================
// Product
// =============================================================================

/// A pizza as listed by the catalog service.
///
/// Decoded verbatim from the service's JSON; keys the struct does not name
/// are ignored. Products are never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog row id.
    pub id: u32,

    /// Picture shown on the product card.
    #[serde(default)]
    pub image_url: String,

    /// Display name.
    pub name: String,

    /// Dough variants offered (indices into the UI's dough labels).
    #[serde(default)]
    pub types: Vec<u32>,

    /// Sizes offered, in centimetres.
    #[serde(default)]
    pub sizes: Vec<u32>,

    /// Unit price.
    pub price: Money,

    /// Category the catalog files this pizza under.
    pub category: CategoryId,

    /// Popularity score used by the "rating" sort.
    pub rating: f64,
}

impl Product {
    /// Returns the cart identity key for this product.
    pub fn key(&self) -> ProductKey {
        ProductKey::of(self)
    }
}

// =============================================================================
// Product Key
// =============================================================================

/// Identity of a product inside a cart.
///
/// Built from the compact JSON serialization of every Product field, in
/// declaration order, so the same field values always yield the same key.
/// `count` never takes part because it lives on `CartEntry`, not `Product`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductKey(String);

impl ProductKey {
    /// Derives the key for a product.
    pub fn of(product: &Product) -> Self {
        // Serializing plain fields cannot fail; Debug is an equally
        // deterministic rendering if it ever does.
        let serialized =
            serde_json::to_string(product).unwrap_or_else(|_| format!("{product:?}"));
        ProductKey(serialized)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_ROW: &str = r#"{
        "id": 0,
        "imageUrl": "https://example.test/pepperoni.png",
        "name": "Pepperoni Fresh",
        "types": [0, 1],
        "sizes": [26, 30, 40],
        "price": 803,
        "category": 0,
        "rating": 4
    }"#;

    #[test]
    fn test_decodes_catalog_row() {
        let product: Product = serde_json::from_str(CATALOG_ROW).unwrap();
        assert_eq!(product.id, 0);
        assert_eq!(product.name, "Pepperoni Fresh");
        assert_eq!(product.sizes, vec![26, 30, 40]);
        assert_eq!(product.price.units(), 803);
        assert!((product.rating - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"id":3,"name":"Cheese","price":245,"category":1,"rating":7,"spicy":false}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.types.is_empty());
        assert!(product.image_url.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let product: Product = serde_json::from_str(CATALOG_ROW).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_key_is_deterministic() {
        let a: Product = serde_json::from_str(CATALOG_ROW).unwrap();
        let b: Product = serde_json::from_str(CATALOG_ROW).unwrap();
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key().as_str(), a.key().to_string());
    }

    #[test]
    fn test_any_field_change_changes_key() {
        let base: Product = serde_json::from_str(CATALOG_ROW).unwrap();

        let mut repriced = base.clone();
        repriced.price = Money::from_units(850);
        assert_ne!(base.key(), repriced.key());

        let mut renumbered = base.clone();
        renumbered.id = 42;
        assert_ne!(base.key(), renumbered.key());
    }
}
