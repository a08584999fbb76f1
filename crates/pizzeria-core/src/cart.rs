//! # Cart Engine
//!
//! The shopping cart and its derived totals.
//!
//! ## Entry State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   One Cart Entry (keyed by ProductKey)                  │
//! │                                                                         │
//! │                 add                       add / increment               │
//! │   ┌────────┐ ─────────► ┌──────────────┐ ─────────────────► (n + 1)     │
//! │   │ absent │            │ present(n)   │                                │
//! │   └────────┘ ◄───────── └──────────────┘ ─────────────────► (n - 1)     │
//! │              remove /           │         decrement, n > 1              │
//! │              clear              │                                       │
//! │                                 └── decrement, n == 1 ──► unchanged     │
//! │                                                                         │
//! │  An entry is NEVER removed by decrementing; only remove/clear drop it.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! `increment`, `decrement` and `remove` take the `CartEntry` the view is
//! rendering. The new count is computed from that snapshot's `count`, and
//! the entry is located by the snapshot product's key. A snapshot whose key
//! is no longer in the cart (e.g. rendered before `clear`) changes nothing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductKey};

// =============================================================================
// Cart Entry
// =============================================================================

/// A product in the cart together with how many of it were ordered.
///
/// Serializes flat, i.e. every Product field plus `count`, which is the
/// shape the cart view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,

    /// Always at least 1 while the entry is in a cart.
    pub count: u32,
}

impl CartEntry {
    /// Creates the entry a first `add` inserts.
    pub fn new(product: Product) -> Self {
        CartEntry { product, count: 1 }
    }

    /// Returns the identity key of this entry's product.
    pub fn key(&self) -> ProductKey {
        self.product.key()
    }

    /// Unit price × count.
    pub fn line_total(&self) -> Money {
        self.product.price * self.count
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one entry per `ProductKey`
/// - Every entry has `count >= 1`
/// - Entries keep the order they were first added in
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<(ProductKey, CartEntry)>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    fn position(&self, key: &ProductKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Adds one of `product` to the cart.
    ///
    /// ## Behavior
    /// - Not in cart: appends an entry with `count = 1`
    /// - Already in cart: bumps the count and stores the incoming product
    ///
    /// Returns the entry's count after the add.
    pub fn add(&mut self, product: &Product) -> u32 {
        let key = product.key();

        if let Some(index) = self.position(&key) {
            let (_, entry) = &mut self.entries[index];
            entry.product = product.clone();
            entry.count = entry.count.saturating_add(1);
            return entry.count;
        }

        self.entries.push((key, CartEntry::new(product.clone())));
        1
    }

    /// Sets the matching entry's count to `entry.count + 1`.
    pub fn increment(&mut self, entry: &CartEntry) {
        self.replace_count(entry, entry.count.saturating_add(1));
    }

    /// Sets the matching entry's count to `entry.count - 1`, unless that
    /// would drop it below 1, in which case nothing changes.
    pub fn decrement(&mut self, entry: &CartEntry) {
        if entry.count > 1 {
            self.replace_count(entry, entry.count - 1);
        }
    }

    fn replace_count(&mut self, entry: &CartEntry, count: u32) {
        if let Some(index) = self.position(&entry.key()) {
            self.entries[index].1 = CartEntry {
                product: entry.product.clone(),
                count,
            };
        }
    }

    /// Removes the matching entry regardless of its count.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, entry: &CartEntry) -> bool {
        let key = entry.key();
        let initial_len = self.entries.len();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.len() != initial_len
    }

    /// Clears all entries from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &ProductKey) -> Option<&CartEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter().map(|(_, e)| e)
    }

    /// Returns a copy of every entry in insertion order.
    pub fn line_items(&self) -> Vec<CartEntry> {
        self.iter().cloned().collect()
    }

    /// Unit price × count for one line item.
    pub fn line_total(entry: &CartEntry) -> Money {
        entry.line_total()
    }

    /// Returns the number of distinct entries in the cart.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the sum of all entries' counts, saturating at `u32::MAX`.
    pub fn total_count(&self) -> u32 {
        self.iter().fold(0u32, |n, e| n.saturating_add(e.count))
    }

    /// Returns Σ price × count over all entries.
    pub fn total_price(&self) -> Money {
        self.iter().map(CartEntry::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// View Types
// =============================================================================

/// Cart totals summary for the header badge and the cart footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_count: u32,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_count: cart.total_count(),
            total_price: cart.total_price(),
        }
    }
}

/// Everything the cart view renders, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub items: Vec<CartEntry>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.line_items(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
