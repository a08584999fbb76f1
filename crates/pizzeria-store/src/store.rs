//! # Pizza Store
//!
//! The state object the web page's shell owns: product list, selection and
//! cart, plus the loaders that refresh the product list.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  UI Action              Store Method              State Change          │
//! │  ─────────              ────────────              ────────────          │
//! │                                                                         │
//! │  Page load ───────────► load_all() ─────────────► products = fetched    │
//! │                                                                         │
//! │  Pick category ───────► load_by_category(c) ────► category = c          │
//! │                                                    products = fetched   │
//! │                                                                         │
//! │  Pick sort ───────────► load_sorted(f, id) ─────► products = fetched    │
//! │                                                    client sort by f     │
//! │                                                    category = None      │
//! │                                                                         │
//! │  "Add" button ────────► add_to_cart(p) ─────────► cart entry +1         │
//! │  "+" / "-" ───────────► increment / decrement ──► cart entry ±1         │
//! │  "×" ─────────────────► remove_from_cart(e) ────► entry dropped         │
//! │  "Clear cart" ────────► clear_cart() ───────────► cart emptied          │
//! │                                                                         │
//! │  A failed load changes nothing: fetch first, commit only on success.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! There is no global store. The shell creates a `PizzaStore` and hands out
//! `&PizzaStore` to views and `&mut PizzaStore` to event handlers. Loaders
//! borrow the store mutably across the fetch, so two loads on one store
//! cannot interleave. Shells that want to fetch concurrently call the
//! `Catalog` directly and commit with the `apply_*` methods.

use pizzeria_core::{
    sort_products, Cart, CartEntry, CartSnapshot, CartTotals, CategoryId, Money, Product,
    Selection, SortCriterion, SortSelection,
};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::StoreResult;

/// Product list, selection and cart for one browsing session.
#[derive(Debug, Clone, Default)]
pub struct PizzaStore {
    products: Vec<Product>,
    selection: Selection,
    cart: Cart,
}

impl PizzaStore {
    /// Creates an empty store: no products, no category, sorted by rating,
    /// empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The product grid, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active category filter.
    pub fn category(&self) -> Option<CategoryId> {
        self.selection.category
    }

    /// Active sort.
    pub fn sort_by(&self) -> SortSelection {
        self.selection.sort_by
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Number of pizzas in the cart, counting repeats.
    pub fn total_count(&self) -> u32 {
        self.cart.total_count()
    }

    /// Σ price × count over the cart.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Cart entries in the order they were first added.
    pub fn line_items(&self) -> Vec<CartEntry> {
        self.cart.line_items()
    }

    /// Price × count for one cart entry.
    pub fn line_total(&self, entry: &CartEntry) -> Money {
        Cart::line_total(entry)
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(&self.cart)
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds one of `product` to the cart.
    pub fn add_to_cart(&mut self, product: &Product) {
        let count = self.cart.add(product);
        debug!(product_id = product.id, count, "add_to_cart");
    }

    pub fn increment(&mut self, entry: &CartEntry) {
        debug!(product_id = entry.product.id, count = entry.count, "increment");
        self.cart.increment(entry);
    }

    /// Decrements an entry; an entry at 1 stays at 1.
    pub fn decrement(&mut self, entry: &CartEntry) {
        debug!(product_id = entry.product.id, count = entry.count, "decrement");
        self.cart.decrement(entry);
    }

    pub fn remove_from_cart(&mut self, entry: &CartEntry) {
        let removed = self.cart.remove(entry);
        debug!(product_id = entry.product.id, removed, "remove_from_cart");
    }

    pub fn clear_cart(&mut self) {
        debug!(items = self.cart.item_count(), "clear_cart");
        self.cart.clear();
    }

    // =========================================================================
    // Catalog Commits
    // =========================================================================

    /// Replaces the product list wholesale.
    pub fn apply_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Replaces the category filter.
    pub fn apply_category(&mut self, category: Option<CategoryId>) {
        self.selection.set_category(category);
    }

    /// Reorders the product list by a criterion name from the UI.
    ///
    /// Unrecognised names leave both the list and the recorded sort
    /// untouched. Returns whether a sort was applied.
    pub fn sort(&mut self, criterion: &str, id: u32) -> bool {
        match criterion.parse::<SortCriterion>() {
            Ok(parsed) => {
                self.sort_by_criterion(parsed, id);
                true
            }
            Err(e) => {
                debug!(error = %e, "Leaving product order unchanged");
                false
            }
        }
    }

    /// Reorders the product list and records `{criterion, id}` as the
    /// active sort.
    pub fn sort_by_criterion(&mut self, criterion: SortCriterion, id: u32) {
        sort_products(&mut self.products, criterion);
        self.selection.set_sort(SortSelection::new(criterion, id));
    }

    /// Commits the result of a sorted fetch: new products, client-side
    /// sort, category cleared.
    pub fn apply_sorted(&mut self, products: Vec<Product>, criterion: &str, id: u32) {
        self.apply_products(products);
        self.sort(criterion, id);
        self.apply_category(None);
    }

    // =========================================================================
    // Loaders
    // =========================================================================

    /// Fetches the full catalog and replaces the product list.
    pub async fn load_all<C: Catalog>(&mut self, catalog: &C) -> StoreResult<()> {
        let products = catalog.fetch_all().await?;
        info!(count = products.len(), "Loaded full catalog");
        self.apply_products(products);
        Ok(())
    }

    /// Fetches one category, then records it as the active filter and
    /// replaces the product list.
    pub async fn load_by_category<C: Catalog>(
        &mut self,
        catalog: &C,
        category: CategoryId,
    ) -> StoreResult<()> {
        let products = catalog.fetch_by_category(category).await?;
        info!(category, count = products.len(), "Loaded category");
        self.apply_category(Some(category));
        self.apply_products(products);
        Ok(())
    }

    /// Fetches the catalog ordered server-side by `criterion` (descending),
    /// then applies the client-side sort and clears the category filter.
    pub async fn load_sorted<C: Catalog>(
        &mut self,
        catalog: &C,
        criterion: &str,
        id: u32,
    ) -> StoreResult<()> {
        let products = catalog.fetch_sorted(criterion).await?;
        info!(criterion, count = products.len(), "Loaded sorted catalog");
        self.apply_sorted(products, criterion, id);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
