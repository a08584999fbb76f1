//! Test fixtures: a small catalog, an in-memory `Catalog`, and an axum
//! server that answers like the real catalog service.

use std::cell::RefCell;
use std::collections::HashMap;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use pizzeria_core::{CategoryId, Money, Product, SortCriterion};

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};

fn pizza(id: u32, name: &str, price: i64, category: CategoryId, rating: f64) -> Product {
    Product {
        id,
        image_url: format!("https://img.example.test/pizza-{id}.png"),
        name: name.to_string(),
        types: vec![0, 1],
        sizes: vec![26, 30, 40],
        price: Money::from_units(price),
        category,
        rating,
    }
}

/// Six pizzas across three categories, in catalog (id) order.
pub(crate) fn sample_products() -> Vec<Product> {
    vec![
        pizza(0, "Pepperoni Fresh", 803, 0, 4.0),
        pizza(1, "Cheese", 245, 1, 6.0),
        pizza(2, "Veggie Delight", 295, 1, 9.0),
        pizza(3, "Sweet & Sour Chicken", 275, 2, 2.0),
        pizza(4, "Cheeseburger", 415, 0, 8.0),
        pizza(5, "Crazy Pepperoni", 580, 2, 2.0),
    ]
}

/// Orders products descending by `field`, the way the service honours
/// `_sort=field&_order=desc`. Unknown fields leave the order alone.
fn server_sort_desc(products: &mut [Product], field: &str) {
    if let Ok(criterion) = field.parse::<SortCriterion>() {
        products.sort_by(|a, b| criterion.compare(b, a));
    }
}

// =============================================================================
// In-memory catalog
// =============================================================================

/// A `Catalog` that serves `sample_products()` and records each request.
pub(crate) struct InMemoryCatalog {
    products: Vec<Product>,
    failure: Option<fn() -> StoreError>,
    requests: RefCell<Vec<String>>,
}

impl InMemoryCatalog {
    pub(crate) fn new() -> Self {
        InMemoryCatalog {
            products: sample_products(),
            failure: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// A catalog whose every fetch fails with the given error.
    pub(crate) fn failing(failure: fn() -> StoreError) -> Self {
        InMemoryCatalog {
            failure: Some(failure),
            ..Self::new()
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn respond(&self, request: String, products: Vec<Product>) -> StoreResult<Vec<Product>> {
        self.requests.borrow_mut().push(request);
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(products),
        }
    }
}

impl Catalog for InMemoryCatalog {
    async fn fetch_all(&self) -> StoreResult<Vec<Product>> {
        self.respond("all".to_string(), self.products.clone())
    }

    async fn fetch_by_category(&self, category: CategoryId) -> StoreResult<Vec<Product>> {
        let filtered = self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        self.respond(format!("category={category}"), filtered)
    }

    async fn fetch_sorted(&self, field: &str) -> StoreResult<Vec<Product>> {
        let mut sorted = self.products.clone();
        server_sort_desc(&mut sorted, field);
        self.respond(format!("_sort={field}&_order=desc"), sorted)
    }
}

// =============================================================================
// HTTP catalog
// =============================================================================

/// Serves `router` on an ephemeral localhost port; returns `http://addr`.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serves `sample_products()` at `path`, honouring `category`, `_sort` and
/// `_order` query parameters.
pub(crate) async fn serve_catalog(path: &str) -> String {
    async fn list(Query(params): Query<HashMap<String, String>>) -> Json<Vec<Product>> {
        let mut products = sample_products();

        if let Some(category) = params.get("category").and_then(|c| c.parse::<u32>().ok()) {
            products.retain(|p| p.category == category);
        }

        if let Some(field) = params.get("_sort") {
            if params.get("_order").map(String::as_str) == Some("desc") {
                server_sort_desc(&mut products, field);
            }
        }

        Json(products)
    }

    serve(Router::new().route(path, get(list))).await
}
