//! # Catalog Loader
//!
//! Fetches the product list from the external catalog service.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation              Request                                         │
//! │  ─────────────────────  ───────────────────────────────────────────     │
//! │  fetch_all()            GET {base}/pizzas                               │
//! │  fetch_by_category(c)   GET {base}/pizzas?category=c                    │
//! │  fetch_sorted(f)        GET {base}/pizzas?_sort=f&_order=desc           │
//! │                                                                         │
//! │  Response: JSON array of Product                                        │
//! │                                                                         │
//! │  Failure ─► StoreError::Network | Status | Decode   (no retry)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No request timeout is set: a fetch either resolves or fails.

use pizzeria_core::{CategoryId, Product, CATALOG_RESOURCE};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Catalog Trait
// =============================================================================

/// A source of product lists.
///
/// `PizzaStore` loaders are generic over this so they can run against the
/// HTTP client or an in-memory catalog.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Fetches the full catalog.
    async fn fetch_all(&self) -> StoreResult<Vec<Product>>;

    /// Fetches the products the service files under `category`.
    async fn fetch_by_category(&self, category: CategoryId) -> StoreResult<Vec<Product>>;

    /// Fetches the catalog ordered by `field`, descending, server-side.
    async fn fetch_sorted(&self, field: &str) -> StoreResult<Vec<Product>>;
}

// =============================================================================
// HTTP Client
// =============================================================================

/// reqwest-backed client for the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client for the service rooted at `base_url`.
    pub fn new(base_url: Url) -> Self {
        CatalogClient {
            client: Client::new(),
            base_url,
        }
    }

    /// Creates a client from the `[catalog]` section of the config.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Ok(Self::new(config.catalog_url()?))
    }

    /// Returns the service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/pizzas?{query}`, keeping any path prefix on the base.
    fn products_url(&self, query: &[(&str, &str)]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                StoreError::InvalidUrl(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push(CATALOG_RESOURCE);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    #[instrument(skip(self), fields(url = %url))]
    async fn get_products(&self, url: Url) -> StoreResult<Vec<Product>> {
        debug!("Requesting product list");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(error = %e, "Catalog request failed");
            StoreError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Catalog returned an error status");
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let products: Vec<Product> = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Catalog body is not a product list");
            StoreError::from(e)
        })?;

        info!(count = products.len(), "Product list received");
        Ok(products)
    }
}

impl Catalog for CatalogClient {
    async fn fetch_all(&self) -> StoreResult<Vec<Product>> {
        let url = self.products_url(&[])?;
        self.get_products(url).await
    }

    async fn fetch_by_category(&self, category: CategoryId) -> StoreResult<Vec<Product>> {
        let category = category.to_string();
        let url = self.products_url(&[("category", category.as_str())])?;
        self.get_products(url).await
    }

    async fn fetch_sorted(&self, field: &str) -> StoreResult<Vec<Product>> {
        let url = self.products_url(&[("_sort", field), ("_order", "desc")])?;
        self.get_products(url).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_products, serve, serve_catalog};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    fn client_for(base: &str) -> CatalogClient {
        CatalogClient::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_products_url() {
        let client = client_for("http://localhost:3000");
        assert_eq!(
            client.products_url(&[]).unwrap().as_str(),
            "http://localhost:3000/pizzas"
        );
        assert_eq!(
            client.products_url(&[("category", "2")]).unwrap().as_str(),
            "http://localhost:3000/pizzas?category=2"
        );
        assert_eq!(
            client
                .products_url(&[("_sort", "price"), ("_order", "desc")])
                .unwrap()
                .as_str(),
            "http://localhost:3000/pizzas?_sort=price&_order=desc"
        );
    }

    #[test]
    fn test_products_url_keeps_path_prefix() {
        for base in ["http://catalog.test/api", "http://catalog.test/api/"] {
            assert_eq!(
                client_for(base).products_url(&[]).unwrap().as_str(),
                "http://catalog.test/api/pizzas"
            );
        }
    }

    #[test]
    fn test_from_config() {
        let client = CatalogClient::from_config(&StoreConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/");

        let mut config = StoreConfig::default();
        config.catalog.base_url = "mailto:pizza@example.test".to_string();
        assert!(CatalogClient::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_fetch_all() {
        let base = serve_catalog("/pizzas").await;
        let products = client_for(&base).fetch_all().await.unwrap();
        assert_eq!(products, sample_products());
    }

    #[tokio::test]
    async fn test_fetch_by_category_sends_filter() {
        let base = serve_catalog("/pizzas").await;
        let products = client_for(&base).fetch_by_category(1).await.unwrap();

        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.category == 1));
    }

    #[tokio::test]
    async fn test_fetch_sorted_requests_descending_order() {
        let base = serve_catalog("/pizzas").await;
        let products = client_for(&base).fetch_sorted("price").await.unwrap();

        let prices: Vec<i64> = products.iter().map(|p| p.price.units()).collect();
        let mut expected = prices.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(prices, expected);
    }

    #[tokio::test]
    async fn test_base_path_prefix_is_used() {
        let base = serve_catalog("/api/pizzas").await;
        let products = client_for(&format!("{base}/api")).fetch_all().await.unwrap();
        assert_eq!(products.len(), sample_products().len());
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let router = Router::new().route("/pizzas", get(|| async { "<html>oops</html>" }));
        let base = serve(router).await;

        let err = client_for(&base).fetch_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_json_object_body_is_decode_error() {
        let router = Router::new().route("/pizzas", get(|| async { "{}" }));
        let base = serve(router).await;

        let err = client_for(&base).fetch_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            "/pizzas",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "[]") }),
        );
        let base = serve(router).await;

        let err = client_for(&base).fetch_all().await.unwrap_err();
        assert!(
            matches!(err, StoreError::Status { status: 503, .. }),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{addr}"))
            .fetch_all()
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Network(_)), "got {err:?}");
        assert!(err.is_catalog_error());
    }
}
