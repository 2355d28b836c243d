//! Catalog service client.

use crate::{CatalogConfig, LoadSlot};
use shoppy_commerce::catalog::{Product, ProductPage};
use shoppy_commerce::ProductId;
use shoppy_data::{FetchClient, FetchError, HttpTransport};
use tracing::debug;

/// Fetches products from the catalog service.
///
/// Each call is an independent request; nothing is cached.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: FetchClient,
    page_limit: Option<u32>,
}

impl CatalogLoader {
    /// Create a loader over an existing client. Paths are resolved against
    /// the client's base URL.
    pub fn new(client: FetchClient) -> Self {
        Self {
            client,
            page_limit: None,
        }
    }

    /// Create a loader talking HTTP to the configured service.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(config.timeout(), &config.user_agent)?;
        let client = FetchClient::new(transport)
            .with_base_url(config.base_url.clone())
            .with_default_header("Accept", "application/json");
        Ok(Self::new(client).with_page_limit(config.page_limit))
    }

    /// Ask the service for a specific page size when listing.
    pub fn with_page_limit(mut self, page_limit: Option<u32>) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Fetch the product list. A body without a `products` field yields an
    /// empty list.
    pub async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let mut request = self.client.get("/products");
        if let Some(limit) = self.page_limit {
            request = request.query("limit", limit);
        }
        let page: ProductPage = request.fetch_json().await?;
        debug!(count = page.products.len(), total = page.total, "listed products");
        Ok(page.products)
    }

    /// Fetch a single product. Unknown ids fail with the service's status.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
        let product: Product = self
            .client
            .get(format!("/products/{}", id))
            .fetch_json()
            .await?;
        debug!(%id, title = %product.title, "fetched product");
        Ok(product)
    }

    /// Load the product list into a slot. Returns whether the result was kept.
    pub async fn load_products(&self, slot: &LoadSlot<Vec<Product>>) -> bool {
        slot.run(self.list_products()).await
    }

    /// Load one product into a slot. Returns whether the result was kept.
    pub async fn load_product(&self, slot: &LoadSlot<Product>, id: ProductId) -> bool {
        slot.run(self.get_product(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoadState;
    use shoppy_data::MockTransport;
    use std::time::Duration;

    const BASE: &str = "https://catalog.test";

    fn product_json(id: u64, title: &str) -> String {
        serde_json::json!({
            "id": id,
            "title": title,
            "price": 10.0,
            "thumbnail": format!("https://img.test/{}.png", id),
            "images": [],
            "description": "",
            "brand": "Acme",
            "stock": 3
        })
        .to_string()
    }

    fn loader(transport: MockTransport) -> CatalogLoader {
        CatalogLoader::new(FetchClient::new(transport).with_base_url(BASE))
    }

    #[tokio::test]
    async fn test_list_products() {
        let body = format!(
            r#"{{"products": [{}, {}], "total": 2, "skip": 0, "limit": 30}}"#,
            product_json(1, "Red Shirt"),
            product_json(2, "Blue Hat")
        );
        let loader = loader(MockTransport::new().route(format!("{}/products", BASE), 200, body));

        let products = loader.list_products().await.unwrap();
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Red Shirt", "Blue Hat"]);
    }

    #[tokio::test]
    async fn test_list_products_missing_array_is_empty() {
        let loader = loader(MockTransport::new().route(format!("{}/products", BASE), 200, "{}"));
        assert!(loader.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_products_page_limit() {
        let transport = MockTransport::new().route(
            format!("{}/products?limit=0", BASE),
            200,
            r#"{"products": []}"#,
        );
        let loader = loader(transport).with_page_limit(Some(0));
        assert!(loader.list_products().await.is_ok());
    }

    #[tokio::test]
    async fn test_list_products_http_failure() {
        let loader = loader(MockTransport::new().route(
            format!("{}/products", BASE),
            503,
            "unavailable",
        ));
        let err = loader.list_products().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_get_product() {
        let loader = loader(MockTransport::new().route(
            format!("{}/products/7", BASE),
            200,
            product_json(7, "Lamp"),
        ));
        let product = loader.get_product(ProductId::new(7)).await.unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.brand, "Acme");
    }

    #[tokio::test]
    async fn test_get_unknown_product() {
        let loader = loader(MockTransport::new());
        let err = loader.get_product(ProductId::new(999)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_load_product_failure_sets_failed_state() {
        let loader = loader(MockTransport::new());
        let slot = LoadSlot::new();
        assert!(loader.load_product(&slot, ProductId::new(5)).await);
        assert_eq!(slot.state().error().unwrap().status, Some(404));
    }

    #[tokio::test]
    async fn test_superseded_product_request_is_ignored() {
        let transport = MockTransport::new()
            .delayed_route(
                format!("{}/products/1", BASE),
                200,
                product_json(1, "Slow"),
                Duration::from_millis(80),
            )
            .route(format!("{}/products/2", BASE), 200, product_json(2, "Fast"));
        let loader = loader(transport);
        let slot = LoadSlot::new();

        let (first_kept, second_kept) = futures::join!(
            loader.load_product(&slot, ProductId::new(1)),
            loader.load_product(&slot, ProductId::new(2)),
        );

        assert!(!first_kept);
        assert!(second_kept);
        match slot.state() {
            LoadState::Ready(product) => assert_eq!(product.title, "Fast"),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_latest_request_wins_even_when_slower() {
        let transport = MockTransport::new()
            .delayed_route(
                format!("{}/products/1", BASE),
                200,
                product_json(1, "Old"),
                Duration::from_millis(20),
            )
            .delayed_route(
                format!("{}/products/2", BASE),
                200,
                product_json(2, "New"),
                Duration::from_millis(50),
            );
        let loader = loader(transport);
        let slot = LoadSlot::new();

        let (first_kept, second_kept) = futures::join!(
            loader.load_product(&slot, ProductId::new(1)),
            loader.load_product(&slot, ProductId::new(2)),
        );

        assert!(!first_kept);
        assert!(second_kept);
        assert_eq!(slot.state().ready().map(|p| p.id), Some(ProductId::new(2)));
    }
}
