//! Product and projection types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product as served by the catalog API.
///
/// Owned by the remote catalog; the storefront only reads it. Every field
/// except `id` may be absent in a response and falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Unit price in the storefront currency.
    #[serde(default)]
    pub price: f64,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Brand name.
    #[serde(default)]
    pub brand: String,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
}

impl Product {
    /// Image to show for this product: the thumbnail, else the first
    /// gallery image, else nothing.
    pub fn display_image(&self) -> &str {
        if !self.thumbnail.is_empty() {
            return &self.thumbnail;
        }
        self.images.first().map(String::as_str).unwrap_or("")
    }

    /// Project the fields a cart entry needs.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            thumbnail: self.display_image().to_string(),
        }
    }

    /// Unit price as money in the given currency.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }
}

/// Reduced copy of a [`Product`] carried by cart entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductSummary {
    /// Catalog identifier; `0` when the payload carried none.
    #[serde(default)]
    pub id: ProductId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Unit price in the storefront currency.
    #[serde(default)]
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub thumbnail: String,
}

impl ProductSummary {
    /// Create a projection without an image.
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            thumbnail: String::new(),
        }
    }

    /// Unit price as money in the given currency.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        product.summary()
    }
}

/// Body of the product listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductPage {
    /// Products on this page; absent in the body means none.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Total products in the catalog.
    #[serde(default)]
    pub total: u64,
    /// Offset of this page.
    #[serde(default)]
    pub skip: u64,
    /// Page size.
    #[serde(default)]
    pub limit: u64,
}
