//! Text search over catalog products.

use crate::catalog::Product;

/// Whether a product's title or description contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn matches_query(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Products matching `query`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches_query(p, query)).collect()
}
