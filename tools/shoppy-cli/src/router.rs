//! Storefront routes.
//!
//! | Path            | View            |
//! |-----------------|-----------------|
//! | `/`             | product list    |
//! | `/product/{id}` | product detail  |
//! | `/cart`         | cart            |
//! | `/checkout`     | checkout        |
//!
//! Anything else renders the not-found view.

use std::fmt;

use shoppy_commerce::ProductId;

/// A parsed storefront path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Product(ProductId),
    Cart,
    Checkout,
    NotFound(String),
}

impl Route {
    /// Match `path`, first removing `basename` from its front when present.
    /// Paths without the basename are matched as given.
    ///
    /// Query strings and fragments are ignored, as are trailing slashes.
    pub fn parse(path: &str, basename: Option<&str>) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let path = match basename.map(|b| b.trim_end_matches('/')) {
            Some(base) if !base.is_empty() => match path.strip_prefix(base) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => path,
            },
            _ => path,
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["product", id] => match id.parse::<ProductId>() {
                Ok(id) if id.is_present() => Route::Product(id),
                _ => Route::NotFound(path.to_string()),
            },
            ["cart"] => Route::Cart,
            ["checkout"] => Route::Checkout,
            _ => Route::NotFound(path.to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Product(id) => write!(f, "/product/{}", id),
            Route::Cart => write!(f, "/cart"),
            Route::Checkout => write!(f, "/checkout"),
            Route::NotFound(path) => write!(f, "{}", path),
        }
    }
}
