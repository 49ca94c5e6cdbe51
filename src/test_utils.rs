//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::{AppState, Product};

#[cfg(test)]
/// What: Build a product with the fields the listing logic reads.
///
/// Inputs:
/// - `id`, `name`, `price`, `price_drop`: Product fields
///
/// Output: `Product` with display-only fields left empty
pub fn product(id: &str, name: &str, price: f64, price_drop: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        price_drop,
        ..Product::default()
    }
}

#[cfg(test)]
/// What: Build a catalog of `n` products with the first `discounted` on sale.
///
/// Inputs:
/// - `n`: Number of products (ids "1".."n", names "Product 1".."Product n")
/// - `discounted`: How many leading products carry a 20% price drop
///
/// Output: Products in id order with prices 10, 20, 30, ...
pub fn catalog(n: usize, discounted: usize) -> Vec<Product> {
    (1..=n)
        .map(|i| {
            let drop = if i <= discounted { 20.0 } else { 0.0 };
            let price = f64::from(u32::try_from(i * 10).unwrap_or(u32::MAX));
            product(&i.to_string(), &format!("Product {i}"), price, drop)
        })
        .collect()
}

#[cfg(test)]
/// What: Provide an `AppState` with a committed catalog.
///
/// Inputs:
/// - `n`, `discounted`: Passed to [`catalog`]
///
/// Output: Loaded state with `discounted_count` set
pub fn loaded_app(n: usize, discounted: usize) -> AppState {
    let mut app = AppState::default();
    app.listing.catalog = catalog(n, discounted);
    app.listing.discounted_count = discounted.min(n);
    app.listing.loaded = true;
    app
}
