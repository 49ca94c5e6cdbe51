use crate::state::{Product, SortMode};

/// What: Order products by list price according to `mode`.
///
/// Inputs:
/// - `items`: Filtered products to sort in place
/// - `mode`: Ascending, descending, or `None` to keep fetch order
///
/// Output:
/// - Sorts `items` in place.
///
/// Details:
/// - Uses a stable sort with `f64::total_cmp`, so equal prices keep their
///   relative fetch order; callers must not rely on tie order.
pub fn sort_by_price(items: &mut [&Product], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::Ascending => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::Descending => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::product;

    fn prices(items: &[&Product]) -> Vec<f64> {
        items.iter().map(|p| p.price).collect()
    }

    #[test]
    /// What: Each sort mode yields the expected price order
    ///
    /// - Input: Unsorted prices 30, 10, 20
    /// - Output: None keeps order; ascending and descending are monotone
    fn sort_modes_order_by_price() {
        let items = vec![
            product("a", "A", 30.0, 0.0),
            product("b", "B", 10.0, 0.0),
            product("c", "C", 20.0, 0.0),
        ];
        let mut view: Vec<&Product> = items.iter().collect();

        sort_by_price(&mut view, SortMode::None);
        assert_eq!(prices(&view), vec![30.0, 10.0, 20.0]);

        sort_by_price(&mut view, SortMode::Ascending);
        assert_eq!(prices(&view), vec![10.0, 20.0, 30.0]);

        sort_by_price(&mut view, SortMode::Descending);
        assert_eq!(prices(&view), vec![30.0, 20.0, 10.0]);
    }

    #[test]
    /// What: Adjacent pairs stay monotone with duplicate prices
    ///
    /// - Input: Prices with ties
    /// - Output: Every adjacent pair satisfies <= (ascending) and >= (descending)
    fn sort_is_monotone_with_ties() {
        let items: Vec<Product> = [5.0, 1.0, 5.0, 3.0, 1.0, 9.0]
            .iter()
            .enumerate()
            .map(|(i, price)| product(&i.to_string(), "P", *price, 0.0))
            .collect();
        let mut view: Vec<&Product> = items.iter().collect();
        sort_by_price(&mut view, SortMode::Ascending);
        assert!(view.windows(2).all(|w| w[0].price <= w[1].price));
        sort_by_price(&mut view, SortMode::Descending);
        assert!(view.windows(2).all(|w| w[0].price >= w[1].price));
    }
}
