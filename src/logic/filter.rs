use crate::state::Product;

/// What: Keep products whose name contains `query` case-insensitively.
///
/// Inputs:
/// - `items`: Result set in fetch order
/// - `query`: Submitted search text; empty keeps everything
///
/// Output:
/// - Borrowed matches in their original order.
///
/// Details:
/// - Matching is a plain substring test on lowercased text; the query is not
///   trimmed, so trailing spaces take part in the match.
#[must_use]
pub fn filter_by_name<'a>(items: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Drop every product without a price drop, keeping order.
pub fn retain_discounted(items: &mut Vec<&Product>) {
    items.retain(|p| p.is_discounted());
}

/// Number of products with `price_drop > 0`.
#[must_use]
pub fn count_discounted(items: &[Product]) -> usize {
    items.iter().filter(|p| p.is_discounted()).count()
}
