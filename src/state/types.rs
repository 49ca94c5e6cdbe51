//! Core value types used by the storefront state.

use crate::sources::CatalogError;

/// A product as served by the catalog service.
///
/// Only `id`, `name`, `price` and `price_drop` drive the listing logic; the
/// remaining fields are display-only and default when the service omits them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    /// Service identifier (`_id` on the wire).
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Display name; the search filter matches against this.
    pub name: String,
    /// List price before any discount.
    pub price: f64,
    /// Discount percentage; any value above zero marks the product as discounted.
    #[serde(rename = "priceDrop", alias = "price_drop", default)]
    pub price_drop: f64,
    /// Free-form description shown under the name in a tile.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Category label (e.g. "men", "kids").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    /// Sale marker as sent by the service ("yes"/"no").
    #[serde(rename = "onSale", alias = "on_sale", default, skip_serializing_if = "String::is_empty")]
    pub on_sale: String,
    /// Image URL; deserialized but not rendered in the terminal.
    #[serde(rename = "imageUrl", alias = "image_url", default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

impl Product {
    /// Whether the product carries a price drop.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.price_drop > 0.0
    }

    /// What: Price after applying the percentage price drop.
    ///
    /// Inputs:
    /// - `self`: Product with `price` and `price_drop`
    ///
    /// Output:
    /// - `price - price * price_drop / 100`, or `price` when not discounted.
    #[must_use]
    pub fn final_price(&self) -> f64 {
        if self.is_discounted() {
            self.price - self.price * (self.price_drop / 100.0)
        } else {
            self.price
        }
    }
}

/// Sorting mode for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the order the service returned.
    #[default]
    None,
    /// Cheapest first.
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortMode {
    /// Label used by the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "All Products",
            Self::Ascending => "Low to High Price",
            Self::Descending => "High to Low Price",
        }
    }

    /// Key written to `settings.toml`.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::None => "all",
            Self::Ascending => "low_to_high",
            Self::Descending => "high_to_low",
        }
    }

    /// What: Parse a sort mode from config or CLI text.
    ///
    /// Inputs:
    /// - `s`: Free-form key; case, dashes and surrounding spaces are ignored
    ///
    /// Output:
    /// - `Some(SortMode)` for a known alias, `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" | "none" | "default" => Some(Self::None),
            "low_to_high" | "lowtohigh" | "ascending" | "asc" | "price_asc" => {
                Some(Self::Ascending)
            }
            "high_to_low" | "hightolow" | "descending" | "desc" | "price_desc" => {
                Some(Self::Descending)
            }
            _ => None,
        }
    }

    /// Next mode in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }
}

/// Why a catalog fetch was issued; drives post-fetch bookkeeping and toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPurpose {
    /// First load at startup.
    Initial,
    /// Search submitted from the input.
    Search,
    /// Input was cleared; reload the unfiltered catalog.
    ClearSearch,
    /// Discount filter switched off.
    ShowAll,
    /// Explicit refresh (global key, empty state, or a tile).
    Refresh,
}

/// Catalog fetch request sent to the catalog worker.
#[derive(Clone, Debug)]
pub struct CatalogRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Action that triggered the fetch.
    pub purpose: FetchPurpose,
}

/// Outcome of a prior [`CatalogRequest`].
#[derive(Debug)]
pub struct CatalogResult {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed purpose from the originating request.
    pub purpose: FetchPurpose,
    /// Full product list on success.
    pub outcome: Result<Vec<Product>, CatalogError>,
}

/// Why the grid has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// No catalog could be loaded from the service.
    LoadFailed,
    /// The service answered with zero products.
    Empty,
    /// The submitted search matched no product name.
    NoMatches,
    /// The discount filter left nothing to show.
    NoDiscounts,
}

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Search input at the top.
    #[default]
    Search,
    /// Product grid and its controls.
    Browse,
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Informational message.
    Info,
    /// Something failed.
    Error,
}

/// Transient toast shown over the grid.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message text.
    pub message: String,
    /// Styling hint.
    pub kind: NotificationKind,
    /// Deadline after which the toast is hidden.
    pub expires_at: std::time::Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Deserialize a service product with wire field names
    ///
    /// - Input: JSON using `_id`, `priceDrop`, `onSale`
    /// - Output: Fields land in the snake_case struct; extras default
    fn product_deserializes_wire_names() {
        let p: Product = serde_json::from_str(
            r#"{"_id":"a1","name":"Linen Shirt","price":40,"priceDrop":25,"onSale":"yes","sizes":[]}"#,
        )
        .expect("valid product");
        assert_eq!(p.id, "a1");
        assert!(p.is_discounted());
        assert!((p.final_price() - 30.0).abs() < f64::EPSILON);
        assert_eq!(p.on_sale, "yes");
        assert!(p.description.is_empty());
    }

    #[test]
    /// What: Missing `priceDrop` means not discounted
    ///
    /// - Input: Product JSON without a price drop
    /// - Output: `price_drop == 0`, final price equals list price
    fn product_without_price_drop_is_full_price() {
        let p: Product =
            serde_json::from_str(r#"{"id":"b2","name":"Cap","price":12.5}"#).expect("valid");
        assert!(!p.is_discounted());
        assert!((p.final_price() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    /// What: Sort mode config keys round through aliases and cycle in selector order
    ///
    /// - Input: Known aliases and an unknown key
    /// - Output: Matching modes; `None` for unknown; `next` wraps
    fn sort_mode_keys_and_cycle() {
        assert_eq!(SortMode::from_config_key("Low-To-High"), Some(SortMode::Ascending));
        assert_eq!(SortMode::from_config_key(" highToLow "), Some(SortMode::Descending));
        assert_eq!(SortMode::from_config_key("all"), Some(SortMode::None));
        assert_eq!(SortMode::from_config_key("popularity"), None);
        for mode in [SortMode::None, SortMode::Ascending, SortMode::Descending] {
            assert_eq!(SortMode::from_config_key(mode.as_config_key()), Some(mode));
        }
        assert_eq!(SortMode::Descending.next(), SortMode::None);
    }
}
