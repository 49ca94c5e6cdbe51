//! Small utility helpers for price formatting, text fitting and time formatting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Environment variable that skips terminal setup (used by smoke tests).
pub const HEADLESS_ENV: &str = "STOREFRONT_TEST_HEADLESS";

/// Whether the runtime should skip terminal setup and the input thread.
#[must_use]
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// What: Format a price for display.
///
/// Inputs:
/// - `value`: Amount in the shop currency
///
/// Output:
/// - `$` followed by the amount with two decimals, e.g. `$12.50`.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// What: Format a discount percentage for a tile badge.
///
/// Inputs:
/// - `price_drop`: Percentage off
///
/// Output:
/// - `-25% off`; fractional drops keep one decimal (`-12.5% off`).
#[must_use]
pub fn format_discount(price_drop: f64) -> String {
    if (price_drop - price_drop.round()).abs() < f64::EPSILON {
        format!("-{price_drop:.0}% off")
    } else {
        format!("-{price_drop:.1}% off")
    }
}

/// What: Truncate text to a display width, appending an ellipsis when cut.
///
/// Inputs:
/// - `text`: Source text
/// - `max_width`: Maximum display columns
///
/// Output:
/// - Text no wider than `max_width` columns.
///
/// Details:
/// - Width is measured with `unicode-width`, so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Convert an optional Unix timestamp (seconds) to a UTC date-time string.
///
/// Inputs:
/// - `ts`: Optional Unix timestamp
///
/// Output:
/// - `YYYY-MM-DD HH:MM:SS`; empty for `None`; the raw number when out of range.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    chrono::DateTime::from_timestamp(t, 0).map_or_else(
        || t.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}
