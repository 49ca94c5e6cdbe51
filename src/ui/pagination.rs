use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, CellRect};
use crate::theme::theme;

/// Page numbers shown at once around the current page.
const VISIBLE_PAGES: usize = 9;

/// What: Choose which page numbers to show.
///
/// Inputs:
/// - `current`: Current page (may exceed `total` after the set shrank)
/// - `total`: Total number of pages
///
/// Output:
/// - Up to nine consecutive page numbers centred on `current` where possible.
#[must_use]
pub fn visible_pages(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let half = VISIBLE_PAGES / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(total.saturating_sub(VISIBLE_PAGES - 1).max(1));
    let end = (start + VISIBLE_PAGES - 1).min(total);
    (start..=end).collect()
}

/// Render `‹ Prev 1 2 [3] … Next ›` and record arrow and number rectangles.
pub fn render_pagination(f: &mut Frame, app: &mut AppState, area: Rect, total_pages: usize) {
    let th = theme();
    let current = app.listing.current_page;
    let mut spans: Vec<Span> = Vec::new();
    let mut x = area.x;
    let mut numbers: Vec<(usize, CellRect)> = Vec::new();

    let mut push = |spans: &mut Vec<Span<'static>>, text: String, style: Style| -> CellRect {
        let w = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let rect = (x, area.y, w, 1);
        x = x.saturating_add(w);
        spans.push(Span::styled(text, style));
        rect
    };

    let can_prev = current > 1;
    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(th.sapphire)
        } else {
            Style::default().fg(th.surface1)
        }
    };
    let prev = push(&mut spans, "‹ Prev ".to_string(), arrow_style(can_prev));
    for n in visible_pages(current, total_pages) {
        let style = if n == current {
            Style::default()
                .fg(th.base)
                .bg(th.mauve)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        let rect = push(&mut spans, format!(" {n} "), style);
        numbers.push((n, rect));
    }
    let can_next = current < total_pages;
    let next = push(&mut spans, " Next ›".to_string(), arrow_style(can_next));
    push(
        &mut spans,
        format!("   page {current} of {total_pages}"),
        Style::default().fg(th.subtext0),
    );

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
    app.prev_page_rect = Some(prev);
    app.next_page_rect = Some(next);
    app.page_number_rects = numbers;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Visible page numbers stay within range and follow the current page
    ///
    /// - Input: Small totals, middle of a long range, near the end, and past the end
    /// - Output: Windows of at most nine pages
    fn visible_pages_window() {
        assert_eq!(visible_pages(1, 3), vec![1, 2, 3]);
        assert_eq!(visible_pages(10, 20), (6..=14).collect::<Vec<_>>());
        assert_eq!(visible_pages(20, 20), (12..=20).collect::<Vec<_>>());
        assert_eq!(visible_pages(7, 3), vec![1, 2, 3]);
        assert!(visible_pages(1, 0).is_empty());
    }
}
