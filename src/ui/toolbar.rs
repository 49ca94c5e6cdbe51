use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::theme;

/// Label of the discount toggle button for the current filter state.
#[must_use]
pub const fn discount_button_label(active: bool) -> &'static str {
    if active {
        "All Products"
    } else {
        "Discounted Products"
    }
}

/// Render the discount toolbar: live discounted count, toggle button and a
/// loading indicator. Records the button rectangle for mouse hit-testing.
pub fn render_toolbar(f: &mut Frame, app: &mut AppState, area: Rect, displayed_len: usize) {
    let th = theme();
    let count = format!("Discounted : {}", app.listing.discounted_count);
    let button = format!("[ {} ]", discount_button_label(app.listing.discount_filter_active));
    let button_style = if app.listing.discount_filter_active {
        Style::default().fg(th.base).bg(th.green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.green).add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(count.clone(), Style::default().fg(th.yellow)),
        Span::raw("  "),
        Span::styled(button.clone(), button_style),
        Span::styled(
            format!("  {displayed_len} shown"),
            Style::default().fg(th.subtext0),
        ),
    ];
    if app.listing.loading {
        spans.push(Span::styled("  loading…", Style::default().fg(th.sapphire)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );

    let button_x = area
        .x
        .saturating_add(u16::try_from(1 + count.width() + 2).unwrap_or(u16::MAX));
    let button_w = u16::try_from(button.width()).unwrap_or(u16::MAX);
    app.discount_button_rect = Some((button_x, area.y, button_w.min(area.width), 1));
}
