use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, EmptyState};
use crate::theme::theme;

/// Refresh button label inside the empty panel.
const REFRESH_LABEL: &str = "[ Refresh ]";

/// What: Heading and hint for an empty-state reason.
///
/// Inputs:
/// - `state`: Why nothing is displayed
///
/// Output:
/// - `(heading, hint)` pair.
#[must_use]
pub const fn empty_message(state: EmptyState) -> (&'static str, &'static str) {
    match state {
        EmptyState::LoadFailed => (
            "No products could be loaded",
            "The catalog service is unreachable. Check your connection and refresh.",
        ),
        EmptyState::Empty => (
            "The catalog is empty",
            "The service returned no products yet.",
        ),
        EmptyState::NoMatches => (
            "No products match your search",
            "Try a different name, or clear the search to see everything.",
        ),
        EmptyState::NoDiscounts => (
            "No discounted products",
            "Nothing here is on sale right now. Show all products instead.",
        ),
    }
}

/// Render the empty/offline panel with a refresh button, recording the
/// button rectangle for mouse hit-testing.
pub fn render_empty(f: &mut Frame, app: &mut AppState, area: Rect, state: EmptyState) {
    let th = theme();
    let (heading, hint) = empty_message(state);
    let heading_color = if state == EmptyState::LoadFailed {
        th.red
    } else {
        th.yellow
    };
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().fg(heading_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(th.subtext0))),
    ];
    if let Some(err) = app.listing.load_error.as_deref()
        && state == EmptyState::LoadFailed
    {
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(th.overlay1),
        )));
    }
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(panel, area);

    app.refresh_button_rect = None;
    if area.height < 4 {
        return;
    }
    let inner_w = area.width.saturating_sub(2);
    let label_w = u16::try_from(REFRESH_LABEL.width())
        .unwrap_or(u16::MAX)
        .min(inner_w);
    let button = Rect {
        x: area.x + 1 + inner_w.saturating_sub(label_w) / 2,
        y: area.bottom().saturating_sub(2),
        width: label_w,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            REFRESH_LABEL,
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )),
        button,
    );
    app.refresh_button_rect = Some((button.x, button.y, button.width, button.height));
}
