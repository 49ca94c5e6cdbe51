use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Render the search input (left) and the sort selector (right).
///
/// Positions the terminal cursor inside the input when it has focus and
/// records both rectangles for mouse hit-testing.
pub fn render_search_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(area);

    let focused = matches!(app.focus, Focus::Search);
    let border = if focused { th.mauve } else { th.surface1 };
    let mut spans = vec![Span::styled(
        "> ",
        Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
    )];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(
            "Search products…",
            Style::default().fg(th.overlay1),
        ));
    } else {
        spans.push(Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ));
    }
    let title = if app.listing.query.is_empty() {
        "Search".to_string()
    } else {
        format!("Search: \"{}\"", app.listing.query)
    };
    let input = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(input, cols[0]);
    app.search_rect = Some((cols[0].x, cols[0].y, cols[0].width, cols[0].height));

    if focused {
        let before: String = app.input.chars().take(app.caret).collect();
        let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let x = cols[0]
            .x
            .saturating_add(3)
            .saturating_add(offset)
            .min(cols[0].right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, cols[0].y.saturating_add(1)));
    }

    let sort = Paragraph::new(Line::from(vec![
        Span::styled(
            app.listing.sort_mode.label(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▾", Style::default().fg(th.overlay1)),
    ]))
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .title(Span::styled("Sort by price", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(sort, cols[1]);
    app.sort_button_rect = Some((cols[1].x, cols[1].y, cols[1].width, cols[1].height));
}
