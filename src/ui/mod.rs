//! Rendering for the storefront listing.
//!
//! [`ui`] derives the page window from the listing state once per frame and
//! hands each area to its renderer. Renderers record the rectangles they draw
//! so mouse handling can hit-test against the last frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::logic::{PAGE_SIZE, derive_view};
use crate::state::{AppState, Focus, Product};
use crate::theme::theme;

mod empty;
mod grid;
mod notification;
mod pagination;
mod search_bar;
mod toolbar;

pub use empty::empty_message;
pub use grid::tile_lines;
pub use pagination::visible_pages;
pub use toolbar::discount_button_label;

/// Render one full frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let view = derive_view(&app.listing);
    let page: Vec<Product> = view.page_items.iter().map(|p| (*p).clone()).collect();
    let displayed_len = view.displayed_len;
    let total_pages = view.total_pages;
    let empty_state = view.empty_state;
    let show_pagination = displayed_len > PAGE_SIZE && empty_state.is_none();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(u16::from(show_pagination)),
            Constraint::Length(1),
        ])
        .split(area);

    search_bar::render_search_bar(f, app, chunks[0]);
    toolbar::render_toolbar(f, app, chunks[1], displayed_len);

    app.tile_rects.clear();
    app.refresh_button_rect = None;
    if let Some(state) = empty_state {
        empty::render_empty(f, app, chunks[2], state);
    } else if !app.listing.loaded {
        render_loading(f, chunks[2]);
    } else {
        grid::render_grid(f, app, chunks[2], &page);
    }

    if show_pagination {
        pagination::render_pagination(f, app, chunks[3], total_pages);
    } else {
        app.prev_page_rect = None;
        app.next_page_rect = None;
        app.page_number_rects.clear();
    }

    render_footer(f, app, chunks[4]);
    notification::render_notification(f, app, area);
}

fn render_loading(f: &mut Frame, area: ratatui::prelude::Rect) {
    let th = theme();
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Loading products…",
            Style::default().fg(th.sapphire),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        ),
        area,
    );
}

fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let hints = match app.focus {
        Focus::Search => "Enter search  Esc clear  Tab grid  F5 refresh  Shift+Tab sort  Ctrl+C quit",
        Focus::Browse => {
            "←/→ page  1-9 jump  ↑/↓ select  s sort  d discounts  r refresh  / search  q quit"
        }
    };
    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(th.overlay1)))
            .style(Style::default().bg(th.mantle)),
        area,
    );
}
