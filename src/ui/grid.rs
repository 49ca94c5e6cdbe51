use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::logic::PAGE_SIZE;
use crate::state::{AppState, Focus, Product};
use crate::theme::theme;
use crate::util::{format_discount, format_price, truncate_to_width};

/// Tiles per grid row.
const COLUMNS: usize = 2;

/// What: Build the text lines of one product tile.
///
/// Inputs:
/// - `p`: Product to show
/// - `width`: Inner tile width in columns
///
/// Output:
/// - Name line, price line and a description/category line.
///
/// Details:
/// - Discounted products show the struck-through list price, the final price
///   and a `-x% off` badge.
pub fn tile_lines(p: &Product, width: usize) -> Vec<Line<'static>> {
    let th = theme();
    let name = Line::from(Span::styled(
        truncate_to_width(&p.name, width),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    ));
    let price = if p.is_discounted() {
        Line::from(vec![
            Span::styled(
                format_price(p.price),
                Style::default()
                    .fg(th.overlay1)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
            Span::raw(" "),
            Span::styled(
                format_price(p.final_price()),
                Style::default().fg(th.green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format_discount(p.price_drop), Style::default().fg(th.red)),
        ])
    } else {
        Line::from(Span::styled(
            format_price(p.price),
            Style::default().fg(th.text),
        ))
    };
    let detail = if p.description.is_empty() {
        p.category.clone()
    } else {
        p.description.clone()
    };
    let mut lines = vec![name, price];
    if !detail.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&detail, width),
            Style::default().fg(th.subtext0),
        )));
    }
    lines
}

/// Render the current page window as a grid of tiles and record each tile
/// rectangle for mouse hit-testing.
pub fn render_grid(f: &mut Frame, app: &mut AppState, area: Rect, page: &[Product]) {
    let th = theme();
    app.tile_rects.clear();
    let rows = PAGE_SIZE.div_ceil(COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, u32::try_from(rows).unwrap_or(1)); rows])
        .split(area);
    let grid_focused = matches!(app.focus, Focus::Browse);

    for (i, product) in page.iter().enumerate() {
        let Some(row_area) = row_areas.get(i / COLUMNS) else {
            break;
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row_area);
        let cell = cols[i % COLUMNS];
        let selected = grid_focused && i == app.selected;
        let border = if selected { th.lavender } else { th.surface1 };
        let title_style = if selected {
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        let inner_w = usize::from(cell.width.saturating_sub(2));
        let tile = Paragraph::new(tile_lines(product, inner_w))
            .style(Style::default().bg(th.base))
            .block(
                Block::default()
                    .title(Span::styled(
                        if product.on_sale == "yes" { " sale " } else { "" },
                        title_style,
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(tile, cell);
        app.tile_rects
            .push((cell.x, cell.y, cell.width, cell.height));
    }
}
