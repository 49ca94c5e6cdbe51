use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, NotificationKind};
use crate::theme::theme;

/// Render the active toast in the bottom-right corner of `area`.
pub fn render_notification(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(n) = app.notification.as_ref() else {
        return;
    };
    let th = theme();
    let color = match n.kind {
        NotificationKind::Info => th.green,
        NotificationKind::Error => th.red,
    };
    let w = u16::try_from(n.message.width() + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let h = 3.min(area.height);
    let rect = Rect {
        x: area.right().saturating_sub(w),
        y: area.bottom().saturating_sub(h + 1),
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(Span::styled(n.message.clone(), Style::default().fg(th.text)))
            .style(Style::default().bg(th.mantle))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            ),
        rect,
    );
}
