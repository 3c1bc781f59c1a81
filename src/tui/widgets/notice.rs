//! Modal notice box drawn over the form

use crate::app::state::{Notice, NoticeKind};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;

pub fn render(frame: &mut Frame, notice: &Notice, area: Rect) {
    let theme = get_theme();
    let icon = match notice.kind {
        NoticeKind::Warning => theme.icons.warning,
        NoticeKind::Error => theme.icons.error,
    };

    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);

    let body = vec![
        Line::default(),
        Line::from(Span::styled(
            notice.message.as_str(),
            Style::default().fg(theme.palette.fg_primary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(theme.palette.accent)
                .bg(theme.palette.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let p = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(theme.block(format!(" {} {} ", icon, notice.title()), true));
    frame.render_widget(p, popup);
}
