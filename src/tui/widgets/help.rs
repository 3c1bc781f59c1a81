//! Help overlay showing keybindings

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();

    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let content = vec![
        section_header("Form", &theme),
        keybind("Enter", "Search (검색)", &theme),
        keybind("Ctrl+U", "Clear input and results (초기화)", &theme),
        keybind("Backspace", "Delete last character", &theme),
        Line::default(),
        section_header("Tabs", &theme),
        keybind("Tab / Right", "Next tab", &theme),
        keybind("S-Tab / Left", "Previous tab", &theme),
        keybind("Alt+1-3", "Go to tab", &theme),
        Line::default(),
        section_header("Results", &theme),
        keybind("Up / Down", "Scroll", &theme),
        keybind("PgUp / PgDn", "Scroll a page", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("F1", "Toggle this help", &theme),
        keybind("Esc / Ctrl+C", "Quit", &theme),
    ];

    let p = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(theme.block(format!(" {} Keybinds ", theme.icons.help), true));
    frame.render_widget(p, popup);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
