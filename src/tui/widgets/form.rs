//! Search form - prompt, input box, buttons and result area for the active tab

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Form layout:
/// ```text
///  가사를 입력하세요
/// ╭ Query ───────────────────────╮
/// │ shine on▏                    │
/// ╰──────────────────────────────╯
///  [Enter] 검색   [Ctrl+U] 초기화
/// ╭ Results ─────────────────────╮
/// │ 제목: ..., 아티스트: ...      │
/// ╰──────────────────────────────╯
/// ```
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input
            Constraint::Length(1), // Buttons
            Constraint::Min(3),    // Results
        ])
        .split(area);

    let theme = get_theme();
    let prompt = Paragraph::new(Line::from(Span::styled(
        format!(" {}", state.tab.prompt()),
        Style::default().fg(theme.palette.fg_primary),
    )));
    frame.render_widget(prompt, rows[0]);

    render_input(frame, state, rows[1]);
    render_buttons(frame, rows[2]);
    render_results(frame, state, rows[3]);
}

fn render_input(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let form = state.active_form();
    let focused = state.notice().is_none() && !state.show_help;

    let text = if form.loading {
        format!("{} {}", form.input, theme.icons.search)
    } else {
        let cursor = if focused { "▏" } else { "" };
        format!("{}{}", form.input, cursor)
    };

    let p = Paragraph::new(Line::from(text))
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(theme.block(" Query ".to_string(), focused));
    frame.render_widget(p, area);
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let key = Style::default()
        .fg(theme.palette.bg_primary)
        .bg(theme.palette.accent_alt)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.palette.fg_primary);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(" Enter ", key),
        Span::styled(" 검색", label),
        Span::raw("   "),
        Span::styled(" Ctrl+U ", key),
        Span::styled(" 초기화", label),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_results(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let form = state.active_form();
    let block = theme.block(" Results ".to_string(), false);

    if form.loading {
        let loading = Paragraph::new(Line::from(format!("{} 검색 중...", theme.icons.search)))
            .style(Style::default().fg(theme.palette.fg_secondary))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let lines: Vec<Line> = form
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(theme.palette.fg_primary))))
        .collect();

    let p = Paragraph::new(lines)
        .block(block)
        .scroll((form.scroll_offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(p, area);

    // Scroll position indicator in top-right corner
    let visible = area.height.saturating_sub(2) as usize;
    if form.lines.len() > visible {
        let pos_text = format!(" {}/{} ", form.scroll_offset + 1, form.lines.len());
        let pos_len = pos_text.len() as u16;
        let pos_x = area.x + area.width.saturating_sub(pos_len + 1);
        if pos_x > area.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.palette.fg_secondary)),
                Rect::new(pos_x, area.y, pos_len, 1),
            );
        }
    }
}
