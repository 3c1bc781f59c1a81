//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{form, help, notice, tabs};

/// Main layout structure:
/// ┌──────────────────────────────────────────────┐
/// │ [가사로 노래 검색]  [노래 제목으로 검색]  [...] │
/// ├──────────────────────────────────────────────┤
/// │  prompt / query / buttons / results          │
/// │                                              │
/// ├──────────────────────────────────────────────┤
/// │ status                              F1 help  │
/// └──────────────────────────────────────────────┘
/// Help and notices are drawn on top, notice last.
pub fn render(frame: &mut Frame, state: &AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(8),    // Form
            Constraint::Length(1), // Status line
        ])
        .split(root);

    tabs::render(frame, state, rows[0]);
    form::render(frame, state, rows[1]);
    render_status(frame, state, rows[2]);

    if state.show_help {
        help::render(frame, root);
    }
    if let Some(n) = state.notice() {
        notice::render(frame, n, root);
    }
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);

    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {}", state.status),
        Style::default().fg(theme.palette.fg_secondary),
    )));
    frame.render_widget(status, cols[0]);

    let hint = Paragraph::new(Line::from(Span::styled(
        format!("F1 help {} Esc quit ", theme.icons.bullet),
        Style::default().fg(theme.palette.fg_secondary),
    )))
    .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(hint, cols[1]);
}
