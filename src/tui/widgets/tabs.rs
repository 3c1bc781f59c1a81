//! Tab bar - one bracketed label per search mode

use crate::app::state::{AppState, Tab};
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn tab_icon(tab: Tab, theme: &Theme) -> &'static str {
    match tab {
        Tab::Lyrics => theme.icons.lyrics,
        Tab::Title => theme.icons.music,
        Tab::Artist => theme.icons.artist,
    }
}

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let tab_spans: Vec<Span> = Tab::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let is_selected = state.tab == *tab;
            let style = if is_selected {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };

            let mut spans = vec![
                Span::styled("[", style),
                Span::styled(format!("{} {}", tab_icon(*tab, &theme), tab.label()), style),
                Span::styled("]", style),
            ];

            if i < Tab::ALL.len() - 1 {
                spans.push(Span::raw("  "));
            }
            spans
        })
        .collect();

    let block = theme.block(format!(" {} Genius ", theme.icons.search), false);
    frame.render_widget(Paragraph::new(Line::from(tab_spans)).block(block), area);
}
