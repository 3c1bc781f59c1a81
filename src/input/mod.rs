use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Tab};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            if !event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                continue;
            }
            let ev = match event::read() {
                Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal read failed");
                    continue;
                }
            };
            if tx.blocking_send(Event::Input(ev)).is_err() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(_) if state.notice().is_some() => None,
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        },
        InputEvent::Key(k) if is_ctrl(&k, 'c') => Some(Action::Quit),
        InputEvent::Key(k) if state.notice().is_some() => handle_notice(k),
        InputEvent::Key(k) if state.show_help => handle_help(k),
        InputEvent::Key(k) => handle_form(k),
    }
}

fn is_ctrl(k: &KeyEvent, c: char) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char(c)
}

/// A notice swallows everything except its dismiss keys.
fn handle_notice(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
        _ => None,
    }
}

fn handle_help(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::F(1) | KeyCode::Esc | KeyCode::Enter => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_form(k: KeyEvent) -> Option<Action> {
    let alt = k.modifiers.contains(KeyModifiers::ALT);
    match k.code {
        KeyCode::Esc => Some(Action::Quit),

        // Form buttons
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::ClearForm),

        // Tabs
        KeyCode::Tab | KeyCode::Right => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Left => Some(Action::PrevTab),
        KeyCode::Char('1') if alt => Some(Action::SetTab(Tab::Lyrics)),
        KeyCode::Char('2') if alt => Some(Action::SetTab(Tab::Title)),
        KeyCode::Char('3') if alt => Some(Action::SetTab(Tab::Artist)),

        // Result area
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),

        KeyCode::F(1) => Some(Action::ToggleHelp),

        // Editing
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(_) if alt || k.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(Action::InputChar(c)),

        _ => None,
    }
}
