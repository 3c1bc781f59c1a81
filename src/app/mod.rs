pub mod actions;
pub mod events;
pub mod results;
pub mod state;

use crate::config::Config;
use crate::genius::GeniusClient;
use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use state::{AppState, Notice, Tab};
use tokio::sync::mpsc;

/// Lines moved per PageUp/PageDown.
const PAGE: usize = 10;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    genius: GeniusClient,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf, genius: GeniusClient) -> Self {
        let mut state = AppState::new();

        // Restore last tab if available
        if let Some(tab) = cfg.ui.last_tab.as_deref().and_then(Tab::from_key) {
            state.tab = tab;
        }

        Self {
            cfg,
            config_path,
            state,
            genius,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);
        input::spawn_input_task(tx, self.cfg.input.mouse);

        tui::draw(terminal, &self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        if action == Action::Submit && !self.state.active_form().input.trim().is_empty() {
                            // The request holds the loop; paint the searching state first.
                            self.state.active_form_mut().loading = true;
                            self.state.status = "검색 중...".into();
                            tui::draw(terminal, &self.state)?;
                        }
                        self.handle_action(action).await;
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.state)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.ui.last_tab = Some(self.state.tab.key().to_string());
        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!(error = %e, "failed to save config on quit");
        }
    }

    async fn handle_action(&mut self, action: Action) {
        match action {
            Action::Submit => self.submit().await,
            _ => self.reduce(action),
        }
    }

    /// Validate the active tab's input, run its search, and replace the result area.
    async fn submit(&mut self) {
        let tab = self.state.tab;
        let query = self.state.active_form().input.trim().to_string();
        if query.is_empty() {
            self.state.active_form_mut().loading = false;
            self.state.push_notice(Notice::warning(tab.blank_input_warning()));
            return;
        }

        tracing::info!(tab = tab.key(), query = %query, "search");

        let state = &mut self.state;
        let lines = results::search_lines(&self.genius, tab, &query, |e| {
            tracing::warn!(tab = tab.key(), error = %e, "search failed");
            state.push_notice(Notice::error(results::error_message(e)));
        })
        .await;

        self.state.status = format!("\"{query}\"");
        self.state.forms[tab.index()].set_lines(lines);
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextTab => self.state.tab = self.state.tab.next(),
            Action::PrevTab => self.state.tab = self.state.tab.prev(),
            Action::SetTab(tab) => self.state.tab = tab,
            Action::InputChar(c) => self.state.active_form_mut().input.push(c),
            Action::Backspace => {
                self.state.active_form_mut().input.pop();
            }
            Action::ClearForm => {
                self.state.active_form_mut().clear();
                self.state.status.clear();
            }
            Action::ScrollUp => self.state.active_form_mut().scroll_up(1),
            Action::ScrollDown => self.state.active_form_mut().scroll_down(1),
            Action::PageUp => self.state.active_form_mut().scroll_up(PAGE),
            Action::PageDown => self.state.active_form_mut().scroll_down(PAGE),
            Action::DismissNotice => self.state.dismiss_notice(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Submit | Action::Resize => {}
        }
    }
}
