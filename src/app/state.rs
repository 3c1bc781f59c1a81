use std::collections::VecDeque;

/// One tab per search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Lyrics,
    Title,
    Artist,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Lyrics, Tab::Title, Tab::Artist];

    pub fn next(self) -> Self {
        match self {
            Tab::Lyrics => Tab::Title,
            Tab::Title => Tab::Artist,
            Tab::Artist => Tab::Lyrics,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Lyrics => Tab::Artist,
            Tab::Title => Tab::Lyrics,
            Tab::Artist => Tab::Title,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Lyrics => 0,
            Tab::Title => 1,
            Tab::Artist => 2,
        }
    }

    /// Stable name used in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Lyrics => "lyrics",
            Tab::Title => "title",
            Tab::Artist => "artist",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Tab::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Lyrics => "가사로 노래 검색",
            Tab::Title => "노래 제목으로 검색",
            Tab::Artist => "아티스트로 검색",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Tab::Lyrics => "가사를 입력하세요",
            Tab::Title => "노래 제목을 입력하세요",
            Tab::Artist => "아티스트 이름을 입력하세요",
        }
    }

    pub fn blank_input_warning(self) -> &'static str {
        match self {
            Tab::Lyrics => "유효한 가사를 입력하세요.",
            Tab::Title => "유효한 노래 제목을 입력하세요.",
            Tab::Artist => "유효한 아티스트 이름을 입력하세요.",
        }
    }

    pub fn not_found(self) -> &'static str {
        match self {
            Tab::Lyrics => "가사에 해당하는 노래를 찾지 못했습니다.",
            Tab::Title => "해당 제목의 노래를 찾지 못했습니다.",
            Tab::Artist => "아티스트를 찾지 못했습니다.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

/// Modal message box; blocks other input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Warning => "Warning",
            NoticeKind::Error => "Error",
        }
    }
}

/// Per-tab form: input line plus the rendered result area.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: String,
    pub lines: Vec<String>,
    pub scroll_offset: usize,
    pub loading: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.scroll_offset = 0;
        self.loading = false;
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(by);
    }

    pub fn scroll_down(&mut self, by: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + by).min(max);
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.lines.clear();
        self.scroll_offset = 0;
        self.loading = false;
    }
}

pub struct AppState {
    pub should_quit: bool,

    pub tab: Tab,
    pub forms: [FormState; 3],

    pub notices: VecDeque<Notice>,
    pub show_help: bool,

    // Status message (for debugging/info)
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tab: Tab::Lyrics,
            forms: [FormState::new(), FormState::new(), FormState::new()],
            notices: VecDeque::new(),
            show_help: false,
            status: String::new(),
        }
    }

    pub fn form(&self, tab: Tab) -> &FormState {
        &self.forms[tab.index()]
    }

    pub fn active_form(&self) -> &FormState {
        self.form(self.tab)
    }

    pub fn active_form_mut(&mut self) -> &mut FormState {
        &mut self.forms[self.tab.index()]
    }

    /// Notice currently on screen, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
            assert_eq!(Tab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(Tab::Artist.next(), Tab::Lyrics);
        assert_eq!(Tab::from_key("history"), None);
    }

    #[test]
    fn test_clear_resets_form() {
        let mut form = FormState::new();
        form.input.push_str("pink floyd");
        form.set_lines(vec!["a".into(), "b".into(), "c".into()]);
        form.scroll_down(2);
        form.loading = true;

        form.clear();
        assert!(form.input.is_empty());
        assert!(form.lines.is_empty());
        assert_eq!(form.scroll_offset, 0);
        assert!(!form.loading);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut form = FormState::new();
        form.scroll_down(3);
        assert_eq!(form.scroll_offset, 0);
        form.set_lines((0..5).map(|i| i.to_string()).collect());
        form.scroll_down(10);
        assert_eq!(form.scroll_offset, 4);
        form.scroll_up(10);
        assert_eq!(form.scroll_offset, 0);
    }

    #[test]
    fn test_notices_queue_in_order() {
        let mut state = AppState::new();
        state.push_notice(Notice::error("first"));
        state.push_notice(Notice::warning("second"));
        assert_eq!(state.notice().map(|n| n.message.as_str()), Some("first"));
        state.dismiss_notice();
        assert_eq!(state.notice().map(|n| n.kind), Some(NoticeKind::Warning));
        state.dismiss_notice();
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_forms_are_independent() {
        let mut state = AppState::new();
        state.active_form_mut().input.push_str("shine on");
        state.tab = Tab::Artist;
        assert!(state.active_form().input.is_empty());
        assert_eq!(state.form(Tab::Lyrics).input, "shine on");
    }
}
