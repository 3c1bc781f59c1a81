use super::state::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    SetTab(Tab),

    InputChar(char),
    Backspace,
    Submit,
    ClearForm,

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    DismissNotice,
    ToggleHelp,

    Resize,
}
