//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    // Tabs
    pub lyrics: &'static str,
    pub music: &'static str,
    pub artist: &'static str,

    pub search: &'static str,
    pub help: &'static str,

    // Notices
    pub warning: &'static str,
    pub error: &'static str,

    pub bullet: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            lyrics: "\u{f15c}",  // nf-fa-file_text_o
            music: "\u{f001}",   // nf-fa-music
            artist: "\u{f007}",  // nf-fa-user
            search: "\u{f002}",  // nf-fa-search
            help: "\u{f059}",    // nf-fa-question_circle
            warning: "\u{f071}", // nf-fa-warning
            error: "\u{f00d}",   // nf-fa-times
            bullet: "•",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
