//! Theme
//!
//! Light/dark flag. Only affects presentation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label for the toggle button: names the mode it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Toggle Night Mode",
            Theme::Dark => "Toggle Day Mode",
        }
    }
}
