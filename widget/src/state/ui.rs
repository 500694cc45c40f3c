//! Local UI chrome state (open/closed, active tab, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the panel state machines
//! (`chat`, `quiz`, `faq`) so switching tabs or themes can never disturb a
//! transcript or a quiz in progress.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Panel tabs. The quiz tab is the landing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    Chat,
    #[default]
    Quiz,
    Faq,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Chat, Tab::Quiz, Tab::Faq];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Quiz => "Quiz",
            Self::Faq => "FAQ",
        }
    }
}

/// Color scheme of the widget (never of the host page).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Shell chrome state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_open: bool,
    pub active_tab: Tab,
    pub theme: Theme,
}

impl UiState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Flip `is_open`. Returns `true` on the closed → open transition.
    ///
    /// Opening lands on the quiz tab unless a quiz session is being resumed,
    /// in which case the current tab is kept.
    pub fn toggle_open(&mut self, resuming_quiz: bool) -> bool {
        self.is_open = !self.is_open;
        if self.is_open && !resuming_quiz {
            self.active_tab = Tab::Quiz;
        }
        self.is_open
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.theme
    }
}
