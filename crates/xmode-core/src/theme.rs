use std::fmt;

/// Presentation selection for the whole site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Class applied to the application root. The stylesheet keys its
    /// colour variables off this class, so it is the only place the theme
    /// reaches the presentation layer.
    pub fn root_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark-theme",
            ThemeMode::Light => "light-theme",
        }
    }

    /// Accessible label of the toggle button, describing what a click does
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Switch to light mode",
            ThemeMode::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

/// Theme held by the application. Starts dark on every load and is never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and return the new one
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        log::debug!("theme switched to {}", self.mode);
        self.mode
    }

    pub fn root_class(&self) -> &'static str {
        self.mode.root_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dark() {
        let state = ThemeState::new();
        assert_eq!(state.mode(), ThemeMode::Dark);
        assert_eq!(state.root_class(), "dark-theme");
    }

    #[test]
    fn test_toggle_returns_new_mode() {
        let mut state = ThemeState::new();
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state.mode(), ThemeMode::Light);
        assert_eq!(state.toggle(), ThemeMode::Dark);
    }

    #[test]
    fn test_root_class_tracks_mode_after_every_toggle() {
        let mut state = ThemeState::new();
        for _ in 0..7 {
            let mode = state.toggle();
            assert_eq!(state.root_class(), mode.root_class());
            assert_eq!(state.root_class() == "dark-theme", mode.is_dark());
        }
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = ThemeState::new();
        let initial = state;
        state.toggle();
        state.toggle();
        assert_eq!(state, initial);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(ThemeMode::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(ThemeMode::Light.toggle_label(), "Switch to dark mode");
    }
}
