//! Panel visibility state
//!
//! The chat panel and the floating launcher are mutually exclusive:
//! exactly one of the two is displayed at any time. There are no other
//! visibility states (no minimized/maximized distinction).

/// Visibility of the chat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Panel hidden, launcher visible.
    #[default]
    Closed,
    /// Panel visible, launcher hidden.
    Open,
}

impl PanelState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        }
    }

    /// CSS `display` value for the panel element.
    pub fn panel_display(self) -> &'static str {
        match self {
            PanelState::Open => "flex",
            PanelState::Closed => "none",
        }
    }

    /// CSS `display` value for the floating launcher.
    pub fn launcher_display(self) -> &'static str {
        match self {
            PanelState::Open => "none",
            PanelState::Closed => "flex",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        assert_eq!(PanelState::default(), PanelState::Closed);
    }

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(PanelState::Closed.toggled(), PanelState::Open);
        assert_eq!(PanelState::Open.toggled(), PanelState::Closed);
        assert_eq!(PanelState::Closed.toggled().toggled(), PanelState::Closed);
    }

    #[test]
    fn test_panel_and_launcher_are_mutually_exclusive() {
        for state in [PanelState::Open, PanelState::Closed] {
            let shown = [state.panel_display(), state.launcher_display()];
            assert!(shown.contains(&"flex"));
            assert!(shown.contains(&"none"));
        }
    }
}
