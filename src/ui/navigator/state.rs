use crate::ui::mvi::UiState;

/// Page list shown on the left side of the dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigatorState {
    pub rows: Vec<String>,
    /// `None` only while there are no rows.
    pub current: Option<usize>,
}

impl UiState for NavigatorState {}

impl NavigatorState {
    pub fn current_title(&self) -> Option<&str> {
        self.current
            .and_then(|row| self.rows.get(row))
            .map(String::as_str)
    }

    pub fn row_of(&self, title: &str) -> Option<usize> {
        self.rows.iter().position(|row| row == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let state = NavigatorState::default();
        assert!(state.rows.is_empty());
        assert_eq!(state.current_title(), None);
    }

    #[test]
    fn row_of_matches_exact_title() {
        let state = NavigatorState {
            rows: vec!["General".into(), "Source".into()],
            current: Some(0),
        };
        assert_eq!(state.row_of("Source"), Some(1));
        assert_eq!(state.row_of("source"), None);
    }
}
