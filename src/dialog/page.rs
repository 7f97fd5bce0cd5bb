use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use thiserror::Error;

/// Validation failure reported by a page.
///
/// `field` names the offending setting so the dialog can navigate back to
/// it. An empty `message` still navigates but shows no banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PageError {
    pub message: String,
    pub field: String,
}

impl PageError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }

    /// Failure that only moves focus to `field`.
    pub fn silent(field: impl Into<String>) -> Self {
        Self::new(field, String::new())
    }
}

/// A settings section shown in the dialog.
pub trait ConfigPage {
    /// Short unique name; navigator label and lookup key.
    fn title(&self) -> &str;

    /// Heading shown while the page is active.
    fn long_title(&self) -> &str;

    fn validate(&self) -> Result<(), PageError>;

    /// Apply the edited values. Only called after every page validated.
    fn commit(&mut self);

    /// Focus `field` if the page knows it.
    fn activate(&mut self, field: &str);

    fn render(&self, frame: &mut Frame, area: Rect);

    /// Returns true if the key was consumed.
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}
