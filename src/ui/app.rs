use crate::dialog::ConfigDialog;
use std::time::Instant;

/// Which half of the dialog receives arrow keys and text input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Navigator,
    Page,
}

pub struct App {
    dialog: ConfigDialog,
    focus: Focus,
}

impl App {
    pub fn new(dialog: ConfigDialog) -> Self {
        Self {
            dialog,
            focus: Focus::Navigator,
        }
    }

    pub fn dialog(&self) -> &ConfigDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut ConfigDialog {
        &mut self.dialog
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Navigator => Focus::Page,
            Focus::Page => Focus::Navigator,
        };
    }

    pub fn should_quit(&self) -> bool {
        !self.dialog.is_open()
    }

    /// Confirms the dialog. On a validation failure the dialog has already
    /// navigated to the offending field, so the page takes focus.
    pub fn confirm(&mut self, now: Instant) {
        self.dialog.confirm(now);
        if self.dialog.is_open() {
            self.focus = Focus::Page;
        }
    }

    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dialog.on_tick(now);
    }
}
