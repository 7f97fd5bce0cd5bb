//! Shared test utilities: a page that records every call made to it.

#![allow(dead_code)]

use cgview::dialog::{ConfigDialog, ConfigPage, PageError};
use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::Arc;

/// Calls in the order they happened, e.g. `"B.activate(x)"`, `"A.commit"`.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Validation result a test can change after the page was handed over.
pub type FailureSwitch = Arc<Mutex<Option<PageError>>>;

pub struct RecordingPage {
    title: String,
    long_title: String,
    failure: FailureSwitch,
    log: CallLog,
}

impl RecordingPage {
    pub fn new(title: &str, log: &CallLog) -> Self {
        Self {
            title: title.to_string(),
            long_title: format!("{} Settings", title),
            failure: Arc::new(Mutex::new(None)),
            log: Arc::clone(log),
        }
    }

    pub fn failing(self, field: &str, message: &str) -> Self {
        *self.failure.lock() = Some(PageError::new(field, message));
        self
    }

    pub fn failure_switch(&self) -> FailureSwitch {
        Arc::clone(&self.failure)
    }

    fn record(&self, call: String) {
        self.log.lock().push(call);
    }
}

impl ConfigPage for RecordingPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn long_title(&self) -> &str {
        &self.long_title
    }

    fn validate(&self) -> Result<(), PageError> {
        self.record(format!("{}.validate", self.title));
        match &*self.failure.lock() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn commit(&mut self) {
        self.record(format!("{}.commit", self.title));
    }

    fn activate(&mut self, field: &str) {
        self.record(format!("{}.activate({})", self.title, field));
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.long_title.clone()), area);
    }
}

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Dialog over pages titled `titles`, none of which fail validation.
pub fn dialog_with(titles: &[&str], selector: &str, log: &CallLog) -> ConfigDialog {
    let pages = titles
        .iter()
        .map(|title| Box::new(RecordingPage::new(title, log)) as Box<dyn ConfigPage>)
        .collect();
    ConfigDialog::new(pages, selector)
}

/// Entries of `log` containing `pattern`, e.g. all `".commit"` calls.
pub fn calls(log: &CallLog, pattern: &str) -> Vec<String> {
    log.lock()
        .iter()
        .filter(|call| call.contains(pattern))
        .cloned()
        .collect()
}
