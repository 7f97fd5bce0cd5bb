use crate::config::ConfigStore;
use crate::dialog::{ConfigPage, PageError};
use crate::pages::fields::{Field, FieldList};
use crate::ui::theme::HINT_TEXT;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use std::path::PathBuf;
use tracing::warn;

/// Separator between folders in the `dirs` field.
const DIR_SEPARATOR: &str = ":";

pub struct SourcePage {
    store: ConfigStore,
    fields: FieldList,
}

impl SourcePage {
    pub const TITLE: &'static str = "Source";

    pub fn new(store: ConfigStore) -> Self {
        let dirs = store
            .get()
            .source
            .dirs
            .iter()
            .map(|dir| dir.display().to_string())
            .collect::<Vec<_>>()
            .join(DIR_SEPARATOR);
        let fields = FieldList::new(vec![Field::text("dirs", "Source folders", dirs)]);
        Self { store, fields }
    }

    pub fn fields_mut(&mut self) -> &mut FieldList {
        &mut self.fields
    }

    fn parse(&self) -> Result<Vec<PathBuf>, PageError> {
        self.fields
            .value("dirs")
            .split(DIR_SEPARATOR)
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(|dir| {
                let path = PathBuf::from(dir);
                if path.is_dir() {
                    Ok(path)
                } else {
                    Err(PageError::new(
                        "dirs",
                        format!("Folder '{}' does not exist", dir),
                    ))
                }
            })
            .collect()
    }
}

impl ConfigPage for SourcePage {
    fn title(&self) -> &str {
        Self::TITLE
    }

    fn long_title(&self) -> &str {
        "Source Folders"
    }

    fn validate(&self) -> Result<(), PageError> {
        self.parse().map(|_| ())
    }

    fn commit(&mut self) {
        match self.parse() {
            Ok(dirs) => self.store.update(|config| config.source.dirs = dirs),
            Err(err) => warn!(page = Self::TITLE, error = %err, "skipping commit of invalid page"),
        }
    }

    fn activate(&mut self, field: &str) {
        self.fields.focus(field);
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = self.fields.lines();
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(
                "  Folders searched for annotated sources, separated by '{}'.",
                DIR_SEPARATOR
            ),
            Style::default().fg(HINT_TEXT),
        ));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.fields.handle_key(key)
    }
}
