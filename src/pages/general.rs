use crate::config::{ConfigStore, GeneralConfig};
use crate::dialog::{ConfigPage, PageError};
use crate::pages::fields::{Field, FieldList};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::warn;

pub struct GeneralPage {
    store: ConfigStore,
    fields: FieldList,
}

impl GeneralPage {
    pub const TITLE: &'static str = "General";

    pub fn new(store: ConfigStore) -> Self {
        let general = store.get().general;
        let fields = FieldList::new(vec![
            Field::number(
                "symbol_length",
                "Maximum symbol length",
                1,
                1000,
                general.max_symbol_length,
            ),
            Field::number(
                "symbol_count",
                "Symbols per graph label",
                1,
                50,
                general.max_symbol_count,
            ),
            Field::number(
                "list_count",
                "Maximum list entries",
                1,
                500,
                general.max_list_count,
            ),
            Field::number(
                "precision",
                "Percentage precision",
                1,
                5,
                general.percent_precision,
            ),
            Field::number(
                "context_lines",
                "Source context lines",
                0,
                50,
                general.context_lines,
            ),
            Field::number("tab_width", "Tab width", 1, 16, general.tab_width),
            Field::flag("cycles", "Detect recursive cycles", general.detect_cycles),
        ]);
        Self { store, fields }
    }

    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldList {
        &mut self.fields
    }

    fn parse(&self) -> Result<GeneralConfig, PageError> {
        Ok(GeneralConfig {
            max_symbol_length: self.fields.number("symbol_length")?,
            max_symbol_count: self.fields.number("symbol_count")?,
            max_list_count: self.fields.number("list_count")?,
            percent_precision: self.fields.number("precision")?,
            context_lines: self.fields.number("context_lines")?,
            tab_width: self.fields.number("tab_width")?,
            detect_cycles: self.fields.flag("cycles"),
        })
    }
}

impl ConfigPage for GeneralPage {
    fn title(&self) -> &str {
        Self::TITLE
    }

    fn long_title(&self) -> &str {
        "General Settings"
    }

    fn validate(&self) -> Result<(), PageError> {
        self.parse().map(|_| ())
    }

    fn commit(&mut self) {
        match self.parse() {
            Ok(general) => self.store.update(|config| config.general = general),
            Err(err) => warn!(page = Self::TITLE, error = %err, "skipping commit of invalid page"),
        }
    }

    fn activate(&mut self, field: &str) {
        self.fields.focus(field);
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        self.fields.render(frame, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.fields.handle_key(key)
    }
}
