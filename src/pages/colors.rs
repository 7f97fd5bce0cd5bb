use crate::config::{ColorConfig, ConfigStore};
use crate::dialog::{ConfigPage, PageError};
use crate::pages::fields::{Field, FieldList};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::warn;

const GROUPS: [&str; 4] = ["object", "class", "file", "function"];

pub struct ColorsPage {
    store: ConfigStore,
    fields: FieldList,
}

impl ColorsPage {
    pub const TITLE: &'static str = "Colors";

    pub fn new(store: ConfigStore) -> Self {
        let colors = store.get().colors;
        let fields = FieldList::new(vec![
            Field::text("object", "ELF object", colors.object),
            Field::text("class", "C++ class", colors.class),
            Field::text("file", "Source file", colors.file),
            Field::text("function", "Function", colors.function),
        ]);
        Self { store, fields }
    }

    pub fn fields_mut(&mut self) -> &mut FieldList {
        &mut self.fields
    }

    fn parse(&self) -> Result<ColorConfig, PageError> {
        for key in GROUPS {
            let value = self.fields.value(key);
            if parse_hex_color(value).is_none() {
                return Err(PageError::new(
                    key,
                    format!("'{}' is not a color, use #rrggbb", value),
                ));
            }
        }
        Ok(ColorConfig {
            object: self.fields.value("object").to_string(),
            class: self.fields.value("class").to_string(),
            file: self.fields.value("file").to_string(),
            function: self.fields.value("function").to_string(),
        })
    }
}

/// Parses `#rrggbb`.
pub(crate) fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl ConfigPage for ColorsPage {
    fn title(&self) -> &str {
        Self::TITLE
    }

    fn long_title(&self) -> &str {
        "Colors for Cost Groups"
    }

    fn validate(&self) -> Result<(), PageError> {
        self.parse().map(|_| ())
    }

    fn commit(&mut self) {
        match self.parse() {
            Ok(colors) => self.store.update(|config| config.colors = colors),
            Err(err) => warn!(page = Self::TITLE, error = %err, "skipping commit of invalid page"),
        }
    }

    fn activate(&mut self, field: &str) {
        self.fields.focus(field);
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = self.fields.lines();
        for (line, field) in lines.iter_mut().zip(self.fields.fields()) {
            if let Some(color) = parse_hex_color(&field.value) {
                line.spans.push(Span::raw("  "));
                line.spans.push(Span::styled("██", Style::default().fg(color)));
            }
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.fields.handle_key(key)
    }
}
