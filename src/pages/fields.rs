//! Editable field list shared by the built-in pages.

use crate::dialog::PageError;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BODY_TEXT, FOCUS_ACCENT, HEADING_TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned integer within `min..=max`.
    Number { min: u32, max: u32 },
    Text,
    /// On/off switch stored as `"true"` / `"false"`.
    Flag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Name used in selectors (`"page/key"`).
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl Field {
    pub fn number(key: &'static str, label: &'static str, min: u32, max: u32, value: u32) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number { min, max },
            value: value.to_string(),
        }
    }

    pub fn text(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            value: value.into(),
        }
    }

    pub fn flag(key: &'static str, label: &'static str, value: bool) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Flag,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldList {
    fields: Vec<Field>,
    focused: usize,
}

impl FieldList {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focused: 0 }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn focused_key(&self) -> Option<&'static str> {
        self.fields.get(self.focused).map(|field| field.key)
    }

    /// Moves focus to `key`. Returns false for unknown keys.
    pub fn focus(&mut self, key: &str) -> bool {
        match self.fields.iter().position(|field| field.key == key) {
            Some(idx) => {
                self.focused = idx;
                true
            }
            None => false,
        }
    }

    /// Raw text of a field, empty for unknown keys.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).map(|field| field.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.key == key) {
            field.value = value.into();
        }
    }

    /// Parses a number field and checks its range.
    pub fn number(&self, key: &str) -> Result<u32, PageError> {
        let Some(field) = self.get(key) else {
            return Err(PageError::silent(key));
        };
        let (min, max) = match field.kind {
            FieldKind::Number { min, max } => (min, max),
            _ => (0, u32::MAX),
        };
        match field.value.trim().parse::<u32>() {
            Ok(n) if (min..=max).contains(&n) => Ok(n),
            _ => Err(PageError::new(
                key,
                format!("{} must be between {} and {}", field.label, min, max),
            )),
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        self.value(key) == "true"
    }

    fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Edits the focused field. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) || self.fields.is_empty() {
            return false;
        }

        match key.code {
            KeyCode::Up => {
                self.focused = if self.focused == 0 {
                    self.fields.len() - 1
                } else {
                    self.focused - 1
                };
                true
            }
            KeyCode::Down => {
                self.focused = (self.focused + 1) % self.fields.len();
                true
            }
            KeyCode::Backspace => {
                let field = &mut self.fields[self.focused];
                if field.kind == FieldKind::Flag {
                    return false;
                }
                field.value.pop();
                true
            }
            KeyCode::Char(ch) => {
                let field = &mut self.fields[self.focused];
                match field.kind {
                    FieldKind::Flag if ch == ' ' => {
                        let toggled = field.value != "true";
                        field.value = toggled.to_string();
                        true
                    }
                    FieldKind::Flag => false,
                    FieldKind::Number { .. } if !ch.is_ascii_digit() => false,
                    FieldKind::Number { .. } | FieldKind::Text => {
                        field.value.push(ch);
                        true
                    }
                }
            }
            _ => false,
        }
    }

    /// One line per field; the focused one is highlighted.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let label_width = self
            .fields
            .iter()
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0);

        self.fields
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let focused = idx == self.focused;
                let marker = if focused { "› " } else { "  " };
                let value = match field.kind {
                    FieldKind::Flag if field.value == "true" => "[x]".to_string(),
                    FieldKind::Flag => "[ ]".to_string(),
                    _ => field.value.clone(),
                };
                let value_style = if focused {
                    Style::default()
                        .fg(HEADING_TEXT)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(BODY_TEXT)
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(FOCUS_ACCENT)),
                    Span::styled(
                        format!("{:<width$}  ", field.label, width = label_width),
                        Style::default().fg(BODY_TEXT),
                    ),
                    Span::styled(value, value_style),
                ])
            })
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
