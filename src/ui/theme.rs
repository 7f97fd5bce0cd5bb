use ratatui::style::Color;

pub const DIALOG_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const HEADING_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xc8, 0xc8, 0xc8);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SEPARATOR: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FOCUS_ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
