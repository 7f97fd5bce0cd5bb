use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the page list on the left.
pub const NAVIGATOR_WIDTH: u16 = 18;

/// Areas inside the dialog border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRegions {
    pub navigator: Rect,
    pub heading: Rect,
    pub separator: Rect,
    pub error: Rect,
    pub page: Rect,
    pub hints: Rect,
}

pub fn dialog_regions(inner: Rect) -> DialogRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(NAVIGATOR_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(columns[2]);

    DialogRegions {
        navigator: columns[0],
        heading: content[0],
        separator: content[1],
        error: content[2],
        page: content[3],
        hints: rows[1],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
