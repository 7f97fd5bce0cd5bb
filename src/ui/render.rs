use crate::ui::app::{App, Focus};
use crate::ui::layout::{centered_rect, dialog_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BODY_TEXT, DIALOG_BORDER, FOCUS_ACCENT, HEADING_TEXT, HINT_TEXT, SEPARATOR,
    STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const DIALOG_TITLE: &str = " Configure cgview ";
const KEY_HINTS: &str = "Enter OK · Esc Cancel · Tab switch focus · ↑↓ move";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(DIALOG_TITLE)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let regions = dialog_regions(inner);
    let dialog = app.dialog();

    render_navigator(frame, regions.navigator, app);

    frame.render_widget(
        Paragraph::new(Line::styled(
            dialog.heading().to_string(),
            Style::default()
                .fg(HEADING_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        regions.heading,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "─".repeat(regions.separator.width as usize),
            Style::default().fg(SEPARATOR),
        )),
        regions.separator,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                dialog.error_message().to_string(),
                Style::default().fg(STATUS_ERROR),
            ),
        ])),
        regions.error,
    );

    if let Some(page) = dialog.current_page() {
        page.render(frame, regions.page);
    }

    frame.render_widget(
        Paragraph::new(Line::styled(KEY_HINTS, Style::default().fg(HINT_TEXT)))
            .alignment(Alignment::Center),
        regions.hints,
    );
}

fn render_navigator(frame: &mut Frame, area: Rect, app: &App) {
    let navigator = app.dialog().navigator();
    let border_color = if app.focus() == Focus::Navigator {
        FOCUS_ACCENT
    } else {
        SEPARATOR
    };

    let items: Vec<ListItem> = navigator
        .rows
        .iter()
        .map(|title| ListItem::new(Line::styled(title.clone(), Style::default().fg(BODY_TEXT))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .fg(HEADING_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(navigator.current);
    frame.render_stateful_widget(list, area, &mut state);
}
