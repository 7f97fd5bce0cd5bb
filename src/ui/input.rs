use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C cancels like Esc.
    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'c') {
        app.cancel();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Navigator => match key.code {
            KeyCode::Up => {
                app.dialog_mut().select_previous();
                return;
            }
            KeyCode::Down => {
                app.dialog_mut().select_next();
                return;
            }
            _ => {}
        },
        Focus::Page => {
            let consumed = app
                .dialog_mut()
                .current_page_mut()
                .is_some_and(|page| page.handle_key(key));
            if consumed {
                return;
            }
        }
    }

    if key.code == KeyCode::Enter {
        app.confirm(Instant::now());
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
