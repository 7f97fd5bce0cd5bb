use crate::dialog::{ConfigDialog, DialogOutcome};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal::TerminalSession;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Shows `dialog` full screen until it is confirmed or cancelled.
pub fn run(dialog: ConfigDialog) -> io::Result<DialogOutcome> {
    let mut session = TerminalSession::enter()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(dialog);
    let events = EventHandler::new(tick_rate);

    loop {
        session.terminal().draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => debug!(cols, rows, "terminal resized"),
            Err(RecvTimeoutError::Disconnected) => {
                warn!("terminal event reader stopped, cancelling dialog");
                app.cancel();
            }
        }
    }

    Ok(app
        .dialog()
        .outcome()
        .unwrap_or(DialogOutcome::Rejected))
}
