use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::error;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Periodic wake-up; drives the error banner timer.
    Tick,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Spawns the terminal reader thread. It stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                let event = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(err) => {
                            error!(error = %err, "failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => None,
                    Err(err) => {
                        error!(error = %err, "failed to poll terminal events");
                        break;
                    }
                };

                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
