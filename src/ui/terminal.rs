use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type DialogTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode, alternate-screen terminal. The previous terminal state comes
/// back on drop and from the panic hook, whichever runs first.
pub struct TerminalSession {
    terminal: DialogTerminal,
    active: Arc<AtomicBool>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let active = Arc::new(AtomicBool::new(true));
        enable_raw_mode()?;

        let terminal = match init_screen() {
            Ok(terminal) => terminal,
            Err(err) => {
                restore(&active);
                return Err(err);
            }
        };
        install_panic_hook(Arc::clone(&active));

        Ok(Self { terminal, active })
    }

    pub fn terminal(&mut self) -> &mut DialogTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(&self.active);
    }
}

fn init_screen() -> io::Result<DialogTerminal> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn install_panic_hook(active: Arc<AtomicBool>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(&active);
        default_hook(info);
    }));
}

fn restore(active: &AtomicBool) {
    if !active.swap(false, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}
