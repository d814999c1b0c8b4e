//! Raw mode and alternate screen for the pager, undone exactly once.
//!
//! Teardown steps are stacked: the screen restore goes in first, and the
//! pager pushes its pointer capture release on top so capture is dropped
//! before the screen is handed back, even from the panic hook where no
//! destructor runs.

use crossterm::cursor::{Hide, Show};
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

pub struct TerminalGuard {
    /// Run last-in first-out.
    cleanup: Arc<Mutex<Vec<Cleanup>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers a teardown step that runs before every step pushed earlier.
    pub fn on_restore<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        self.cleanup.lock().push(Box::new(cleanup));
    }

    /// Releases pointer capture during teardown, even if the listener
    /// guard never gets dropped.
    pub fn release_pointer_capture(&self) {
        self.on_restore(|| {
            let _ = io::stdout().execute(DisableMouseCapture);
        });
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_all(&cleanup);
            default_hook(info);
        }));
    }

    fn restore(&self) {
        run_all(&self.cleanup);
    }
}

fn run_all(cleanup: &Mutex<Vec<Cleanup>>) {
    let steps = std::mem::take(&mut *cleanup.lock());
    for step in steps.into_iter().rev() {
        step();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new();
    guard.on_restore(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}
