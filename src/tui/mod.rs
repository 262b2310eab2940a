//! TUI module for interactive tree browsing.

pub mod app;
pub mod event;
pub mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use app::App;

/// Time to wait for input before redrawing.
const TICK: Duration = Duration::from_millis(250);

/// Runs a restore action exactly once: on [`RestoreGuard::finish`], or on
/// drop if the guard goes out of scope early (error return or panic).
struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn finish(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(mut restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            if let Err(err) = restore() {
                tracing::warn!(error = %err, "Failed to restore terminal");
            }
        }
    }
}

/// Run the TUI until the user quits. The terminal is restored on every exit
/// path, including a panic raised by the selection handler.
pub fn run(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app);
    guard.finish()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        let completed = terminal.draw(|frame| ui::render(app, frame))?;
        let area = completed.area;
        event::handle_events(app, area, TICK)?;
    }
    Ok(())
}

/// Leave raw mode and the alternate screen. Both steps are attempted even if
/// the first fails.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}
