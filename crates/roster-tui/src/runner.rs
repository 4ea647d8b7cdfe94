//! Terminal session runner.
//!
//! Owns the tokio runtime the screens spawn their REST calls on, sets up
//! and restores the terminal, and drives the event loop: draw, drain REST
//! completions, poll for key input.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use roster_api::StudentDirectory;

use crate::app::{App, Entry};
use crate::event::{ApiEventReceiver, channel};
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Runs one interactive session starting at `entry`.
///
/// # Errors
///
/// Returns an error if the runtime or terminal cannot be set up, or if
/// drawing/input fails mid-session.
pub fn run(entry: Entry, directory: Arc<dyn StudentDirectory>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let (tx, mut rx) = channel();
    let mut app = App::new(entry, directory, tx, runtime.handle().clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &mut rx);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut ApiEventReceiver,
) -> io::Result<()> {
    while app.is_running() {
        let _ = terminal.draw(|frame| ui::render(frame, app))?;

        while let Ok(event) = rx.try_recv() {
            app.on_api_event(event);
        }

        if poll(POLL_INTERVAL)? {
            match read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => {}
                _ => {}
            }
        }
    }
    Ok(())
}
