//! # User Directory TUI Application
//!
//! Terminal version of the master/detail user directory, built with Ratatui.
//! Move the cursor with the arrow keys, press Enter to open a user's details
//! and Esc to close them again.

mod app;
mod ui;

use std::io::{self, IsTerminal};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use directory_core::DirectorySettings;

use crate::app::TuiApp;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Logs go to stderr; the default filter keeps them off the alternate screen.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Tui, mut app: TuiApp) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if let Event::Key(key) = event::read()? {
            let transition = app.on_key(key);
            if transition.changed() {
                tracing::debug!(?transition, mode = ?app.controller.mode(), "layout changed");
            }
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    init_logging();

    if !io::stdout().is_terminal() {
        eprintln!("directory_cli needs an interactive terminal.");
        return Ok(());
    }

    let app = TuiApp::new(DirectorySettings::default());
    tracing::info!(users = app.records.len(), "starting user directory");

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, app);
    restore_terminal(&mut terminal)?;
    result
}
