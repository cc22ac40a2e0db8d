//! signup-tui - Terminal Sign-Up Form
//!
//! A terminal sign-up screen with name, email and password fields,
//! client-side validation, inline errors, a submission summary and reset.

use std::io;
use std::path::Path;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use signup_tui::application::{App, FormConfig};
use signup_tui::infrastructure::{init_file_logging, LOG_FILE};
use signup_tui::presentation::{render_ui, InputHandler};

/// Entry point for the sign-up screen.
///
/// Sets up optional file logging and the terminal interface, then runs the
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error if logging or terminal setup fails, or if the terminal
/// reports an error while running.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let directive = std::env::var("RUST_LOG").ok();
    let _log_guard = init_file_logging(Path::new(LOG_FILE), directive.as_deref())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(FormConfig::default());
    tracing::info!("sign-up screen started");
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "terminal error");
        println!("{err:?}");
    }

    Ok(())
}

/// Main event loop.
///
/// Redraws the form after every key press. Esc or Ctrl+C quits while the
/// form is being edited.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if InputHandler::is_quit_key(app, key.code, key.modifiers) {
                    return Ok(());
                }
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
        }
    }
}
