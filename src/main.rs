//! TapText - tap a phrase, hear a tick
//!
//! # Usage
//!
//! ```bash
//! taptext
//! taptext --mute
//! taptext --config phrases.toml --log-file taptext.log
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use taptext::audio;
use taptext::cli::Cli;
use taptext::config::Config;
use taptext::{logging, ui, App, PhraseView};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref(), cli.log_level.into())?;

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let settings = cli.settings(config);

    let cue = if settings.mute {
        tracing::info!("sound muted");
        None
    } else {
        audio::load_cue(&audio::search_dirs(settings.assets.as_deref()))
    };

    let view = PhraseView::new(settings.phrases, cue);
    tracing::info!(
        phrases = view.phrases().len(),
        sound = view.has_sound(),
        "view loaded"
    );

    run_tui(App::new(view)).await
}

// =============================================================================
// TUI
// =============================================================================

/// Initialize the terminal
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_tui(mut app: App) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop: draw, run deferred work, handle one input event
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // The cue starts after the tapped phrase is on screen
        app.view.run_deferred();
        tokio::task::yield_now().await;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only handle key press events (ignore releases on Windows)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                // Resize needs nothing: the next draw rewraps
                _ => {}
            }
        }
    }

    Ok(())
}
