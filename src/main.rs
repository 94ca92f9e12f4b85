mod app;
mod config;
mod error;
mod events;
mod log;
mod prompts;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use app::App;
use config::Config;
use error::SparkError;
use events::{Action, EventHandler};

/// How often the footer tip rotates.
const TIP_ROTATION: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_override: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
            }
            arg => {
                eprintln!("Warning: ignoring unknown argument '{}'", arg);
            }
        }
        i += 1;
    }

    let config = load_config(config_override.as_deref())?;

    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Create app state
    let mut app = App::new(&config);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    restore_terminal(&mut terminal)?;

    Ok(result?)
}

/// Load config with precedence: CLI `--config` > `SPARK_CONFIG` > default path.
///
/// An explicit CLI path must load; the default path is best-effort.
fn load_config(config_override: Option<&Path>) -> error::Result<Config> {
    match config_override {
        Some(path) => Ok(Config::from_path(path)?),
        None => Ok(Config::load()),
    }
}

fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> error::Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    let mut tip_timer = tokio::time::interval(TIP_ROTATION);
    tip_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first tick completes immediately; consume it so the tip doesn't
    // advance before anything is on screen
    tip_timer.tick().await;

    loop {
        // Render
        terminal
            .draw(|frame| tui::ui::render(frame, app))
            .map_err(|e| SparkError::Terminal(e.to_string()))?;

        tokio::select! {
            // Terminal events (keyboard, mouse)
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    let action = EventHandler::handle_event(app, &event);
                    app.apply(action);
                }
            }

            // Footer tip rotation
            _ = tip_timer.tick() => {
                app.apply(Action::NextTip);
            }
        }

        if app.should_quit {
            log::log_event("quit");
            return Ok(());
        }
    }
}
