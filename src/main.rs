//! Artscope - a terminal browser for the Art Institute of Chicago collection.
//!
//! Fetches pages of artwork records from the public collection API and
//! displays them as a navigable table with checkbox row selection.

mod api;
mod app;
mod config;
mod error;
mod events;
mod logging;
mod tasks;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::api::ArticClient;
use crate::app::App;
use crate::config::Config;
use crate::error::AppError;
use crate::events::EventHandler;
use crate::tasks::create_task_channel;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "artscope", version, about)]
struct Cli {
    /// Path to a config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init()?;

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    ui::init_theme(&config.ui.theme);

    let client = ArticClient::new(&config.api.base_url).map_err(AppError::from)?;

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &config, &client).await;
    restore_terminal(&mut terminal)?;

    logging::shutdown();
    result?;
    Ok(())
}

/// The main event loop.
///
/// Draws, polls for input, drains fetch results, and spawns any fetch the
/// app requested during the update. The loop never blocks on a fetch: an
/// outstanding request resolves through the channel whenever it resolves.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &Config,
    client: &ArticClient,
) -> error::Result<()> {
    let (mut messages, spawner) = create_task_channel();
    let mut app = App::new(config);
    let events = EventHandler::new();

    while !app.should_quit() {
        if let Some(page) = app.take_pending_fetch() {
            spawner.spawn_fetch_page(client, page);
        }

        terminal.draw(|frame| app.view(frame))?;

        let event = events.next()?;
        app.update(event);

        while let Ok(message) = messages.try_recv() {
            app.handle_api_message(message);
        }
    }

    Ok(())
}

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
