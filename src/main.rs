//! Forms TUI - Terminal User Interface for authoring survey forms
//!
//! A Ratatui-based TUI for drafting forms question by question and
//! submitting them to a forms service over HTTP.

mod api;
mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use api::{FormsClient, FormsClientTrait};
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = TuiConfig::load()?;
    let client = FormsClient::new(&config)?;
    tracing::info!("Using forms service at {}", client.endpoint());

    // Create app before taking over the terminal
    let mut app = App::new(Box::new(client)).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data dir so output does not land on the alternate screen
fn init_logging() {
    let writer = match open_log_file() {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forms_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

fn open_log_file() -> Option<File> {
    let path = config::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
