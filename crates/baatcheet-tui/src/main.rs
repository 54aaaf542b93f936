//! Baatcheet Terminal UI.
//!
//! Chat with one of the mentor personas through the Baatcheet backend.

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use baatcheet_client::{default_backend_url, BackendClient};
use baatcheet_core::ChatSession;

mod app;
mod backend;
mod event;
mod render;
mod state;
mod theme;
mod utils;
mod widgets;

use app::App;
use event::{BackendCommand, UiEvent};

#[derive(Parser)]
#[command(name = "baatcheet")]
#[command(about = "Baatcheet terminal chat")]
#[command(version)]
struct Cli {
    /// Backend base URL
    #[arg(short, long, default_value_t = default_backend_url().to_string())]
    backend_url: String,

    /// Persona to start with (hitesh, piyush)
    #[arg(short, long, default_value = "hitesh")]
    persona: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "60")]
    timeout_secs: u64,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "/tmp/baatcheet-tui.log")]
    log_file: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Write logs to a file to avoid terminal interference
    if let Ok(file) = std::fs::File::create(&cli.log_file) {
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter("baatcheet_tui=debug,baatcheet_core=debug,baatcheet_client=debug")
            .with_ansi(false)
            .init();
    }

    let session = ChatSession::for_persona(&cli.persona)?;
    let client = BackendClient::with_timeout(&cli.backend_url, Duration::from_secs(cli.timeout_secs))?;

    info!(
        backend = %cli.backend_url,
        persona = %cli.persona,
        "Starting chat TUI"
    );

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);

    // Spawn background thread with its own tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    let bg_handle = std::thread::spawn(move || {
        rt.block_on(backend::run_backend(client, ui_tx, cmd_rx));
    });

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();

    // Run UI loop on main thread
    let mut app = App::new(session, ui_rx, cmd_tx);
    let result = app.run(terminal);

    // Restore terminal (exits alternate screen, disables raw mode)
    ratatui::restore();

    // Wait for background thread to finish
    let _ = bg_handle.join();

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}
