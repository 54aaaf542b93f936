//! Baatcheet backend server.

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use baatcheet_server::{generator, http, AppState, GeneratorConfig, GeneratorKind, ServerConfig};

/// Baatcheet persona backend.
#[derive(Parser, Debug)]
#[command(name = "baatcheet-server", about = "Baatcheet persona chat backend")]
struct Args {
    /// Interface to bind
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Single origin allowed to call the API from a browser
    #[arg(
        long,
        env = "ALLOWED_ORIGIN",
        default_value = "https://chai-aur-baatcheet-app.onrender.com"
    )]
    allowed_origin: String,

    /// Response generator
    #[arg(long, env = "GENERATOR", value_enum, default_value = "openai")]
    generator: GeneratorKind,

    /// API key for the chat completions endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Base URL of the chat completions endpoint
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com")]
    openai_base_url: String,

    /// Model used for replies
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    openai_model: String,

    /// Generator request timeout in seconds
    #[arg(long, env = "GENERATOR_TIMEOUT_SECS", default_value = "60")]
    generator_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("baatcheet_server=info,tower_http=info")),
        )
        .with_target(true)
        .init();

    // Build server config
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        allowed_origin: args.allowed_origin,
        generator: GeneratorConfig {
            kind: args.generator,
            api_key: args.openai_api_key,
            base_url: args.openai_base_url,
            model: args.openai_model,
            timeout_secs: args.generator_timeout_secs,
        },
    };
    let addr = config.bind_addr()?;

    let generator = generator::from_config(&config.generator)?;
    let state = AppState::new(generator);
    let router = http::create_router(state, &config.allowed_origin)?;

    let listener = TcpListener::bind(addr).await?;

    info!(
        addr = %addr,
        allowed_origin = %config.allowed_origin,
        generator = ?config.generator.kind,
        "Server running"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when Ctrl-C is pressed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
