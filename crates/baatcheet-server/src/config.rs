//! Backend configuration.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use clap::ValueEnum;

/// Which generator answers persona questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorKind {
    /// OpenAI-compatible chat completions endpoint.
    Openai,
    /// Offline generator that echoes the question back.
    Echo,
}

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,

    /// API key for the chat completions endpoint.
    pub api_key: Option<String>,

    /// Base URL of the chat completions endpoint (without `/v1/...`).
    pub base_url: String,

    /// Model name sent with every request.
    pub model: String,

    /// Request timeout (seconds).
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: GeneratorKind::Openai,
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Backend server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Listen port.
    pub port: u16,

    /// The single origin allowed to call the API from a browser.
    pub allowed_origin: String,

    pub generator: GeneratorConfig,
}

impl ServerConfig {
    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.trim_matches(|c| c == '[' || c == ']').parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origin: "https://chai-aur-baatcheet-app.onrender.com".to_string(),
            generator: GeneratorConfig::default(),
        }
    }
}
