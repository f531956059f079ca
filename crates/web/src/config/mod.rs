//! Server configuration module

use clap::Parser;

use crate::config::{
    catalog::CatalogConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
    session::SessionConfig,
};

pub(crate) mod catalog;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod session;

pub(crate) use logging::LogFormat;

/// Ubermelon web server configuration
#[derive(Debug, Parser)]
#[command(name = "ubermelon-web", about = "Ubermelon shop web server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Session cookie settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Catalog source settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
