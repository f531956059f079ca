//! Ubermelon Web Server
//!
//! Serves the melon shop: catalog pages, a session cart, and the login and
//! checkout placeholders.

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use ubermelon::catalog::Catalog;

use crate::{config::ServerConfig, router::root_router, state::State, templates::Templates};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod cart;
mod checkout;
mod config;
mod errors;
mod extensions;
mod flash;
mod healthcheck;
mod homepage;
mod login;
mod melons;
mod observability;
mod router;
mod session;
mod shutdown;
mod state;
mod templates;
#[cfg(test)]
mod test_helpers;

/// Ubermelon web server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let catalog = match &config.catalog.catalog_path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::bundled(),
    };

    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(catalog_error) => {
            error!("failed to load catalog: {catalog_error}");

            process::exit(1);
        }
    };

    info!(melons = catalog.len(), "catalog loaded");

    let templates = match Templates::bundled() {
        Ok(templates) => templates,
        Err(template_error) => {
            error!("failed to compile templates: {template_error}");

            process::exit(1);
        }
    };

    let sessions = match session::session_handler(&config.session) {
        Ok(sessions) => sessions,
        Err(session_error) => {
            error!("failed to configure sessions: {session_error}");

            process::exit(1);
        }
    };

    let router = root_router(State::shared(catalog, templates), sessions);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
