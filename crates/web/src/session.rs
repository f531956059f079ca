//! Session middleware
//!
//! Sessions live in process memory and are identified by a signed cookie.

use std::time::Duration;

use rand::{RngCore, rngs::OsRng};
use salvo::session::{MemoryStore, SessionHandler};
use thiserror::Error;
use tracing::warn;

use crate::config::session::SessionConfig;

/// Minimum signing secret length accepted by the session handler.
pub(crate) const MIN_SECRET_LEN: usize = 64;

pub(crate) const SESSION_COOKIE_NAME: &str = "ubermelon.session";

#[derive(Debug, Error)]
pub(crate) enum SessionSetupError {
    #[error("session secret must be at least {MIN_SECRET_LEN} bytes, got {0}")]
    SecretTooShort(usize),

    #[error("failed to build session handler: {0}")]
    Build(#[source] salvo::Error),
}

/// Build the session handler from configuration.
pub(crate) fn session_handler(
    config: &SessionConfig,
) -> Result<SessionHandler<MemoryStore>, SessionSetupError> {
    let ttl = Duration::from_secs(config.session_ttl_seconds);

    match config.session_secret.as_deref() {
        Some(secret) => build(secret.as_bytes(), ttl),
        None => {
            warn!("SESSION_SECRET is not set; using a random secret for this process");

            build(&random_secret(), ttl)
        }
    }
}

pub(crate) fn build(
    secret: &[u8],
    ttl: Duration,
) -> Result<SessionHandler<MemoryStore>, SessionSetupError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(SessionSetupError::SecretTooShort(secret.len()));
    }

    SessionHandler::builder(MemoryStore::new(), secret)
        .cookie_name(SESSION_COOKIE_NAME)
        .session_ttl(Some(ttl))
        .build()
        .map_err(SessionSetupError::Build)
}

fn random_secret() -> [u8; MIN_SECRET_LEN] {
    let mut secret = [0_u8; MIN_SECRET_LEN];

    OsRng.fill_bytes(&mut secret);

    secret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secret_is_rejected() {
        let result = build(b"this-should-be-something-unguessable", Duration::from_secs(60));

        assert!(matches!(result, Err(SessionSetupError::SecretTooShort(36))));
    }

    #[test]
    fn missing_secret_falls_back_to_random() {
        let config = SessionConfig {
            session_secret: None,
            session_ttl_seconds: 60,
        };

        assert!(session_handler(&config).is_ok());
    }

    #[test]
    fn random_secrets_differ() {
        assert_ne!(random_secret(), random_secret());
    }
}
