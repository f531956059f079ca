//! Session Config

use clap::Args;

/// Session cookie settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Secret used to sign session cookies (at least 64 bytes). A random
    /// secret is generated when unset.
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,

    /// Session lifetime in seconds
    #[arg(long, env = "SESSION_TTL_SECONDS", default_value_t = 86_400_u64)]
    pub session_ttl_seconds: u64,
}
