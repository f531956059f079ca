//! Login Submit Handler

use salvo::prelude::*;
use tracing::debug;

use ubermelon::notices::LOGIN_NOT_IMPLEMENTED;

/// Login Submit Handler
///
/// Accounts do not exist yet, so submitting the form only returns a
/// placeholder.
#[handler]
pub(crate) async fn handler() -> Text<&'static str> {
    debug!("login submitted");

    Text::Plain(LOGIN_NOT_IMPLEMENTED)
}
