//! Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use ubermelon::{basket::BasketError, catalog::CatalogError};

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::MelonNotFound(melon) => {
            warn!(%melon, "melon not found");

            StatusError::not_found().brief("Melon not found")
        }
        other => {
            error!("catalog lookup failed: {other}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn basket_into_status_error(error: BasketError) -> StatusError {
    match error {
        BasketError::Catalog(source) => into_status_error(source),
        BasketError::Pricing(source) => {
            error!("failed to price cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
