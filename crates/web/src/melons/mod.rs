//! Melons

use salvo::prelude::{Request, StatusError};
use tracing::debug;

use ubermelon::melons::MelonId;

pub(crate) mod get;
pub(crate) mod index;
mod views;

pub(crate) use views::MelonView;

/// Read the `{id}` path parameter. Anything that is not a melon identifier
/// cannot name a page, so it is a 404.
pub(crate) fn melon_id_param(req: &Request) -> Result<MelonId, StatusError> {
    let raw = req.param::<String>("id").unwrap_or_default();

    raw.parse::<MelonId>().map_err(|error| {
        debug!(id = %raw, "invalid melon id: {error}");

        StatusError::not_found().brief("Melon not found")
    })
}
