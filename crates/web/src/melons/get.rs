//! Melon Detail Handler

use salvo::prelude::*;
use tera::Context;
use tracing::debug;

use crate::{
    errors::into_status_error,
    extensions::*,
    melons::{MelonView, melon_id_param},
    templates::render_page,
};

/// Melon Detail Handler
///
/// Shows everything known about one melon, with a link to buy it.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let melon_id = melon_id_param(req)?;
    let state = depot.state_or_500()?;

    let melon = state
        .catalog
        .get_by_id(melon_id)
        .map_err(into_status_error)?;

    debug!(melon = %melon_id, name = %melon.common_name, "showing melon");

    let mut context = Context::new();
    context.insert("display_melon", &MelonView::from(melon));

    render_page(depot, "melon_details.html", context)
}
