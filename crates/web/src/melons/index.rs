//! Melon Index Handler

use salvo::prelude::*;
use tera::Context;

use crate::{extensions::*, melons::MelonView, templates::render_page};

/// Melon Index Handler
///
/// Lists the whole catalog.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.state_or_500()?;

    let melon_list: Vec<MelonView> = state
        .catalog
        .get_all()
        .iter()
        .map(MelonView::from)
        .collect();

    let mut context = Context::new();
    context.insert("melon_list", &melon_list);

    render_page(depot, "all_melons.html", context)
}
