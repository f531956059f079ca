//! Add To Cart Handler

use salvo::{flash::FlashDepotExt, prelude::*};
use tracing::{debug, warn};

use ubermelon::notices;

use crate::{
    errors::into_status_error,
    extensions::*,
    melons::melon_id_param,
};

/// Add To Cart Handler
///
/// Adds one melon to the session cart, flashes a confirmation and redirects
/// to the cart page.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Redirect, StatusError> {
    let melon_id = melon_id_param(req)?;
    let state = depot.state_or_500()?;

    let melon = state
        .catalog
        .get_by_id(melon_id)
        .map_err(into_status_error)?;

    let mut cart = depot.cart();

    let quantity = cart.add(melon_id).map_err(|error| {
        warn!("could not add melon to cart: {error}");

        StatusError::bad_request().brief("Cart quantity limit reached")
    })?;

    depot.store_cart(&cart)?;

    debug!(melon = %melon_id, quantity, "added melon to cart");

    depot
        .outgoing_flash_mut()
        .success(notices::added_to_cart(melon));

    Ok(Redirect::found("/cart"))
}
