//! Checkout Handler

use salvo::{flash::FlashDepotExt, prelude::*};

use ubermelon::notices::CHECKOUT_NOT_IMPLEMENTED;

/// Checkout Handler
///
/// Payment and shipping are out of scope; the shopper is sent back to the
/// melon list with a notice.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Redirect {
    depot.outgoing_flash_mut().warning(CHECKOUT_NOT_IMPLEMENTED);

    Redirect::found("/melons")
}
