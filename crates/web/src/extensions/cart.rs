//! Session cart helpers.

use salvo::{
    prelude::{Depot, StatusError},
    session::SessionDepotExt,
};
use tracing::{error, warn};

use ubermelon::cart::Cart;

use crate::extensions::*;

pub(crate) const CART_SESSION_KEY: &str = "cart";

/// Read and write the shopper's cart in the session.
pub(crate) trait CartSessionExt {
    /// The session cart, empty if none has been stored yet.
    fn cart(&self) -> Cart;

    fn store_cart(&mut self, cart: &Cart) -> Result<(), StatusError>;
}

impl CartSessionExt for Depot {
    fn cart(&self) -> Cart {
        let Some(session) = self.session() else {
            return Cart::new();
        };

        match session.get::<Cart>(CART_SESSION_KEY) {
            Some(cart) => cart,
            None => {
                if session.get_raw(CART_SESSION_KEY).is_some() {
                    warn!("discarding unreadable cart from session");
                }

                Cart::new()
            }
        }
    }

    fn store_cart(&mut self, cart: &Cart) -> Result<(), StatusError> {
        let Some(session) = self.session_mut() else {
            error!("session middleware is not installed");

            return Err(StatusError::internal_server_error());
        };

        session
            .insert(CART_SESSION_KEY, cart)
            .or_500("failed to store cart in session")
    }
}
