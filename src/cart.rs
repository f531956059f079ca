//! Cart
//!
//! The session cart: how many of each melon the shopper has picked. It is
//! stored in the session with decimal-string keys, so the serialized form is
//! validated on the way back in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::melons::MelonId;

/// Errors related to cart contents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A stored key is not a melon identifier.
    #[error("invalid cart key: {0:?}")]
    InvalidKey(String),

    /// A stored quantity is zero.
    #[error("cart entry {0} has zero quantity")]
    ZeroQuantity(MelonId),

    /// The quantity counter would overflow.
    #[error("quantity overflow for melon {0}")]
    QuantityOverflow(MelonId),
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, u32>",
    into = "BTreeMap<String, u32>"
)]
pub struct Cart {
    quantities: BTreeMap<MelonId, u32>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of the given melon, returning the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the quantity cannot grow.
    pub fn add(&mut self, melon: MelonId) -> Result<u32, CartError> {
        let quantity = self.quantities.entry(melon).or_insert(0);

        *quantity = quantity
            .checked_add(1)
            .ok_or(CartError::QuantityOverflow(melon))?;

        Ok(*quantity)
    }

    /// Quantity of a melon in the cart, zero if absent.
    pub fn quantity(&self, melon: MelonId) -> u32 {
        self.quantities.get(&melon).copied().unwrap_or(0)
    }

    /// Iterate `(melon, quantity)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (MelonId, u32)> + '_ {
        self.quantities
            .iter()
            .map(|(melon, quantity)| (*melon, *quantity))
    }

    /// Number of distinct melons.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl TryFrom<BTreeMap<String, u32>> for Cart {
    type Error = CartError;

    fn try_from(stored: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        let quantities = stored
            .into_iter()
            .map(|(key, quantity)| {
                let melon = key
                    .parse::<MelonId>()
                    .map_err(|_err| CartError::InvalidKey(key.clone()))?;

                if quantity == 0 {
                    return Err(CartError::ZeroQuantity(melon));
                }

                Ok((melon, quantity))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { quantities })
    }
}

impl From<Cart> for BTreeMap<String, u32> {
    fn from(cart: Cart) -> Self {
        cart.quantities
            .into_iter()
            .map(|(melon, quantity)| (melon.to_string(), quantity))
            .collect()
    }
}
