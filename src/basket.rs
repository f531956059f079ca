//! Basket
//!
//! A cart priced against the catalog.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::{Catalog, CatalogError},
    melons::MelonId,
    pricing::{PricingError, line_total, order_total},
};

/// Errors related to basket construction or totals.
#[derive(Debug, Error)]
pub enum BasketError {
    /// A cart entry refers to a melon the catalog does not contain.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A line or the order total could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A priced cart entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine {
    /// Melon identifier
    pub melon_id: MelonId,

    /// Melon display name
    pub common_name: String,

    /// Number of melons
    pub quantity: u32,

    /// Price of one melon
    pub unit_price: Money<'static, Currency>,

    /// `unit_price × quantity`
    pub total: Money<'static, Currency>,
}

/// Basket
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    lines: Vec<BasketLine>,
    total: Money<'static, Currency>,
}

impl Basket {
    /// Price every cart entry against the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`BasketError`] if a cart entry is not in the catalog or a
    /// total overflows.
    pub fn price(cart: &Cart, catalog: &Catalog) -> Result<Self, BasketError> {
        let lines = cart
            .iter()
            .map(|(melon_id, quantity)| -> Result<BasketLine, BasketError> {
                let melon = catalog.get_by_id(melon_id)?;

                Ok(BasketLine {
                    melon_id,
                    common_name: melon.common_name.clone(),
                    quantity,
                    unit_price: melon.price,
                    total: line_total(melon.price, quantity)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = order_total(lines.iter().map(|line| line.total), catalog.currency())?;

        Ok(Self { lines, total })
    }

    /// Priced lines, in melon identifier order.
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Get the number of lines in the basket.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
