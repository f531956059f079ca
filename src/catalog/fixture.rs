//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    melons::{Melon, MelonId},
};

/// Wrapper for melons in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Melons in display order
    pub melons: Vec<MelonFixture>,
}

/// Melon Fixture
#[derive(Debug, Deserialize)]
pub struct MelonFixture {
    /// Catalog identifier
    pub id: u32,

    /// Short type code
    pub melon_type: String,

    /// Display name
    pub common_name: String,

    /// Unit price (e.g., "2.00 USD")
    pub price: String,

    /// Product photo
    #[serde(default)]
    pub image_url: Option<String>,

    /// Rind colour
    pub color: String,

    /// Whether the variety is seedless
    #[serde(default)]
    pub seedless: bool,
}

impl TryFrom<MelonFixture> for Melon {
    type Error = CatalogError;

    fn try_from(fixture: MelonFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Melon {
            id: MelonId::new(fixture.id),
            melon_type: fixture.melon_type,
            common_name: fixture.common_name,
            price: Money::from_minor(minor_units, currency),
            image_url: fixture.image_url,
            color: fixture.color,
            seedless: fixture.seedless,
        })
    }
}

/// Parse price string (e.g., "2.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(CatalogError::InvalidPrice(format!(
            "expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(CatalogError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "USD" => USD,
        "GBP" => GBP,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
