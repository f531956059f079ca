//! Melons

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Melon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MelonId(u32);

impl MelonId {
    /// Wrap a raw catalog identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for MelonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Display for MelonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Melon
#[derive(Debug, Clone, PartialEq)]
pub struct Melon {
    /// Catalog identifier
    pub id: MelonId,

    /// Short type code (e.g. `cren`)
    pub melon_type: String,

    /// Display name
    pub common_name: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Product photo
    pub image_url: Option<String>,

    /// Rind colour
    pub color: String,

    /// Whether the variety is seedless
    pub seedless: bool,
}

impl Melon {
    /// Unit price formatted for display, e.g. `$2.00`.
    pub fn price_str(&self) -> String {
        self.price.to_string()
    }
}
