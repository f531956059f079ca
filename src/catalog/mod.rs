//! Catalog
//!
//! The fixed set of melons the shop sells. A catalog is loaded once at start-up
//! from a YAML fixture and is immutable afterwards.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::melons::{Melon, MelonId};

pub mod fixture;

const BUNDLED_CATALOG: &str = include_str!("../../fixtures/catalog/melons.yml");

/// Catalog loading and lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between melons
    #[error("currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// Two melons share an identifier
    #[error("duplicate melon id: {0}")]
    DuplicateMelon(MelonId),

    /// The catalog has nothing to sell
    #[error("catalog contains no melons")]
    NoMelons,

    /// Lookup of an identifier the catalog does not contain
    #[error("melon not found: {0}")]
    MelonNotFound(MelonId),
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    melons: Vec<Melon>,
    index: FxHashMap<MelonId, usize>,
    currency: &'static Currency,
}

impl Catalog {
    /// Load the catalog compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml(BUNDLED_CATALOG)
    }

    /// Load a catalog from a YAML file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a price is malformed, or
    /// the melons do not form a valid catalog (see [`Catalog::with_melons`]).
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let fixture: fixture::CatalogFixture = serde_norway::from_str(contents)?;

        let melons = fixture
            .melons
            .into_iter()
            .map(Melon::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_melons(melons)
    }

    /// Build a catalog from melons, sorted by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no melons, if two melons share an
    /// identifier, or if prices use more than one currency.
    pub fn with_melons(melons: impl Into<Vec<Melon>>) -> Result<Self, CatalogError> {
        let mut melons = melons.into();

        melons.sort_by_key(|melon| melon.id);

        let currency = melons
            .first()
            .map(|melon| melon.price.currency())
            .ok_or(CatalogError::NoMelons)?;

        let mut index = FxHashMap::default();

        for (position, melon) in melons.iter().enumerate() {
            let melon_currency = melon.price.currency();

            if melon_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    currency.iso_alpha_code,
                    melon_currency.iso_alpha_code,
                ));
            }

            if index.insert(melon.id, position).is_some() {
                return Err(CatalogError::DuplicateMelon(melon.id));
            }
        }

        Ok(Self {
            melons,
            index,
            currency,
        })
    }

    /// All melons, in identifier order.
    pub fn get_all(&self) -> &[Melon] {
        &self.melons
    }

    /// Look up a single melon.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MelonNotFound`] if the identifier is unknown.
    pub fn get_by_id(&self, id: MelonId) -> Result<&Melon, CatalogError> {
        self.index
            .get(&id)
            .and_then(|position| self.melons.get(*position))
            .ok_or(CatalogError::MelonNotFound(id))
    }

    /// Currency every price in the catalog is expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of melons in the catalog.
    pub fn len(&self) -> usize {
        self.melons.len()
    }

    /// Always false for a successfully built catalog.
    pub fn is_empty(&self) -> bool {
        self.melons.is_empty()
    }
}
