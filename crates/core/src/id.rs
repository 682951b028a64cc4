//! Strongly-typed product identifier.

use core::num::NonZeroU32;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Identifier of a product in the catalog.
///
/// Always positive; stable for the lifetime of a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Create an identifier, rejecting zero.
    pub fn new(value: u32) -> StoreResult<Self> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or_else(|| StoreError::invalid_id("must be positive"))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for ProductId {
    type Error = StoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.get()
    }
}

impl FromStr for ProductId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|e| StoreError::invalid_id(e.to_string()))?;
        Self::new(raw)
    }
}
