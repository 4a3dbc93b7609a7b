//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier carried by the empty-slot sentinel.
///
/// Reserved: no real beverage may use it.
pub const EMPTY_SLOT_ID: &str = "null";

/// Identifier of a beverage (e.g. `"GC001"`, `"AM001"`).
///
/// Compared by value. Never empty and never equal to [`EMPTY_SLOT_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BeverageId(String);

impl BeverageId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("BeverageId: cannot be empty"));
        }
        if value == EMPTY_SLOT_ID {
            return Err(DomainError::invalid_id(format!(
                "BeverageId: `{EMPTY_SLOT_ID}` is reserved for empty slots"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BeverageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BeverageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BeverageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BeverageId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for BeverageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BeverageId> for String {
    fn from(value: BeverageId) -> Self {
        value.0
    }
}

impl FromStr for BeverageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
