//! Confidence value object (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// The author's stated certainty when logging a decision: 1 (guess) to 5 (sure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a Confidence, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "confidence",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric level.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// All levels, lowest first.
    pub fn all() -> impl Iterator<Item = Confidence> {
        (Self::MIN..=Self::MAX).map(Confidence)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Confidence {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Confidence> for u8 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
