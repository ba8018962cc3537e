//! Domain errors - error types for the domain layer
//!
//! The guest entity itself never fails; these errors come from parsing
//! external input into domain values.

use thiserror::Error;

use crate::value_objects::{IdParseError, LoyaltyTierParseError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Unknown loyalty tier: {0}")]
    UnknownLoyaltyTier(String),
}

impl DomainError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "INVALID_ID",
            Self::UnknownLoyaltyTier(_) => "UNKNOWN_LOYALTY_TIER",
        }
    }
}

impl From<LoyaltyTierParseError> for DomainError {
    fn from(err: LoyaltyTierParseError) -> Self {
        match err {
            LoyaltyTierParseError::Unknown(name) => Self::UnknownLoyaltyTier(name),
        }
    }
}

impl From<IdParseError> for DomainError {
    fn from(err: IdParseError) -> Self {
        Self::InvalidId(err.to_string())
    }
}
