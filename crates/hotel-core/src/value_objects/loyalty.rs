//! Loyalty tiers and the badge categories they are rendered with

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Guest loyalty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Vip,
    Gold,
    Silver,
    Bronze,
}

impl LoyaltyTier {
    /// All tiers, highest first
    pub const ALL: [Self; 4] = [Self::Vip, Self::Gold, Self::Silver, Self::Bronze];

    /// Parse a tier name, ignoring ASCII case. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical lowercase name
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }

    /// Badge category used when rendering this tier
    #[inline]
    pub fn badge_class(self) -> BadgeClass {
        match self {
            Self::Vip => BadgeClass::Danger,
            Self::Gold => BadgeClass::Warning,
            Self::Silver => BadgeClass::Info,
            Self::Bronze => BadgeClass::Secondary,
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoyaltyTier {
    type Err = LoyaltyTierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LoyaltyTierParseError::Unknown(s.to_string()))
    }
}

/// Error when parsing a loyalty tier name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoyaltyTierParseError {
    #[error("unknown loyalty tier: {0}")]
    Unknown(String),
}

/// Presentation category for a loyalty badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeClass {
    Danger,
    Warning,
    Info,
    /// Used for bronze, unknown, and missing tiers
    #[default]
    Secondary,
}

impl BadgeClass {
    /// Bare category tag, e.g. `"danger"`
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Secondary => "secondary",
        }
    }

    /// Stylesheet class with the conventional `badge-` prefix
    pub fn css_class(self) -> String {
        self.css_class_with_prefix("badge-")
    }

    /// Stylesheet class with a caller supplied prefix
    pub fn css_class_with_prefix(self, prefix: &str) -> String {
        format!("{prefix}{}", self.as_str())
    }
}

impl fmt::Display for BadgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
