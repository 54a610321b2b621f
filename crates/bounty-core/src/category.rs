//! # Contract Categories
//!
//! The closed set of bounty contract categories. Every `match` on
//! `Category` is exhaustive, so adding a category forces each consumer
//! (display metadata, composer side effects) to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BountyError;

/// Category of a bounty contract.
///
/// | Category | Target entry |
/// |----------|--------------|
/// | Criminal | picked from the known-targets list by default |
/// | Vacancy | free text |
/// | Construction | free text |
/// | Service | free text |
/// | Other | free text |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A wanted person, usually someone already known to the game.
    #[default]
    Criminal,
    /// An open position to be filled.
    Vacancy,
    /// Construction or repair work.
    Construction,
    /// A service request.
    Service,
    /// Anything else.
    Other,
}

/// Total number of categories.
pub const CATEGORY_COUNT: usize = 5;

impl Category {
    /// All categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Criminal,
            Self::Vacancy,
            Self::Construction,
            Self::Service,
            Self::Other,
        ]
    }

    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Criminal => "criminal",
            Self::Vacancy => "vacancy",
            Self::Construction => "construction",
            Self::Service => "service",
            Self::Other => "other",
        }
    }

    /// Whether selecting this category switches the composer to free-text
    /// name entry. Only criminal contracts pick from the known targets.
    pub fn prefers_custom_name(&self) -> bool {
        !matches!(self, Self::Criminal)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BountyError;

    /// Parse a category from its snake_case identifier (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "criminal" => Ok(Self::Criminal),
            "vacancy" => Ok(Self::Vacancy),
            "construction" => Ok(Self::Construction),
            "service" => Ok(Self::Service),
            "other" => Ok(Self::Other),
            other => Err(BountyError::UnknownCategory(other.to_string())),
        }
    }
}
