use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::format_won;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Apartment,
    House,
}

impl PropertyCategory {
    pub const fn ordered() -> [Self; 2] {
        [Self::Apartment, Self::House]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "Detached house",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property category '{0}' (expected apartment or house)")]
pub struct UnknownCategory(pub String);

impl FromStr for PropertyCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// Secured claim against the sale proceeds. Lower `ranking` is paid first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lien {
    pub ranking: u32,
    pub creditor: String,
    pub amount: u64,
}

impl Lien {
    pub fn new(ranking: u32, creditor: impl Into<String>, amount: u64) -> Self {
        Self {
            ranking,
            creditor: creditor.into(),
            amount,
        }
    }
}

/// Auction catalog record. `liens` are kept in recorded order, not ranking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub category: PropertyCategory,
    pub address: String,
    pub appraised_value: u64,
    pub starting_bid: u64,
    pub size_m2: f64,
    pub description: String,
    pub liens: Vec<Lien>,
}

impl Property {
    /// Multi-line block used by the `list` command.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {}\n  Type: {}\n  Address: {}\n  Appraised value: {}\n  Starting bid: {}\n  Exclusive area: {:.1} m2\n  Recorded claims: {} across {} liens\n  Notes: {}\n",
            self.id,
            self.name,
            self.category.label(),
            self.address,
            format_won(self.appraised_value),
            format_won(self.starting_bid),
            self.size_m2,
            format_won(self.total_claims()),
            self.liens.len(),
            self.description,
        )
    }

    pub fn total_claims(&self) -> u64 {
        self.liens.iter().map(|lien| lien.amount).sum()
    }
}
