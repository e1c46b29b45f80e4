//! Catalog Models
//!
//! Data structures matching the bundled picto catalog.

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry, immutable after load.
///
/// `bonus` may contain embedded line breaks, one effect per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picto {
    pub id: u32,
    pub name: String,
    pub bonus: String,
    pub zone: String,
    pub emplacement: String,
    /// Level as found in the catalog. Some entries store it as a JSON
    /// number, others as a string, so it is kept verbatim for display.
    #[serde(deserialize_with = "string_or_number")]
    pub niveau: String,
}

impl Picto {
    /// Numeric level; non-numeric `niveau` counts as level 0.
    pub fn level(&self) -> u32 {
        self.niveau.trim().parse().unwrap_or(0)
    }

    pub fn rarity(&self) -> Rarity {
        Rarity::from_level(self.level())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "niveau must be a string or number, got {other}"
        ))),
    }
}

/// Rarity tier derived from a picto's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn from_level(level: u32) -> Self {
        if level >= 25 {
            Rarity::Legendary
        } else if level >= 15 {
            Rarity::Epic
        } else if level >= 10 {
            Rarity::Rare
        } else if level >= 5 {
            Rarity::Uncommon
        } else {
            Rarity::Common
        }
    }

    /// CSS class used by the name and level badges.
    pub fn css_class(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}
