//! Item entity - catalog objects that players can hold and use

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ItemId;
use crate::value_objects::{ItemDescription, ItemName};

/// A catalog item
///
/// This is a data-carrying struct with no invariants beyond its validated
/// name and description newtypes. Items are immutable once created; player
/// inventories reference them by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub description: ItemDescription,
    pub item_type: ItemType,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(
        name: ItemName,
        description: ItemDescription,
        item_type: ItemType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name,
            description,
            item_type,
            created_at,
        }
    }
}

/// Category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Potion,
    Weapon,
    Armor,
    Consumable,
    Other,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Potion => write!(f, "potion"),
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Consumable => write!(f, "consumable"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "potion" => Ok(Self::Potion),
            "weapon" => Ok(Self::Weapon),
            "armor" => Ok(Self::Armor),
            "consumable" => Ok(Self::Consumable),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::parse(format!("Unknown item type: {s}"))),
        }
    }
}
