//! Use item use case.
//!
//! Consumes a quantity of an item from the player's inventory. Unlike the
//! ledger itself, the boundary rejects using more than is held.

use std::sync::Arc;

use serde::Serialize;

use questkeep_domain::{DomainError, InventoryEntry, Item, ItemId, PlayerId};

use crate::infrastructure::ports::{ClockPort, ItemRepo, PlayerRepo};

use super::error::InventoryError;

/// Outcome of consuming an item.
#[derive(Debug, Serialize)]
pub struct ItemUsage {
    pub item: Item,
    pub quantity_used: u32,
    /// Quantity still held after the use
    pub remaining: u32,
    pub inventory: Vec<InventoryEntry>,
}

pub struct UseItem {
    items: Arc<dyn ItemRepo>,
    players: Arc<dyn PlayerRepo>,
    clock: Arc<dyn ClockPort>,
}

impl UseItem {
    pub fn new(
        items: Arc<dyn ItemRepo>,
        players: Arc<dyn PlayerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            items,
            players,
            clock,
        }
    }

    pub async fn execute(
        &self,
        player_id: PlayerId,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<ItemUsage, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::Domain(DomainError::InvalidQuantity(
                quantity,
            )));
        }

        let item = self
            .items
            .get(item_id)
            .await?
            .ok_or(InventoryError::ItemNotFound(item_id))?;

        let mut player = self
            .players
            .get(player_id)
            .await?
            .ok_or(InventoryError::PlayerNotFound(player_id))?;

        let held = player.inventory_quantity(item_id);
        if held == 0 {
            return Err(InventoryError::Domain(DomainError::item_not_in_inventory(
                item_id.to_string(),
            )));
        }
        if quantity > held {
            return Err(InventoryError::InsufficientQuantity {
                held,
                requested: quantity,
            });
        }

        player.remove_from_inventory(item_id, quantity)?;
        player.updated_at = self.clock.now();
        self.players.save(&player).await?;

        tracing::debug!(
            player_id = %player_id,
            item_id = %item_id,
            quantity,
            "Item used"
        );

        Ok(ItemUsage {
            item,
            quantity_used: quantity,
            remaining: player.inventory_quantity(item_id),
            inventory: player.inventory,
        })
    }
}
