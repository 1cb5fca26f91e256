//! Inventory use cases.

pub mod error;
pub mod use_item;

pub use error::InventoryError;
pub use use_item::{ItemUsage, UseItem};

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, ItemRepo, PlayerRepo};

pub struct InventoryUseCases {
    pub use_item: UseItem,
}

impl InventoryUseCases {
    pub fn new(
        items: Arc<dyn ItemRepo>,
        players: Arc<dyn PlayerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            use_item: UseItem::new(items, players, clock),
        }
    }
}
