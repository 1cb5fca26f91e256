//! Inventory quantity arithmetic.

use serde::{Deserialize, Serialize};

/// Outcome of subtracting a quantity from an inventory stack.
///
/// Removing more than the stack holds is not an error at this level:
/// the stack empties and the entry is dropped. Callers that want to
/// reject overdrafts must check before subtracting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalOutcome {
    /// Stack still holds the given quantity
    Reduced(u32),
    /// Stack was fully consumed and should be removed
    Emptied,
}

impl RemovalOutcome {
    /// Subtract `requested` from `held`, clamping overdraft to a full removal.
    pub fn subtract(held: u32, requested: u32) -> Self {
        if requested >= held {
            Self::Emptied
        } else {
            Self::Reduced(held - requested)
        }
    }

    /// True when the stack was fully consumed.
    pub fn is_emptied(&self) -> bool {
        matches!(self, Self::Emptied)
    }
}
