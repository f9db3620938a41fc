//! Equipment binding for the player.
//!
//! Equipment stores handles to items in the player's inventory that fill a
//! functional role: the primary weapon and the healer consumable.

use crate::error::{ErrorSeverity, GameError};
use crate::state::types::ItemHandle;

/// Equipment state for the player.
///
/// Both slots start empty. A slot, when set, always names an item that is
/// present in the inventory; [`crate::state::Player::equip`] enforces this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently equipped weapon.
    pub primary: Option<ItemHandle>,

    /// Currently equipped consumable.
    pub healer: Option<ItemHandle>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or healer).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<ItemHandle> {
        match slot {
            EquipSlot::Primary => self.primary,
            EquipSlot::Healer => self.healer,
        }
    }

    /// Binds a handle to a slot, returning the previously bound handle if any.
    pub(crate) fn bind(&mut self, slot: EquipSlot, handle: ItemHandle) -> Option<ItemHandle> {
        match slot {
            EquipSlot::Primary => self.primary.replace(handle),
            EquipSlot::Healer => self.healer.replace(handle),
        }
    }
}

/// Functional role an inventory item can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Primary,
    Healer,
}

/// How a rejected binding is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EquipPolicy {
    /// Rejections are returned as [`EquipOutcome::Rejected`].
    #[default]
    Lenient,
    /// Rejections are returned as [`EquipError::InvalidEquipment`].
    Strict,
}

/// Result of a lenient binding attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum EquipOutcome {
    /// The item is now bound to the slot.
    Equipped,
    /// The item is not in the inventory; the slot was left unchanged.
    Rejected,
}

impl EquipOutcome {
    pub fn is_equipped(self) -> bool {
        matches!(self, Self::Equipped)
    }
}

/// Errors raised by strict equipment binding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    #[error("cannot equip {handle} as {slot}: item is not in the inventory")]
    InvalidEquipment { slot: EquipSlot, handle: ItemHandle },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEquipment { .. } => "EQUIP_INVALID_EQUIPMENT",
        }
    }
}
