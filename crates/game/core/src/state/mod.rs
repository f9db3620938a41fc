//! Entity model: items, the player and enemies.
//!
//! These types are plain data holders with clamping behavior. Combat and the
//! economy mutate them only through the operations defined in this crate, so
//! health and durability can never go below zero and equipment always points
//! into the inventory.
pub mod types;

pub use types::{
    Attributes, Bestiary, Durability, Enemy, EnemyTemplate, EquipError, EquipOutcome, EquipPolicy,
    EquipSlot, Equipment, HealError, InventorySlot, InventoryState, Item, ItemHandle, Player,
    PlayerStateError,
};
