//! Deterministic adventure rules shared by every front end.
//!
//! `game-core` defines the canonical entities (items, the player, enemies),
//! the combat engine and the shop economy. It performs no I/O: randomness is
//! borrowed through [`env::RngSource`] and every action reports plain data
//! that presentation layers render however they like.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod shop;
pub mod state;

pub use combat::{
    AttackError, Combat, CombatError, CombatStatus, Combatant, Hit, RoundReport, Side, Strike,
};
pub use config::GameConfig;
pub use env::{FixedRng, PcgRng, RngSource};
pub use error::{ErrorSeverity, GameError};
pub use shop::{Listing, ListingId, Purchase, Shop, ShopError};
pub use state::{
    Attributes, Bestiary, Durability, Enemy, EnemyTemplate, EquipError, EquipOutcome, EquipPolicy,
    EquipSlot, Equipment, HealError, InventorySlot, InventoryState, Item, ItemHandle, Player,
    PlayerStateError,
};
