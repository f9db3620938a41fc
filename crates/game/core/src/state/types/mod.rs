pub mod actor;
pub mod enemy;
pub mod item;

// Re-export all player-related types
pub use actor::{
    // Main player state
    Attributes,
    // Equipment
    EquipError,
    EquipOutcome,
    EquipPolicy,
    EquipSlot,
    Equipment,
    HealError,
    // Inventory
    InventorySlot,
    InventoryState,
    Player,
    PlayerStateError,
};

#[cfg(feature = "serde")]
pub use actor::PlayerRecord;

// Re-export enemy types
pub use enemy::{Bestiary, Enemy, EnemyTemplate};

// Re-export item types
pub use item::{Durability, Item, ItemHandle};
