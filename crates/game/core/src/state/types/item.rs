//! Item-related state types.
//!
//! This module contains foundational item types:
//! - ItemHandle: Identity of one item instance inside an inventory
//! - Durability: Remaining "health" of an item
//! - Item: Weapons and consumables owned by the player or listed in shops

use std::fmt;

/// Identity of one item instance held in an inventory.
///
/// Handles are assigned by the inventory on insertion and are never reused,
/// so two copies of the same catalog item are still distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Remaining durability of an item.
///
/// Potions and other non-degrading items use [`Durability::Unbounded`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Durability {
    Finite(u32),
    Unbounded,
}

impl Durability {
    /// Returns the durability after taking `amount` wear (clamped to zero).
    pub fn worn(self, amount: u32) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(value.saturating_sub(amount)),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// Returns true once a finite durability has reached zero.
    pub fn is_broken(self) -> bool {
        matches!(self, Self::Finite(0))
    }
}

impl fmt::Display for Durability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

/// A weapon or consumable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,

    /// Damage dealt when used as a weapon.
    pub damage: u32,

    pub durability: Durability,

    /// Health restored when used as the player's healer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub restores: u32,
}

impl Item {
    /// Creates a weapon with finite durability.
    pub fn weapon(name: impl Into<String>, damage: u32, durability: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            durability: Durability::Finite(durability),
            restores: 0,
        }
    }

    /// Creates a non-degrading consumable that restores `restores` health.
    pub fn potion(name: impl Into<String>, restores: u32) -> Self {
        Self {
            name: name.into(),
            damage: 0,
            durability: Durability::Unbounded,
            restores,
        }
    }

    pub fn with_durability(mut self, durability: Durability) -> Self {
        self.durability = durability;
        self
    }

    pub fn with_restores(mut self, restores: u32) -> Self {
        self.restores = restores;
        self
    }

    /// Wears the item down by `amount`, flooring durability at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.durability = self.durability.worn(amount);
    }

    /// Damage this item contributes to an attack; broken items deal none.
    pub fn effective_damage(&self) -> u32 {
        if self.durability.is_broken() {
            0
        } else {
            self.damage
        }
    }

    /// Health this item restores when used; broken items restore none.
    pub fn effective_restores(&self) -> u32 {
        if self.durability.is_broken() {
            0
        } else {
            self.restores
        }
    }

    /// True for items that can serve as a healer.
    pub fn is_consumable(&self) -> bool {
        self.restores > 0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (damage {}, durability {}",
            self.name, self.damage, self.durability
        )?;
        if self.restores > 0 {
            write!(f, ", restores {}", self.restores)?;
        }
        f.write_str(")")
    }
}
