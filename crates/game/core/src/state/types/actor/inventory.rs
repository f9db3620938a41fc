//! Inventory system for the player.
//!
//! Defines inventory storage and item slots. Items are kept in acquisition
//! order and are never removed; they only wear down.

use crate::state::types::{Item, ItemHandle};

/// Inventory slot containing an item instance and its identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub handle: ItemHandle,
    pub item: Item,
}

impl InventorySlot {
    pub fn new(handle: ItemHandle, item: Item) -> Self {
        Self { handle, item }
    }
}

/// Ordered collection of owned items (insertion order = acquisition order).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    slots: Vec<InventorySlot>,

    /// Next handle to hand out. Wraps after `u32::MAX` insertions.
    next_handle: u32,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an inventory from items, assigning handles in order.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut inventory = Self::empty();
        for item in items {
            inventory.insert(item);
        }
        inventory
    }

    /// Appends an item and returns the handle assigned to it.
    pub fn insert(&mut self, item: Item) -> ItemHandle {
        let handle = ItemHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.slots.push(InventorySlot::new(handle, item));
        handle
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.slots.iter().any(|slot| slot.handle == handle)
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&Item> {
        self.slots
            .iter()
            .find(|slot| slot.handle == handle)
            .map(|slot| &slot.item)
    }

    pub fn get_mut(&mut self, handle: ItemHandle) -> Option<&mut Item> {
        self.slots
            .iter_mut()
            .find(|slot| slot.handle == handle)
            .map(|slot| &mut slot.item)
    }

    /// The earliest acquired item, used as a fallback weapon.
    pub fn first(&self) -> Option<&InventorySlot> {
        self.slots.first()
    }

    /// Handle of the slot at `index` (0-based, acquisition order).
    pub fn handle_at(&self, index: usize) -> Option<ItemHandle> {
        self.slots.get(index).map(|slot| slot.handle)
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when every handle is unique and below the next one to hand out.
    pub(crate) fn is_consistent(&self) -> bool {
        self.slots.iter().enumerate().all(|(position, slot)| {
            slot.handle.0 < self.next_handle
                && self.slots[..position]
                    .iter()
                    .all(|earlier| earlier.handle != slot.handle)
        })
    }
}
