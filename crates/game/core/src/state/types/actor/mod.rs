//! Player state.
//!
//! The player owns an inventory, a purse, a health meter and the equipment
//! slots that point into the inventory.

pub mod equipment;
pub mod inventory;

pub use equipment::{EquipError, EquipOutcome, EquipPolicy, EquipSlot, Equipment};
pub use inventory::{InventorySlot, InventoryState};

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::types::{Item, ItemHandle};

/// Named traits describing the player character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    /// Display name.
    pub name: String,

    /// Base (and maximum) health.
    #[cfg_attr(feature = "serde", serde(default = "default_health"))]
    pub health: u32,
}

#[cfg(feature = "serde")]
fn default_health() -> u32 {
    GameConfig::DEFAULT_PLAYER_HEALTH
}

impl Attributes {
    /// Attributes with the default base health.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: GameConfig::DEFAULT_PLAYER_HEALTH,
        }
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }
}

/// Errors raised when using the healer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealError {
    #[error("no healer equipped")]
    NoHealer,
}

impl GameError for HealError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoHealer => "HEAL_NO_HEALER",
        }
    }
}

/// A decoded player whose fields break the player invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayerStateError {
    #[error("health {health} exceeds base health {base}")]
    HealthAboveBase { health: u32, base: u32 },

    #[error("inventory handles are duplicated or ahead of the handle counter")]
    InconsistentInventory,

    #[error("{slot} slot points at {handle}, which is not in the inventory")]
    EquipmentNotOwned { slot: EquipSlot, handle: ItemHandle },
}

impl GameError for PlayerStateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HealthAboveBase { .. } => "PLAYER_HEALTH_ABOVE_BASE",
            Self::InconsistentInventory => "PLAYER_INCONSISTENT_INVENTORY",
            Self::EquipmentNotOwned { .. } => "PLAYER_EQUIPMENT_NOT_OWNED",
        }
    }
}

/// The player character.
///
/// Decoding goes through [`PlayerRecord`] and rejects states the operations
/// below could never produce.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PlayerRecord"))]
pub struct Player {
    pub attributes: Attributes,
    inventory: InventoryState,
    gold: u32,
    health: u32,
    equipment: Equipment,
}

impl Player {
    /// Creates a player at full health with an empty inventory.
    pub fn new(attributes: Attributes, gold: u32) -> Self {
        let health = attributes.health;
        Self {
            attributes,
            inventory: InventoryState::empty(),
            gold,
            health,
            equipment: Equipment::empty(),
        }
    }

    /// Creates a player that already owns `items` (no equipment bound).
    pub fn with_items(
        attributes: Attributes,
        gold: u32,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        let mut player = Self::new(attributes, gold);
        player.inventory = InventoryState::from_items(items);
        player
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.attributes.health
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn inventory(&self) -> &InventoryState {
        &self.inventory
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// The bound primary weapon, if any.
    pub fn primary(&self) -> Option<&Item> {
        self.equipment.primary.and_then(|h| self.inventory.get(h))
    }

    /// The bound healer, if any.
    pub fn healer(&self) -> Option<&Item> {
        self.equipment.healer.and_then(|h| self.inventory.get(h))
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.gold >= cost
    }

    /// Adds an item to the end of the inventory.
    pub fn inventory_add(&mut self, item: Item) -> ItemHandle {
        self.inventory.insert(item)
    }

    pub(crate) fn inventory_mut(&mut self) -> &mut InventoryState {
        &mut self.inventory
    }

    /// Deducts `cost` gold. Callers check [`Self::can_afford`] first.
    pub(crate) fn spend_gold(&mut self, cost: u32) {
        self.gold = self.gold.saturating_sub(cost);
    }

    /// Credits gold (rewards).
    pub fn earn_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub(crate) fn set_health(&mut self, health: u32) {
        self.health = health.min(self.attributes.health);
    }

    /// Restores up to `amount` health, never beyond base health.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.set_health(self.health.saturating_add(amount));
        self.health - before
    }

    /// Uses the bound healer: restores its `restores` value and wears it by
    /// [`GameConfig::HEALER_WEAR`].
    ///
    /// Returns the amount of health restored.
    pub fn use_healer(&mut self) -> Result<u32, HealError> {
        let handle = self.equipment.healer.ok_or(HealError::NoHealer)?;
        let item = self.inventory.get_mut(handle).ok_or(HealError::NoHealer)?;
        let restores = item.effective_restores();
        item.apply_damage(GameConfig::HEALER_WEAR);
        Ok(self.heal(restores))
    }

    /// Binds `handle` as the primary weapon if it is in the inventory.
    pub fn set_primary(&mut self, handle: ItemHandle) -> EquipOutcome {
        self.bind(EquipSlot::Primary, handle)
    }

    /// Binds `handle` as the healer if it is in the inventory.
    pub fn set_healer(&mut self, handle: ItemHandle) -> EquipOutcome {
        self.bind(EquipSlot::Healer, handle)
    }

    /// Binds `handle` to `slot`, reporting rejections according to `policy`.
    pub fn equip(
        &mut self,
        slot: EquipSlot,
        handle: ItemHandle,
        policy: EquipPolicy,
    ) -> Result<EquipOutcome, EquipError> {
        match (self.bind(slot, handle), policy) {
            (EquipOutcome::Rejected, EquipPolicy::Strict) => {
                Err(EquipError::InvalidEquipment { slot, handle })
            }
            (outcome, _) => Ok(outcome),
        }
    }

    fn bind(&mut self, slot: EquipSlot, handle: ItemHandle) -> EquipOutcome {
        if !self.inventory.contains(handle) {
            return EquipOutcome::Rejected;
        }
        self.equipment.bind(slot, handle);
        EquipOutcome::Equipped
    }
}

/// Unchecked wire form of [`Player`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub struct PlayerRecord {
    pub attributes: Attributes,
    pub inventory: InventoryState,
    pub gold: u32,
    pub health: u32,
    pub equipment: Equipment,
}

#[cfg(feature = "serde")]
impl TryFrom<PlayerRecord> for Player {
    type Error = PlayerStateError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        if record.health > record.attributes.health {
            return Err(PlayerStateError::HealthAboveBase {
                health: record.health,
                base: record.attributes.health,
            });
        }
        if !record.inventory.is_consistent() {
            return Err(PlayerStateError::InconsistentInventory);
        }
        for slot in [EquipSlot::Primary, EquipSlot::Healer] {
            if let Some(handle) = record.equipment.get(slot) {
                if !record.inventory.contains(handle) {
                    return Err(PlayerStateError::EquipmentNotOwned { slot, handle });
                }
            }
        }

        Ok(Self {
            attributes: record.attributes,
            inventory: record.inventory,
            gold: record.gold,
            health: record.health,
            equipment: record.equipment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Player {
        Player::new(Attributes::named("Hero"), 50)
    }

    #[cfg(feature = "serde")]
    fn record(health: u32, primary: Option<ItemHandle>) -> PlayerRecord {
        PlayerRecord {
            attributes: Attributes::named("Hero"),
            inventory: InventoryState::from_items([Item::weapon("Sword", 10, 5)]),
            gold: 0,
            health,
            equipment: Equipment {
                primary,
                healer: None,
            },
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decoding_accepts_reachable_state() {
        let player = Player::try_from(record(60, Some(ItemHandle(0)))).unwrap();
        assert_eq!(player.health(), 60);
        assert_eq!(player.primary().unwrap().name, "Sword");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decoding_rejects_broken_invariants() {
        assert_eq!(
            Player::try_from(record(150, None)),
            Err(PlayerStateError::HealthAboveBase {
                health: 150,
                base: 100
            })
        );
        assert_eq!(
            Player::try_from(record(100, Some(ItemHandle(9)))),
            Err(PlayerStateError::EquipmentNotOwned {
                slot: EquipSlot::Primary,
                handle: ItemHandle(9),
            })
        );
    }

    #[test]
    fn starts_at_base_health_with_nothing_equipped() {
        let player = Player::new(Attributes::named("Hero").with_health(80), 0);
        assert_eq!(player.health(), 80);
        assert!(player.equipment().primary.is_none());
        assert!(player.equipment().healer.is_none());
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn default_base_health_is_100() {
        assert_eq!(hero().health(), 100);
    }

    #[test]
    fn set_primary_requires_owned_item() {
        let mut player = hero();
        let sword = player.inventory_add(Item::weapon("Sword", 10, 5));

        assert_eq!(player.set_primary(ItemHandle(99)), EquipOutcome::Rejected);
        assert_eq!(player.equipment().primary, None);

        assert_eq!(player.set_primary(sword), EquipOutcome::Equipped);
        assert_eq!(player.equipment().primary, Some(sword));

        // A rejected rebind keeps the current primary.
        assert_eq!(player.set_primary(ItemHandle(99)), EquipOutcome::Rejected);
        assert_eq!(player.equipment().primary, Some(sword));
    }

    #[test]
    fn strict_policy_reports_invalid_equipment() {
        let mut player = hero();
        let result = player.equip(EquipSlot::Healer, ItemHandle(3), EquipPolicy::Strict);
        assert_eq!(
            result,
            Err(EquipError::InvalidEquipment {
                slot: EquipSlot::Healer,
                handle: ItemHandle(3),
            })
        );
        assert_eq!(player.equipment().healer, None);

        let lenient = player.equip(EquipSlot::Healer, ItemHandle(3), EquipPolicy::Lenient);
        assert_eq!(lenient, Ok(EquipOutcome::Rejected));
    }

    #[test]
    fn heal_caps_at_base_health() {
        let mut player = hero();
        player.set_health(40);
        assert_eq!(player.heal(30), 30);
        assert_eq!(player.heal(500), 30);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn use_healer_restores_and_wears() {
        let mut player = hero();
        let tonic = player.inventory_add(Item::potion("Tonic", 25).with_durability(
            crate::state::Durability::Finite(1),
        ));
        assert_eq!(player.use_healer(), Err(HealError::NoHealer));

        assert!(player.set_healer(tonic).is_equipped());
        player.set_health(50);
        assert_eq!(player.use_healer(), Ok(25));
        assert_eq!(player.health(), 75);

        // Worn out: no more healing.
        assert_eq!(player.use_healer(), Ok(0));
        assert_eq!(player.health(), 75);
    }

    #[test]
    fn spending_and_earning_gold() {
        let mut player = hero();
        assert!(player.can_afford(50));
        assert!(!player.can_afford(51));
        player.spend_gold(20);
        player.earn_gold(5);
        assert_eq!(player.gold(), 35);
    }
}
