//! Attacks performed by the player and by enemies.

use crate::config::GameConfig;
use crate::env::RngSource;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Enemy, ItemHandle, Player};

use super::combatant::Combatant;

/// Errors that can occur when the player attacks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    /// No primary weapon is bound and the inventory is empty.
    #[error("no weapon available: equip a primary or carry at least one item")]
    UnavailableWeapon,
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnavailableWeapon => "ATTACK_UNAVAILABLE_WEAPON",
        }
    }
}

/// Outcome of a successful player attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    /// Item the damage was computed from.
    pub weapon: ItemHandle,

    /// Damage applied to the target.
    pub damage: u32,

    /// Durability removed from the primary weapon, `None` when no primary
    /// is bound.
    pub wear: Option<u32>,
}

impl Player {
    /// Attacks `target` with the default wear range (`0..=3`).
    ///
    /// See [`Player::attack_with_wear`].
    pub fn attack(
        &mut self,
        target: &mut impl Combatant,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<Hit, AttackError> {
        self.attack_with_wear(
            target,
            rng,
            (GameConfig::DEFAULT_WEAR_MIN, GameConfig::DEFAULT_WEAR_MAX),
        )
    }

    /// Attacks `target`.
    ///
    /// The damage source is the primary weapon, or the first inventory item
    /// when no primary is bound. After the hit only the **primary** loses a
    /// random `wear` amount of durability: an attack made with the fallback
    /// item leaves every item untouched and draws no roll.
    ///
    /// Fails with [`AttackError::UnavailableWeapon`] before touching the
    /// target when there is neither a primary nor any item.
    pub fn attack_with_wear(
        &mut self,
        target: &mut impl Combatant,
        rng: &mut (impl RngSource + ?Sized),
        (wear_min, wear_max): (u32, u32),
    ) -> Result<Hit, AttackError> {
        let primary = self.equipment().primary;
        let (weapon, damage) = match primary.and_then(|h| self.inventory().get(h).map(|i| (h, i))) {
            Some((handle, item)) => (handle, item.effective_damage()),
            None => {
                let slot = self.inventory().first().ok_or(AttackError::UnavailableWeapon)?;
                (slot.handle, slot.item.effective_damage())
            }
        };

        target.apply_damage(damage);

        let wear = primary.map(|handle| {
            let roll = rng.range(wear_min, wear_max);
            if let Some(item) = self.inventory_mut().get_mut(handle) {
                item.apply_damage(roll);
            }
            roll
        });

        Ok(Hit {
            weapon,
            damage,
            wear,
        })
    }
}

impl Enemy {
    /// Hits `target` for this enemy's fixed damage.
    ///
    /// The enemy's own health is not consulted; callers decide whether a
    /// defeated enemy may still act. Returns the damage applied.
    pub fn attack(&self, target: &mut impl Combatant) -> u32 {
        target.apply_damage(self.damage);
        self.damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRng, PcgRng};
    use crate::state::{Attributes, Durability, Item};

    fn hero() -> Player {
        Player::new(Attributes::named("Hero"), 0)
    }

    #[test]
    fn empty_handed_attack_is_rejected() {
        let mut player = hero();
        let mut goblin = Enemy::new("Goblin", 30, 5, 10);

        let result = player.attack(&mut goblin, &mut FixedRng(0));

        assert_eq!(result, Err(AttackError::UnavailableWeapon));
        assert_eq!(goblin.health(), 30);
    }

    #[test]
    fn primary_deals_damage_and_wears() {
        let mut player = hero();
        let sword = player.inventory_add(Item::weapon("Sword", 10, 5));
        assert!(player.set_primary(sword).is_equipped());
        let mut goblin = Enemy::new("Goblin", 30, 5, 10);

        let hit = player.attack(&mut goblin, &mut FixedRng(2)).unwrap();

        assert_eq!(
            hit,
            Hit {
                weapon: sword,
                damage: 10,
                wear: Some(2),
            }
        );
        assert_eq!(goblin.health(), 20);
        assert_eq!(player.primary().unwrap().durability, Durability::Finite(3));
    }

    #[test]
    fn fallback_item_is_used_but_not_worn() {
        let mut player = hero();
        let axe = player.inventory_add(Item::weapon("Axe", 15, 3));
        player.inventory_add(Item::weapon("Sword", 10, 5));
        let mut troll = Enemy::new("Troll", 50, 10, 15);

        let hit = player.attack(&mut troll, &mut FixedRng(3)).unwrap();

        assert_eq!(hit.weapon, axe);
        assert_eq!(hit.damage, 15);
        assert_eq!(hit.wear, None);
        assert_eq!(troll.health(), 35);
        assert_eq!(
            player.inventory().get(axe).unwrap().durability,
            Durability::Finite(3)
        );
    }

    #[test]
    fn broken_primary_still_attacks_for_zero() {
        let mut player = hero();
        let stick = player.inventory_add(Item::weapon("Stick", 4, 0));
        assert!(player.set_primary(stick).is_equipped());
        let mut goblin = Enemy::new("Goblin", 30, 5, 10);

        let hit = player.attack(&mut goblin, &mut FixedRng(1)).unwrap();

        assert_eq!(hit.damage, 0);
        assert_eq!(goblin.health(), 30);
    }

    #[test]
    fn wear_stays_within_range() {
        let mut player = hero();
        let sword = player.inventory_add(Item::weapon("Sword", 1, 10_000));
        assert!(player.set_primary(sword).is_equipped());
        let mut dummy = Enemy::new("Dummy", u32::MAX, 0, 0);
        let mut rng = PcgRng::new(11);

        for _ in 0..200 {
            let wear = player.attack(&mut dummy, &mut rng).unwrap().wear.unwrap();
            assert!(wear <= 3);
        }
    }

    #[test]
    fn enemy_hits_even_when_defeated() {
        let mut player = hero();
        let mut goblin = Enemy::new("Goblin", 30, 5, 10);
        goblin.apply_damage(30);
        assert!(!goblin.is_alive());

        assert_eq!(goblin.attack(&mut player), 5);
        assert_eq!(player.health(), 95);
    }
}
