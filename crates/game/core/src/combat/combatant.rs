//! The capability shared by everything that can be hit.

use crate::state::{Enemy, Player};

use super::damage::apply_damage;

/// Anything that can take damage and report whether it is still standing.
pub trait Combatant {
    fn name(&self) -> &str;

    fn health(&self) -> u32;

    /// Subtracts `amount` from health, flooring at zero.
    fn apply_damage(&mut self, amount: u32);

    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        Player::name(self)
    }

    fn health(&self) -> u32 {
        Player::health(self)
    }

    fn apply_damage(&mut self, amount: u32) {
        let health = apply_damage(Player::health(self), amount);
        self.set_health(health);
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        Enemy::health(self)
    }

    fn apply_damage(&mut self, amount: u32) {
        let health = apply_damage(Enemy::health(self), amount);
        self.set_health(health);
    }
}
