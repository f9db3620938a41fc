//! Enemy state and the templates enemies are spawned from.

use crate::env::RngSource;

/// Immutable definition an [`Enemy`] is spawned from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub health: u32,
    pub damage: u32,
    pub reward: u32,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, health: u32, damage: u32, reward: u32) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            reward,
        }
    }

    /// Spawns a fresh enemy at full health.
    pub fn spawn(&self) -> Enemy {
        Enemy::new(self.name.clone(), self.health, self.damage, self.reward)
    }
}

/// An opponent in a combat session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    health: u32,

    /// Damage dealt by every attack.
    pub damage: u32,

    /// Gold granted to the player that defeats this enemy.
    pub reward: u32,

    reward_claimed: bool,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: u32, damage: u32, reward: u32) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            reward,
            reward_claimed: false,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub(crate) fn set_health(&mut self, health: u32) {
        self.health = health;
    }

    pub fn reward_claimed(&self) -> bool {
        self.reward_claimed
    }

    /// Hands out the reward the first time it is called on a defeated enemy.
    ///
    /// Returns `None` while the enemy is alive or once the reward was paid.
    pub fn claim_reward(&mut self) -> Option<u32> {
        if self.health > 0 || self.reward_claimed {
            return None;
        }
        self.reward_claimed = true;
        Some(self.reward)
    }
}

/// Catalog of enemy templates encounters are drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bestiary {
    templates: Vec<EnemyTemplate>,
}

impl Bestiary {
    pub fn new(templates: Vec<EnemyTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[EnemyTemplate] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Spawns the enemy at `index`.
    pub fn spawn(&self, index: usize) -> Option<Enemy> {
        self.templates.get(index).map(EnemyTemplate::spawn)
    }

    /// Spawns a uniformly chosen enemy.
    pub fn spawn_random(&self, rng: &mut (impl RngSource + ?Sized)) -> Option<Enemy> {
        rng.index(self.templates.len())
            .and_then(|index| self.spawn(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedRng;

    fn bestiary() -> Bestiary {
        Bestiary::new(vec![
            EnemyTemplate::new("Goblin", 30, 5, 10),
            EnemyTemplate::new("Troll", 50, 10, 15),
        ])
    }

    #[test]
    fn reward_is_claimed_once_after_defeat() {
        let mut goblin = Enemy::new("Goblin", 30, 5, 10);
        assert_eq!(goblin.claim_reward(), None);

        goblin.set_health(0);
        assert_eq!(goblin.claim_reward(), Some(10));
        assert_eq!(goblin.claim_reward(), None);
        assert!(goblin.reward_claimed());
    }

    #[test]
    fn spawns_fresh_instances() {
        let bestiary = bestiary();
        let mut first = bestiary.spawn(0).unwrap();
        first.set_health(0);
        let second = bestiary.spawn(0).unwrap();
        assert_eq!(second.health(), 30);
        assert!(bestiary.spawn(2).is_none());
    }

    #[test]
    fn random_spawn_uses_rng() {
        let bestiary = bestiary();
        assert_eq!(bestiary.spawn_random(&mut FixedRng(1)).unwrap().name, "Troll");
        assert_eq!(bestiary.spawn_random(&mut FixedRng(0)).unwrap().name, "Goblin");
        assert!(Bestiary::default().spawn_random(&mut FixedRng(0)).is_none());
    }
}
