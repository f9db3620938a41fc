//! Combat session state machine.
//!
//! A [`Combat`] borrows one player and one enemy for as long as the fight is
//! driven. It keeps no state of its own: the status is derived from the two
//! health values, and the reward claim is recorded on the enemy, so dropping
//! and re-creating a session over the same pair never pays twice.

use crate::env::RngSource;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Enemy, Player};

use super::attack::AttackError;
use super::combatant::Combatant;
use super::result::{CombatStatus, RoundReport, Side, Strike};

/// Errors raised by individual turns.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The turn was requested after the session ended.
    #[error("combat is over ({status})")]
    NotOngoing { status: CombatStatus },

    #[error(transparent)]
    Attack(#[from] AttackError),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotOngoing { .. } => ErrorSeverity::Validation,
            Self::Attack(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotOngoing { .. } => "COMBAT_NOT_ONGOING",
            Self::Attack(error) => error.error_code(),
        }
    }
}

/// One player fighting one enemy.
pub struct Combat<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
    wear: (u32, u32),
}

impl<'a> Combat<'a> {
    /// Creates a new combat session with the default wear range.
    pub fn new(player: &'a mut Player, enemy: &'a mut Enemy) -> Self {
        Self {
            player,
            enemy,
            wear: (
                crate::GameConfig::DEFAULT_WEAR_MIN,
                crate::GameConfig::DEFAULT_WEAR_MAX,
            ),
        }
    }

    /// Uses the wear range from `config` for the player's primary weapon.
    pub fn with_config(mut self, config: &crate::GameConfig) -> Self {
        self.wear = config.wear_range();
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Current state of the session.
    pub fn status(&self) -> CombatStatus {
        if !self.player.is_alive() {
            CombatStatus::PlayerDefeated
        } else if !self.enemy.is_alive() {
            CombatStatus::EnemyDefeated
        } else {
            CombatStatus::Ongoing
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// The player attacks the enemy.
    ///
    /// Only valid while the session is ongoing. Settles the reward when the
    /// hit defeats the enemy.
    pub fn player_turn(
        &mut self,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<Strike, CombatError> {
        self.strike(rng).map(|(strike, _)| strike)
    }

    /// The enemy attacks the player.
    ///
    /// Only valid while both combatants are alive.
    pub fn enemy_turn(&mut self) -> Result<Strike, CombatError> {
        self.ensure_ongoing()?;
        let amount = self.enemy.attack(&mut *self.player);
        Ok(Strike::by(Side::Enemy, amount))
    }

    /// Plays one round: the player attacks, then the enemy strikes back if
    /// it is still alive.
    ///
    /// A round requested after the session ended is skipped and reports no
    /// strikes. A failed player attack leaves both combatants untouched.
    pub fn round(
        &mut self,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<RoundReport, AttackError> {
        let status = self.status();
        if status.is_over() {
            return Ok(RoundReport::skipped(status));
        }

        let (player_strike, reward) = match self.strike(rng) {
            Ok(outcome) => outcome,
            Err(CombatError::Attack(error)) => return Err(error),
            Err(CombatError::NotOngoing { status }) => return Ok(RoundReport::skipped(status)),
        };

        let enemy_strike = self.enemy.is_alive().then(|| {
            let amount = self.enemy.attack(&mut *self.player);
            Strike::by(Side::Enemy, amount)
        });

        Ok(RoundReport {
            player_strike: Some(player_strike),
            enemy_strike,
            status: self.status(),
            reward,
        })
    }

    /// Credits the enemy's reward to the player if it was just defeated.
    ///
    /// Returns the amount credited; `None` when the enemy is alive or the
    /// reward was already paid.
    pub fn settle(&mut self) -> Option<u32> {
        if self.status() != CombatStatus::EnemyDefeated {
            return None;
        }
        let reward = self.enemy.claim_reward()?;
        self.player.earn_gold(reward);
        Some(reward)
    }

    /// Player attack followed by reward settlement.
    fn strike(
        &mut self,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<(Strike, Option<u32>), CombatError> {
        self.ensure_ongoing()?;
        let hit = self
            .player
            .attack_with_wear(&mut *self.enemy, rng, self.wear)?;
        let reward = self.settle();
        Ok((Strike::by(Side::Player, hit.damage), reward))
    }

    fn ensure_ongoing(&self) -> Result<(), CombatError> {
        match self.status() {
            CombatStatus::Ongoing => Ok(()),
            status => Err(CombatError::NotOngoing { status }),
        }
    }
}
