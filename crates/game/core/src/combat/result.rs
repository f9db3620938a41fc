//! Structured combat results.
//!
//! The engine reports data only; presentation layers decide how to render it.

/// Which participant of a combat session performed or received an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// One attack: who hit whom, and for how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub actor: Side,
    pub target: Side,
    pub amount: u32,
}

impl Strike {
    pub fn by(actor: Side, amount: u32) -> Self {
        Self {
            actor,
            target: actor.opponent(),
            amount,
        }
    }
}

/// State of a combat session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatStatus {
    /// Both combatants are standing.
    Ongoing,
    /// The player's health reached zero.
    PlayerDefeated,
    /// The enemy's health reached zero.
    EnemyDefeated,
}

impl CombatStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Everything that happened during one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// `None` when the round was skipped because the session was already over.
    pub player_strike: Option<Strike>,

    /// `None` when the enemy did not get to act.
    pub enemy_strike: Option<Strike>,

    /// Status after the round.
    pub status: CombatStatus,

    /// Gold credited to the player during this round.
    pub reward: Option<u32>,
}

impl RoundReport {
    pub(crate) fn skipped(status: CombatStatus) -> Self {
        Self {
            player_strike: None,
            enemy_strike: None,
            status,
            reward: None,
        }
    }

    /// True when the session was not ongoing and nothing happened.
    pub fn was_skipped(&self) -> bool {
        self.player_strike.is_none()
    }

    pub fn strikes(&self) -> impl Iterator<Item = Strike> {
        self.player_strike.into_iter().chain(self.enemy_strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strike_targets_opponent() {
        let strike = Strike::by(Side::Enemy, 5);
        assert_eq!(strike.target, Side::Player);
        assert_eq!(Side::Player.to_string(), "player");
    }

    #[test]
    fn status_display_and_terminality() {
        assert_eq!(CombatStatus::EnemyDefeated.to_string(), "enemy_defeated");
        assert!(!CombatStatus::Ongoing.is_over());
        assert!(CombatStatus::PlayerDefeated.is_over());
    }
}
