//! Errors surfaced by [`crate::GameSession`].
//!
//! Wraps the rule errors from `game-core` so clients can bubble every session
//! failure up through one type.
use thiserror::Error;

use game_core::{AttackError, EquipError, ErrorSeverity, GameError, HealError, ShopError};

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no shop {shop}")]
    UnknownShop { shop: String },

    #[error("bestiary has no enemies to fight")]
    EmptyBestiary,

    #[error("the player has been defeated")]
    PlayerDefeated,

    #[error("session requires a player before building")]
    MissingPlayer,

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error(transparent)]
    Attack(#[from] AttackError),

    #[error(transparent)]
    Heal(#[from] HealError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownShop { .. } => ErrorSeverity::Validation,
            Self::EmptyBestiary | Self::MissingPlayer => ErrorSeverity::Internal,
            Self::PlayerDefeated => ErrorSeverity::Recoverable,
            Self::Shop(error) => error.severity(),
            Self::Equip(error) => error.severity(),
            Self::Attack(error) => error.severity(),
            Self::Heal(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownShop { .. } => "SESSION_UNKNOWN_SHOP",
            Self::EmptyBestiary => "SESSION_EMPTY_BESTIARY",
            Self::PlayerDefeated => "SESSION_PLAYER_DEFEATED",
            Self::MissingPlayer => "SESSION_MISSING_PLAYER",
            Self::Shop(error) => error.error_code(),
            Self::Equip(error) => error.error_code(),
            Self::Attack(error) => error.error_code(),
            Self::Heal(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_codes() {
        let err = SessionError::from(AttackError::UnavailableWeapon);
        assert_eq!(err.error_code(), "ATTACK_UNAVAILABLE_WEAPON");
        assert!(err.severity().is_recoverable());
        assert_eq!(SessionError::EmptyBestiary.error_code(), "SESSION_EMPTY_BESTIARY");
    }
}
