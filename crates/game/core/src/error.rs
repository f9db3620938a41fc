//! Common error infrastructure for game-core.
//!
//! This module provides the shared severity classification and the
//! [`GameError`] trait implemented by every error type in the crate.
//! Domain-specific errors (e.g., `AttackError`, `ShopError`) are defined in
//! their respective modules alongside the operations they guard.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **No Partial Effects**: A failed operation leaves player, enemy and shop untouched
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Conditions the player can fix (earn gold, buy a weapon)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry after changing the game situation.
    ///
    /// Examples: not enough gold, no weapon in inventory
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown catalog listing, item handle not in inventory
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Lowercase label used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Classification shared by every error raised by the rules.
///
/// Front ends use [`GameError::severity`] to decide whether to re-prompt and
/// [`GameError::error_code`] as a stable log field.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier such as `SHOP_INSUFFICIENT_FUNDS`.
    ///
    /// Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
