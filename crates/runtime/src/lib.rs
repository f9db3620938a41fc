//! Session orchestration on top of the adventure rules.
//!
//! `game-core` exposes the rules as borrowing, single-purpose operations.
//! This crate owns the mutable world for one player: the hero, the shops, the
//! bestiary, the enemy currently being fought and the RNG. Front ends drive a
//! [`GameSession`] and render the reports it returns.
//!
//! Every state change is logged through `tracing`.
pub mod error;
pub mod session;

pub use error::{Result, SessionError};
pub use session::{GameSession, SessionBuilder};
