//! Combat resolution system.
//!
//! # Architecture
//!
//! - **Combatant**: the shared "take damage / report alive" capability
//! - **Attacks**: player attacks with an equipped or fallback item, enemies
//!   hit for a fixed amount
//! - **Session**: [`Combat`] drives rounds and settles the reward once
//!
//! # Core Functions
//!
//! - `Combat::round`: player turn, then enemy turn if the enemy survived
//! - `Combat::status`: ongoing / player defeated / enemy defeated
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod attack;
pub mod combatant;
pub mod damage;
pub mod result;
pub mod session;

pub use attack::{AttackError, Hit};
pub use combatant::Combatant;
pub use damage::apply_damage;
pub use result::{CombatStatus, RoundReport, Side, Strike};
pub use session::{Combat, CombatError};
