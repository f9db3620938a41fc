//! Capabilities injected into the core by its callers.
//!
//! The rules never source randomness on their own; they borrow an
//! [`RngSource`] for each roll.

pub mod rng;

pub use rng::{FixedRng, PcgRng, RngSource};
