//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Hero definition (data-driven via RON)
//! - Shop catalogs (data-driven via RON)
//! - Enemy bestiary (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! The default data set lives in this crate's `data/` directory.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BestiaryLoader, ConfigLoader, ContentFactory, HeroLoader, HeroSpec, LoadResult, ShopLoader,
    ShopSpec, StockSpec,
};

/// Directory holding the data files shipped with this crate.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
