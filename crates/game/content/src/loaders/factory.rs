//! Content factory for building a game world from data files.

use std::path::{Path, PathBuf};

use game_core::{Bestiary, GameConfig, Shop};

use crate::loaders::{BestiaryLoader, ConfigLoader, HeroLoader, HeroSpec, LoadResult, ShopLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── hero.ron
/// ├── shops.ron
/// └── bestiary.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data set shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::BUNDLED_DATA_DIR)
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the player's start data from `hero.ron`.
    pub fn load_hero(&self) -> LoadResult<HeroSpec> {
        let path = self.data_dir.join("hero.ron");
        HeroLoader::load(&path)
    }

    /// Load shops from `shops.ron`.
    pub fn load_shops(&self) -> LoadResult<Vec<Shop>> {
        let path = self.data_dir.join("shops.ron");
        ShopLoader::load(&path)
    }

    /// Load enemy templates from `bestiary.ron`.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        let path = self.data_dir.join("bestiary.ron");
        BestiaryLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
