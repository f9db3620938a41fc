//! Enemy bestiary loader.

use std::path::Path;

use game_core::{Bestiary, EnemyTemplate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Bestiary structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestiaryCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for the enemy bestiary from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load the bestiary from a RON file.
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a bestiary from RON text.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let catalog: BestiaryCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        Ok(Bestiary::new(catalog.enemies))
    }
}
