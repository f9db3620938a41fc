//! Player start data loader.

use std::path::Path;

use game_core::{Attributes, Item, Player};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Starting state of the player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSpec {
    pub attributes: Attributes,
    pub gold: u32,

    /// Items the hero starts with, in inventory order.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl HeroSpec {
    pub fn into_player(self) -> Player {
        Player::with_items(self.attributes, self.gold, self.items)
    }
}

/// Loader for the hero definition from RON files.
pub struct HeroLoader;

impl HeroLoader {
    pub fn load(path: &Path) -> LoadResult<HeroSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<HeroSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse hero RON: {}", e))
    }
}
