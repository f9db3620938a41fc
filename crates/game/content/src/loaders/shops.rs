//! Shop catalog loader.

use std::path::Path;

use game_core::{Item, Shop};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One priced entry in a shop definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSpec {
    pub item: Item,
    pub price: u32,
}

/// A shop definition as written in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSpec {
    pub name: String,
    pub stock: Vec<StockSpec>,
}

impl ShopSpec {
    /// Builds the runtime shop, numbering listings in file order.
    pub fn build(self) -> Shop {
        Shop::new(
            self.name,
            self.stock.into_iter().map(|entry| (entry.item, entry.price)),
        )
    }
}

/// Shop catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub shops: Vec<ShopSpec>,
}

/// Loader for shop catalogs from RON files.
pub struct ShopLoader;

impl ShopLoader {
    /// Load every shop from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Shop>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse shops from RON text.
    ///
    /// Shop names must be unique; a duplicate is rejected so that lookups by
    /// name stay unambiguous.
    pub fn parse(content: &str) -> LoadResult<Vec<Shop>> {
        let catalog: ShopCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shop catalog RON: {}", e))?;

        let mut shops: Vec<Shop> = Vec::with_capacity(catalog.shops.len());
        for spec in catalog.shops {
            if shops.iter().any(|shop| shop.name() == spec.name) {
                anyhow::bail!("Duplicate shop name '{}'", spec.name);
            }
            shops.push(spec.build());
        }

        Ok(shops)
    }
}
