//! Priced item catalogs and the purchase transaction.
//!
//! A shop's catalog is fixed when the shop is built. Buying never removes a
//! listing; every purchase hands the buyer a fresh copy of the listed item.

use std::fmt;

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Item, ItemHandle, Player};

/// Position of a listing in its shop's catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listing#{}", self.0)
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    pub id: ListingId,
    pub item: Item,
    pub price: u32,
}

/// Errors that can occur when buying.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShopError {
    #[error("{shop} does not sell {query}")]
    ItemNotFound { shop: String, query: String },

    #[error("not enough gold: costs {price}, have {gold}")]
    InsufficientFunds { price: u32, gold: u32 },
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotFound { .. } => ErrorSeverity::Validation,
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotFound { .. } => "SHOP_ITEM_NOT_FOUND",
            Self::InsufficientFunds { .. } => "SHOP_INSUFFICIENT_FUNDS",
        }
    }
}

/// Receipt of a successful purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Purchase {
    /// Handle of the new item in the buyer's inventory.
    pub handle: ItemHandle,
    pub item: Item,
    pub price: u32,
}

/// A named shop with an immutable catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shop {
    name: String,
    catalog: Vec<Listing>,
}

impl Shop {
    /// Builds a shop, numbering listings in the given order.
    ///
    /// Listing ids are `u32`; stock past the last representable id is dropped.
    pub fn new(name: impl Into<String>, stock: impl IntoIterator<Item = (Item, u32)>) -> Self {
        let catalog = stock
            .into_iter()
            .zip(0..=u32::MAX)
            .map(|((item, price), index)| Listing {
                id: ListingId(index),
                item,
                price,
            })
            .collect();
        Self {
            name: name.into(),
            catalog,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All listings in catalog order.
    pub fn listings(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn listing(&self, id: ListingId) -> Option<&Listing> {
        self.catalog.iter().find(|listing| listing.id == id)
    }

    /// First listing whose item has the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Listing> {
        self.catalog.iter().find(|listing| listing.item.name == name)
    }

    pub fn price_of(&self, id: ListingId) -> Option<u32> {
        self.listing(id).map(|listing| listing.price)
    }

    /// Sells a copy of the listed item to `player`.
    ///
    /// All checks run before anything is touched: on error the player's gold
    /// and inventory are unchanged. On success the price is deducted and the
    /// item appended in one step.
    pub fn buy(&self, player: &mut Player, id: ListingId) -> Result<Purchase, ShopError> {
        let listing = self.listing(id).ok_or_else(|| ShopError::ItemNotFound {
            shop: self.name.clone(),
            query: id.to_string(),
        })?;
        self.sell(player, listing)
    }

    /// Like [`Shop::buy`], looking the listing up by item name.
    pub fn buy_by_name(&self, player: &mut Player, name: &str) -> Result<Purchase, ShopError> {
        let listing = self
            .find_by_name(name)
            .ok_or_else(|| ShopError::ItemNotFound {
                shop: self.name.clone(),
                query: name.to_string(),
            })?;
        self.sell(player, listing)
    }

    fn sell(&self, player: &mut Player, listing: &Listing) -> Result<Purchase, ShopError> {
        if !player.can_afford(listing.price) {
            return Err(ShopError::InsufficientFunds {
                price: listing.price,
                gold: player.gold(),
            });
        }

        player.spend_gold(listing.price);
        let handle = player.inventory_mut().insert(listing.item.clone());

        Ok(Purchase {
            handle,
            item: listing.item.clone(),
            price: listing.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Attributes;

    fn blacksmith() -> Shop {
        Shop::new(
            "Blacksmith",
            [
                (Item::weapon("Sword", 10, 5), 20),
                (Item::weapon("Axe", 15, 3), 30),
                (Item::weapon("Ax", 0, 3), 5),
            ],
        )
    }

    #[test]
    fn buying_sword_with_fifty_gold() {
        let shop = blacksmith();
        let mut player = Player::new(Attributes::named("Hero"), 50);

        let purchase = shop.buy(&mut player, ListingId(0)).unwrap();

        assert_eq!(purchase.price, 20);
        assert_eq!(purchase.item.name, "Sword");
        assert_eq!(player.gold(), 30);
        let names: Vec<&str> = player
            .inventory()
            .iter()
            .map(|slot| slot.item.name.as_str())
            .collect();
        assert_eq!(names, ["Sword"]);
        assert_eq!(player.inventory().slots()[0].handle, purchase.handle);
    }

    #[test]
    fn unaffordable_purchase_changes_nothing() {
        let shop = blacksmith();
        let mut player = Player::new(Attributes::named("Hero"), 25);

        let result = shop.buy(&mut player, ListingId(1));

        assert_eq!(
            result,
            Err(ShopError::InsufficientFunds { price: 30, gold: 25 })
        );
        assert_eq!(player.gold(), 25);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn exact_funds_are_enough() {
        let shop = blacksmith();
        let mut player = Player::new(Attributes::named("Hero"), 30);
        shop.buy(&mut player, ListingId(1)).unwrap();
        assert_eq!(player.gold(), 0);
    }

    #[test]
    fn unknown_listing_is_not_found() {
        let shop = blacksmith();
        let mut player = Player::new(Attributes::named("Hero"), 100);

        let by_id = shop.buy(&mut player, ListingId(9));
        assert!(matches!(by_id, Err(ShopError::ItemNotFound { .. })));

        let by_name = shop.buy_by_name(&mut player, "Bow");
        assert_eq!(
            by_name,
            Err(ShopError::ItemNotFound {
                shop: "Blacksmith".into(),
                query: "Bow".into(),
            })
        );
        assert_eq!(player.gold(), 100);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn catalog_survives_repeat_purchases() {
        let shop = blacksmith();
        let mut player = Player::new(Attributes::named("Hero"), 100);

        let first = shop.buy_by_name(&mut player, "Ax").unwrap();
        let second = shop.buy_by_name(&mut player, "Ax").unwrap();

        assert_ne!(first.handle, second.handle);
        assert_eq!(player.gold(), 90);
        assert_eq!(player.inventory().len(), 2);
        assert_eq!(shop.listings().len(), 3);
        assert_eq!(shop.price_of(ListingId(2)), Some(5));
    }

    #[test]
    fn listing_ids_follow_catalog_order() {
        let shop = blacksmith();
        let ids: Vec<ListingId> = shop.listings().iter().map(|listing| listing.id).collect();
        assert_eq!(ids, [ListingId(0), ListingId(1), ListingId(2)]);
        assert_eq!(shop.listing(ListingId(1)).unwrap().item.name, "Axe");
    }

    #[test]
    fn error_codes() {
        let err = ShopError::InsufficientFunds { price: 1, gold: 0 };
        assert_eq!(err.error_code(), "SHOP_INSUFFICIENT_FUNDS");
        assert!(err.severity().is_recoverable());
    }
}
