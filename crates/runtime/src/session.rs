//! One player's adventure: shops, encounters and equipment in one place.
//!
//! A [`GameSession`] owns all mutable world state and hands short-lived
//! borrows of it to the rules in `game-core`. Encounters persist between
//! rounds; a defeated enemy is replaced by a fresh one from the bestiary the
//! next time the player engages.

use tracing::{debug, info, warn};

use game_content::{ContentFactory, LoadResult};
use game_core::{
    Bestiary, Combat, CombatStatus, Enemy, EquipOutcome, EquipSlot, GameConfig, ItemHandle,
    ListingId, PcgRng, Player, Purchase, RngSource, RoundReport, Shop, ShopError,
};

use crate::error::{Result, SessionError};

const LOG_TARGET: &str = "runtime::session";

/// Mutable world state for a single player.
pub struct GameSession {
    config: GameConfig,
    player: Player,
    shops: Vec<Shop>,
    bestiary: Bestiary,
    encounter: Option<Enemy>,
    rng: Box<dyn RngSource>,
}

impl GameSession {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn shop(&self, index: usize) -> Option<&Shop> {
        self.shops.get(index)
    }

    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    /// The enemy currently being fought, if any.
    pub fn encounter(&self) -> Option<&Enemy> {
        self.encounter.as_ref()
    }

    /// Returns the current enemy, spawning one when there is none or the
    /// previous one was defeated.
    pub fn engage(&mut self) -> Result<&Enemy> {
        if self.is_game_over() {
            return Err(SessionError::PlayerDefeated);
        }

        let needs_spawn = self
            .encounter
            .as_ref()
            .is_none_or(|enemy| enemy.health() == 0);
        if needs_spawn {
            let enemy = self
                .bestiary
                .spawn_random(&mut *self.rng)
                .ok_or(SessionError::EmptyBestiary)?;
            info!(
                target: LOG_TARGET,
                enemy = %enemy.name,
                health = enemy.health(),
                damage = enemy.damage,
                "Enemy appears"
            );
            self.encounter = Some(enemy);
        }

        self.encounter.as_ref().ok_or(SessionError::EmptyBestiary)
    }

    /// Plays one combat round against the current enemy.
    ///
    /// A failed attack leaves the player and the enemy untouched.
    pub fn fight_round(&mut self) -> Result<RoundReport> {
        self.engage()?;
        let enemy = self.encounter.as_mut().ok_or(SessionError::EmptyBestiary)?;

        let mut combat = Combat::new(&mut self.player, enemy).with_config(&self.config);
        let report = match combat.round(&mut *self.rng) {
            Ok(report) => report,
            Err(error) => {
                warn!(target: LOG_TARGET, %error, "Attack failed");
                return Err(error.into());
            }
        };

        debug!(
            target: LOG_TARGET,
            player_strike = ?report.player_strike,
            enemy_strike = ?report.enemy_strike,
            player_health = combat.player().health(),
            enemy_health = combat.enemy().health(),
            status = %report.status,
            "Round played"
        );
        if let Some(reward) = report.reward {
            info!(
                target: LOG_TARGET,
                enemy = %combat.enemy().name,
                reward,
                gold = combat.player().gold(),
                "Enemy defeated"
            );
        }
        if report.status == CombatStatus::PlayerDefeated {
            info!(target: LOG_TARGET, enemy = %combat.enemy().name, "Player defeated");
        }

        Ok(report)
    }

    /// Buys the listing `listing` from the shop at `shop`.
    pub fn buy(&mut self, shop: usize, listing: ListingId) -> Result<Purchase> {
        let store = self
            .shops
            .get(shop)
            .ok_or_else(|| SessionError::UnknownShop {
                shop: format!("#{shop}"),
            })?;
        let purchase = store.buy(&mut self.player, listing);
        Self::log_purchase(store, &self.player, &purchase);
        Ok(purchase?)
    }

    /// Buys the first item called `item` from the shop called `shop`.
    pub fn buy_by_name(&mut self, shop: &str, item: &str) -> Result<Purchase> {
        let store = self
            .shops
            .iter()
            .find(|store| store.name() == shop)
            .ok_or_else(|| SessionError::UnknownShop {
                shop: shop.to_string(),
            })?;
        let purchase = store.buy_by_name(&mut self.player, item);
        Self::log_purchase(store, &self.player, &purchase);
        Ok(purchase?)
    }

    /// Binds an owned item to `slot`.
    ///
    /// With `strict_equipment` set, a handle the player does not own is an
    /// error; otherwise it is reported as [`EquipOutcome::Rejected`].
    pub fn equip(&mut self, slot: EquipSlot, handle: ItemHandle) -> Result<EquipOutcome> {
        let outcome = self
            .player
            .equip(slot, handle, self.config.equip_policy())?;
        match outcome {
            EquipOutcome::Equipped => {
                info!(target: LOG_TARGET, %slot, %handle, "Item equipped");
            }
            EquipOutcome::Rejected => {
                warn!(target: LOG_TARGET, %slot, %handle, "Equip ignored, item not owned");
            }
        }
        Ok(outcome)
    }

    /// Uses the bound healer. Returns the health restored.
    pub fn use_healer(&mut self) -> Result<u32> {
        if self.is_game_over() {
            return Err(SessionError::PlayerDefeated);
        }
        let restored = self.player.use_healer()?;
        info!(
            target: LOG_TARGET,
            restored,
            health = self.player.health(),
            "Healer used"
        );
        Ok(restored)
    }

    /// Walks away from the current enemy. Returns it if there was one.
    pub fn retreat(&mut self) -> Option<Enemy> {
        let enemy = self.encounter.take();
        if let Some(enemy) = &enemy {
            info!(target: LOG_TARGET, enemy = %enemy.name, "Player retreats");
        }
        enemy
    }

    pub fn is_game_over(&self) -> bool {
        self.player.health() == 0
    }

    fn log_purchase(
        store: &Shop,
        player: &Player,
        purchase: &std::result::Result<Purchase, ShopError>,
    ) {
        match purchase {
            Ok(purchase) => info!(
                target: LOG_TARGET,
                shop = store.name(),
                item = %purchase.item.name,
                price = purchase.price,
                gold = player.gold(),
                "Item purchased"
            ),
            Err(error) => debug!(target: LOG_TARGET, shop = store.name(), %error, "Purchase failed"),
        }
    }
}

/// Builder for [`GameSession`].
pub struct SessionBuilder {
    config: GameConfig,
    player: Option<Player>,
    shops: Vec<Shop>,
    bestiary: Bestiary,
    rng: Option<Box<dyn RngSource>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            player: None,
            shops: Vec::new(),
            bestiary: Bestiary::default(),
            rng: None,
        }
    }

    /// Loads config, hero, shops and bestiary from a content directory.
    pub fn content(self, factory: &ContentFactory) -> LoadResult<Self> {
        let config = factory.load_config()?;
        let player = factory.load_hero()?.into_player();
        let shops = factory.load_shops()?;
        let bestiary = factory.load_bestiary()?;
        debug!(
            target: LOG_TARGET,
            data_dir = %factory.data_dir().display(),
            shops = shops.len(),
            enemies = bestiary.len(),
            "Content loaded"
        );

        Ok(self
            .config(config)
            .player(player)
            .shops(shops)
            .bestiary(bestiary))
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the player (required)
    pub fn player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn shops(mut self, shops: Vec<Shop>) -> Self {
        self.shops = shops;
        self
    }

    pub fn bestiary(mut self, bestiary: Bestiary) -> Self {
        self.bestiary = bestiary;
        self
    }

    /// Randomness for wear and enemy selection. Defaults to `PcgRng::new(0)`.
    pub fn rng(mut self, rng: impl RngSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Seeds a [`PcgRng`].
    pub fn seed(self, seed: u64) -> Self {
        self.rng(PcgRng::new(seed))
    }

    pub fn build(self) -> Result<GameSession> {
        let player = self.player.ok_or(SessionError::MissingPlayer)?;
        info!(
            target: LOG_TARGET,
            player = player.name(),
            gold = player.gold(),
            shops = self.shops.len(),
            enemies = self.bestiary.len(),
            "Session started"
        );

        Ok(GameSession {
            config: self.config,
            player,
            shops: self.shops,
            bestiary: self.bestiary,
            encounter: None,
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRng::new(0))),
        })
    }
}
