/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Minimum durability lost by the primary weapon per attack (inclusive).
    pub wear_min: u32,

    /// Maximum durability lost by the primary weapon per attack (inclusive).
    pub wear_max: u32,

    /// When set, equipping an item that is not in the inventory is reported
    /// as an error instead of being ignored.
    pub strict_equipment: bool,
}

impl GameConfig {
    // ===== fixed rules =====
    /// Base health used when the player's attributes do not define one.
    pub const DEFAULT_PLAYER_HEALTH: u32 = 100;
    /// Durability lost by a healer each time it is used.
    pub const HEALER_WEAR: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WEAR_MIN: u32 = 0;
    pub const DEFAULT_WEAR_MAX: u32 = 3;

    pub fn new() -> Self {
        Self {
            wear_min: Self::DEFAULT_WEAR_MIN,
            wear_max: Self::DEFAULT_WEAR_MAX,
            strict_equipment: false,
        }
    }

    pub fn with_strict_equipment(mut self, strict: bool) -> Self {
        self.strict_equipment = strict;
        self
    }

    /// Inclusive wear range, normalized so that `min <= max`.
    pub fn wear_range(&self) -> (u32, u32) {
        if self.wear_min <= self.wear_max {
            (self.wear_min, self.wear_max)
        } else {
            (self.wear_max, self.wear_min)
        }
    }

    /// Equipment policy derived from `strict_equipment`.
    pub fn equip_policy(&self) -> crate::state::EquipPolicy {
        if self.strict_equipment {
            crate::state::EquipPolicy::Strict
        } else {
            crate::state::EquipPolicy::Lenient
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
