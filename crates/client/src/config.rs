//! Process configuration for the console client.
use std::env;
use std::path::PathBuf;

/// Settings read once at startup.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `hero.ron`, `shops.ron` and
    /// `bestiary.ron`. Falls back to the data bundled with `game-content`.
    pub data_dir: Option<PathBuf>,
    /// Seed for the session RNG. Random when unset.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content data directory (default: bundled data)
    /// - `ADVENTURE_SEED` - RNG seed for reproducible runs (default: random)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `ADVENTURE_LOG_DIR` - Log directory (default: platform-specific cache dir)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from),
            seed: read_env::<u64>("ADVENTURE_SEED"),
            session_id: env::var("GAME_SESSION_ID").ok(),
            log_dir: env::var("ADVENTURE_LOG_DIR").ok().map(PathBuf::from),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(game_content::BUNDLED_DATA_DIR))
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
