//! Console client for the adventure.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig  (process settings from the environment)
//!   ├─→ logging       (per-session log file)
//!   ├─→ GameSession   (world state, built from a content directory)
//!   └─→ Console       (line-based menu over stdin/stdout)
//! ```

pub mod app;
pub mod config;
pub mod logging;

pub use app::Console;
pub use config::ClientConfig;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::GameSession;

/// Builds a session from the configured content directory and seed.
pub fn build_session(config: &ClientConfig) -> Result<GameSession> {
    let factory = ContentFactory::new(config.data_dir());
    let seed = config.seed_or_random();
    tracing::info!(data_dir = %factory.data_dir().display(), seed, "Building session");

    let session = GameSession::builder()
        .content(&factory)
        .with_context(|| format!("Failed to load content from {}", factory.data_dir().display()))?
        .seed(seed)
        .build()?;
    Ok(session)
}
