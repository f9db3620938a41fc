//! Adventure console binary.
//!
//! ```bash
//! # Bundled content, random seed
//! cargo run -p adventure-client
//!
//! # Reproducible run over custom content
//! CONTENT_DATA_DIR=./my-data ADVENTURE_SEED=7 cargo run -p adventure-client
//! ```

use std::io;

use adventure_client::{ClientConfig, Console, build_session, logging};
use anyhow::Result;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging(&config)?;

    tracing::info!("Starting adventure client");
    let session = build_session(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(session, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
