use anyhow::Context;
use maiato_config::MaiatoConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MaiatoConfig> {
    load_dotenv()?;

    let mut config = MaiatoConfig::load().context("failed to load configuration")?;
    if let Some(db) = &flags.db {
        config.database.local_path.clone_from(db);
    }
    Ok(config)
}

/// A missing `.env` is fine; a malformed one is an error.
fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(anyhow::anyhow!("failed to load .env: {error}")),
    }
}
