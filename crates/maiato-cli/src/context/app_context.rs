use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use maiato_config::MaiatoConfig;
use maiato_db::service::MaiatoService;

use crate::notice::StderrNotifier;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: MaiatoService,
    pub config: MaiatoConfig,
}

impl AppContext {
    /// Open the configured database and wire the CLI notifier.
    pub async fn init(config: MaiatoConfig, quiet: bool) -> anyhow::Result<Self> {
        if !config.database.is_remote() {
            ensure_parent_dir(&config.database.local_path)?;
        }

        let service = MaiatoService::open(&config)
            .await
            .with_context(|| {
                if config.database.is_remote() {
                    format!("failed to open remote database {}", config.database.url)
                } else {
                    format!("failed to open database {}", config.database.local_path)
                }
            })?
            .with_notifier(Arc::new(StderrNotifier::new(quiet)));

        tracing::debug!(remote = service.db().is_remote(), "application context ready");
        Ok(Self { service, config })
    }
}

fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
