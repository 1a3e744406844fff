//! Init-config command implementation

use anyhow::{bail, Context as _, Result};
use std::path::Path;
use tracing::info;

use classlog::storage::config::{get_config_path, get_data_dir, save_config};
use classlog::AppConfig;

/// Write the default configuration to `path` (or the default location).
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let config = AppConfig {
        data_dir: get_data_dir(),
        ..Default::default()
    };
    save_config(&config, &path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    info!("Created configuration at {}", path.display());
    println!("Wrote {}", path.display());
    println!("Database: {}", config.database_path().display());

    Ok(())
}
