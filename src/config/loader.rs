// Configuration loader
// Loads routing settings from a TOML file, falling back to defaults

use std::path::Path;

use anyhow::{Context, Result};

use super::settings::RoutingConfig;

/// Load configuration.
///
/// With an explicit `path`, the file must exist and parse. Without one,
/// `~/.vaultmind/router.toml` is used if present; otherwise defaults apply.
/// Every field is optional in the file, so a partial config parses.
pub fn load_config(path: Option<&Path>) -> Result<RoutingConfig> {
    if let Some(path) = path {
        return read_config_file(path);
    }

    if let Some(home) = dirs::home_dir() {
        let default_path = home.join(".vaultmind/router.toml");
        if default_path.exists() {
            return read_config_file(&default_path);
        }
    }

    Ok(RoutingConfig::default())
}

fn read_config_file(path: &Path) -> Result<RoutingConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: RoutingConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!(path = %path.display(), "Loaded routing configuration");
    Ok(config)
}
