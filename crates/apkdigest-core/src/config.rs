use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::manifest::DigestSpec;

/// Global configuration loaded from `~/.config/apkdigest/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApkDigestConfig {
    /// Default package directory for `locate` when `--root` is not given.
    #[serde(default)]
    pub package_root: Option<PathBuf>,
    /// Manifest entry, target marker and digest header to look for.
    #[serde(default)]
    pub digest: DigestSpec,
}

impl ApkDigestConfig {
    /// Render as TOML, as written by `load_or_init`.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("apkdigest")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ApkDigestConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ApkDigestConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ApkDigestConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    if let Some(field) = cfg.digest.empty_field() {
        anyhow::bail!("{}: digest.{} must not be empty", path.display(), field);
    }
    Ok(cfg)
}
