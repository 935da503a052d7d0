//! `apkdigest config` – show where the config lives and what it says.

use anyhow::Result;
use apkdigest_core::config::{self, ApkDigestConfig};

use crate::cli::Outcome;

pub fn run_config(cfg: &ApkDigestConfig) -> Result<Outcome> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(Outcome::Done)
}
