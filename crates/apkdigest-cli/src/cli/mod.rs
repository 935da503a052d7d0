//! CLI for apkdigest.

mod commands;

use anyhow::Result;
use apkdigest_core::config;
use apkdigest_core::manifest::DigestSpec;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_config, run_extract, run_locate};

/// Top-level CLI for apkdigest.
#[derive(Debug, Parser)]
#[command(name = "apkdigest")]
#[command(about = "apkdigest: read the classes.dex digest from an APK manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the configured manifest entry, marker and digest header.
#[derive(Debug, Default, Args)]
pub struct SpecArgs {
    /// Manifest member inside the archive (default META-INF/MANIFEST.MF).
    #[arg(long, value_name = "PATH")]
    pub entry: Option<String>,
    /// Substring marking the section of interest (default classes.dex).
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,
    /// Prefix of the digest line (default "SHA1-Digest: ").
    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,
}

impl SpecArgs {
    /// Apply the overrides on top of `base`.
    pub fn apply(&self, base: &DigestSpec) -> DigestSpec {
        DigestSpec {
            manifest_entry: self.entry.clone().unwrap_or_else(|| base.manifest_entry.clone()),
            target_marker: self.marker.clone().unwrap_or_else(|| base.target_marker.clone()),
            digest_header: self.header.clone().unwrap_or_else(|| base.digest_header.clone()),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the digest recorded for the target marker in an archive's manifest.
    Extract {
        /// Path to the APK (or any zip with a JAR-style manifest).
        archive: PathBuf,
        #[command(flatten)]
        spec: SpecArgs,
        /// Print a JSON report instead of the bare digest.
        #[arg(long)]
        json: bool,
    },

    /// Find an installed package by application id and print its digest.
    Locate {
        /// Application identifier, e.g. net.example.app.
        app_id: String,
        /// Package directory to search (default: package_root from config).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        #[command(flatten)]
        spec: SpecArgs,
        /// Print a JSON report instead of the bare digest.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file path and effective settings.
    Config,
}

/// How a command ended, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// No digest was produced.
    Absent,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract {
                archive,
                spec,
                json,
            } => run_extract(&archive, &spec.apply(&cfg.digest), json).await,
            CliCommand::Locate {
                app_id,
                root,
                spec,
                json,
            } => {
                let root = root.or_else(|| cfg.package_root.clone()).ok_or_else(|| {
                    anyhow::anyhow!("no package directory: pass --root or set package_root in config")
                })?;
                run_locate(&app_id, &root, &spec.apply(&cfg.digest), json).await
            }
            CliCommand::Config => run_config(&cfg),
        }
    }
}

#[cfg(test)]
mod tests;
