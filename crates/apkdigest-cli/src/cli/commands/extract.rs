//! `apkdigest extract <archive>` – print the digest from one archive.

use anyhow::{Context, Result};
use apkdigest_core::manifest::DigestSpec;
use apkdigest_core::report::DigestReport;
use apkdigest_core::task;
use std::path::Path;

use crate::cli::Outcome;

/// Extracts on the blocking pool and prints the digest (or a JSON report).
pub async fn run_extract(archive: &Path, spec: &DigestSpec, json: bool) -> Result<Outcome> {
    let result = task::extract_in_background(archive.to_path_buf(), spec.clone())
        .await
        .context("extraction worker")?;

    if json {
        let report = DigestReport::from_result(&result).with_archive(archive);
        println!("{}", report.to_json()?);
        return Ok(Outcome::Done);
    }

    match result {
        Ok(digest) => {
            println!("{digest}");
            Ok(Outcome::Done)
        }
        Err(e) => {
            tracing::info!(archive = %archive.display(), "no digest: {}", e);
            eprintln!("no digest in {}: {}", archive.display(), e);
            Ok(Outcome::Absent)
        }
    }
}
