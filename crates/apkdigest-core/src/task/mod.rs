//! Background extraction and result delivery.
//!
//! Extraction is blocking file I/O, so it runs on tokio's blocking pool. The
//! result is awaited on the caller's task and handed to a [`ResultSink`] there,
//! which makes the caller's task the completion context.

mod sink;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::extract::{self, ExtractError};
use crate::locate::{self, PackageLocator};
use crate::manifest::DigestSpec;

pub use sink::{DigestSlot, ResultSink};

/// Run one extraction of `archive` on the blocking pool.
pub fn extract_in_background(
    archive: PathBuf,
    spec: DigestSpec,
) -> JoinHandle<Result<String, ExtractError>> {
    tokio::task::spawn_blocking(move || extract::try_extract_digest(&archive, &spec))
}

/// Resolve an application's archive and read its digest off the caller's task.
///
/// Holds no state between runs; each run opens its own archive.
pub struct DigestTask<L> {
    locator: Arc<L>,
    spec: DigestSpec,
}

impl<L> Clone for DigestTask<L> {
    fn clone(&self) -> Self {
        Self {
            locator: Arc::clone(&self.locator),
            spec: self.spec.clone(),
        }
    }
}

impl<L> DigestTask<L>
where
    L: PackageLocator + Send + Sync + 'static,
{
    pub fn new(locator: L, spec: DigestSpec) -> Self {
        Self {
            locator: Arc::new(locator),
            spec,
        }
    }

    pub fn spec(&self) -> &DigestSpec {
        &self.spec
    }

    /// Resolve and extract on the blocking pool, returning the reason on failure.
    pub async fn fetch(&self, app_id: &str) -> Result<String, ExtractError> {
        let locator = Arc::clone(&self.locator);
        let spec = self.spec.clone();
        let app_id = app_id.to_string();
        let joined = tokio::task::spawn_blocking(move || -> Result<String, ExtractError> {
            let archive = locate::resolve_archive(&*locator, &app_id)
                .ok_or_else(|| ExtractError::PackageNotFound(app_id.clone()))?;
            extract::try_extract_digest(&archive, &spec).map_err(|e| {
                extract::log_absence(&archive, &e);
                e
            })
        })
        .await;
        match joined {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("extraction worker failed: {}", e);
                Err(ExtractError::Worker(e))
            }
        }
    }

    /// Resolve, extract and deliver to `sink`.
    ///
    /// `on_digest` fires only on success; failures go to `on_absent`.
    pub async fn run<S>(&self, app_id: &str, sink: &mut S)
    where
        S: ResultSink + ?Sized,
    {
        match self.fetch(app_id).await {
            Ok(digest) => sink.on_digest(digest),
            Err(reason) => sink.on_absent(&reason),
        }
    }
}
