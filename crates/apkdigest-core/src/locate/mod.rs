//! Package locator interface: turn an application identifier into archive paths.
//!
//! The extractor only consumes a path; how packages are found is up to the
//! locator. [`DirectoryLocator`] covers the on-disk layout of installed
//! packages, other sources can implement [`PackageLocator`] directly.

mod directory;

use std::path::PathBuf;

pub use directory::DirectoryLocator;

/// Source of candidate archives for an application.
pub trait PackageLocator {
    /// All archives that may hold `app_id`, in preference order.
    fn candidates(&self, app_id: &str) -> anyhow::Result<Vec<PathBuf>>;
}

/// Resolve `app_id` to a single archive path.
///
/// Exactly one candidate is expected. More than one is logged as a warning and
/// the first is used; none (or a locator error) is logged as an error.
pub fn resolve_archive<L>(locator: &L, app_id: &str) -> Option<PathBuf>
where
    L: PackageLocator + ?Sized,
{
    let candidates = match locator.candidates(app_id) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(app_id, "package lookup failed: {:#}", e);
            return None;
        }
    };
    let n = candidates.len();
    if n > 1 {
        tracing::warn!(app_id, candidates = n, "too many packages, using the first");
    }
    let first = candidates.into_iter().next();
    match &first {
        Some(path) => tracing::debug!(app_id, archive = %path.display(), "resolved package"),
        None => tracing::error!(app_id, "package not found"),
    }
    first
}
