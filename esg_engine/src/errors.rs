use thiserror::Error;
use tracing::warn;

use crate::source::SourceError;

/// The unified error type for assembly operations.
///
/// Only two things can sink an assembly: the requested company not existing,
/// and the primary fetch itself failing. Every secondary fetch failure is
/// recovered at its own boundary via [`degrade`] and never reaches callers.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The requested company does not exist in the primary table. Terminal:
    /// no partial detail is produced.
    #[error("company not found: {0}")]
    NotFound(String),

    /// The primary fetch failed outright; nothing can be assembled.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Converts a failed secondary fetch into `None`, logging the loss.
///
/// The caller substitutes an empty or default-filled result for the named
/// segment; sibling fetches are unaffected.
pub(crate) fn degrade<T>(result: Result<T, SourceError>, segment: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(segment, error = %err, "fetch failed; degrading segment to empty result");
            None
        }
    }
}
