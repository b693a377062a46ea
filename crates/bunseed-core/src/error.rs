use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures a seeding run can hit. All of them are fatal: the invoking
/// orchestrator owns retries (and, for `EntryExists`, must remove the
/// conflicting link first).
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read patch file {path}: {source}")]
    PatchRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create cache entry parent {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cache entry already exists: {path}")]
    EntryExists { path: PathBuf },
    #[error("failed to create cache entry link {path}: {source}")]
    Symlink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("directory symlinks are not supported on this platform")]
    UnsupportedPlatform,
}

impl SeedError {
    /// Errors the caller can fix without touching this tool: a bad patch
    /// path, or a leftover entry from an earlier run.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SeedError::PatchRead { .. } | SeedError::EntryExists { .. }
        )
    }
}
