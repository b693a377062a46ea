use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SeedError;

/// Create the cache entry for `basename` under `out_root` as a directory
/// symlink pointing verbatim at `package_path`.
///
/// Scoped basenames contain a `/`. Every ancestor is created as a real
/// directory and only the leaf is a symlink; bun's cache walker expects
/// scope directories to be real and resolves only the leaf as a link.
/// Directory creation is idempotent, the leaf is not: an existing entry
/// fails the whole operation and nothing is rolled back.
pub fn create_cache_entry(
    out_root: &Path,
    basename: &str,
    package_path: &Path,
) -> Result<PathBuf, SeedError> {
    let link_path = out_root.join(basename);
    if let Some(parent) = link_path.parent() {
        debug!(parent = %parent.display(), "ensuring cache entry parent");
        fs::create_dir_all(parent).map_err(|source| SeedError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    debug!(
        link = %link_path.display(),
        target = %package_path.display(),
        "creating cache entry link"
    );
    symlink_dir(package_path, &link_path)?;
    Ok(link_path)
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> Result<(), SeedError> {
    use std::os::unix::fs::symlink;
    symlink(target, link).map_err(|source| link_error(link, source))
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> Result<(), SeedError> {
    use std::os::windows::fs::symlink_dir as windows_symlink_dir;
    windows_symlink_dir(target, link).map_err(|source| link_error(link, source))
}

#[cfg(not(any(unix, windows)))]
fn symlink_dir(target: &Path, link: &Path) -> Result<(), SeedError> {
    let _ = (target, link);
    Err(SeedError::UnsupportedPlatform)
}

fn link_error(link: &Path, source: io::Error) -> SeedError {
    if source.kind() == io::ErrorKind::AlreadyExists {
        SeedError::EntryExists {
            path: link.to_path_buf(),
        }
    } else {
        SeedError::Symlink {
            path: link.to_path_buf(),
            source,
        }
    }
}
