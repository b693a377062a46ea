use std::fs;
use std::path::Path;

use bunseed_domain::wyhash;
use tracing::debug;

use crate::error::SeedError;

/// Fingerprint the raw bytes of a patch file the way bun fingerprints
/// patched-dependency content: whole file in memory, wyhash, seed 0.
pub fn patch_file_hash(path: &Path) -> Result<u64, SeedError> {
    debug!(path = %path.display(), "hashing patch file");
    let bytes = fs::read(path).map_err(|source| SeedError::PatchRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(wyhash::hash(0, &bytes))
}

#[cfg(test)]
mod tests {
    use super::patch_file_hash;
    use crate::error::SeedError;
    use bunseed_domain::wyhash;

    #[test]
    fn hashes_raw_file_bytes_with_seed_zero() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("fix-exports.patch");
        let contents = b"--- a/index.js\n+++ b/index.js\n";
        std::fs::write(&path, contents).expect("write patch");

        let hashed = patch_file_hash(&path).expect("hash patch");
        assert_eq!(hashed, wyhash::hash(0, contents));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("absent.patch");
        let err = patch_file_hash(&path).expect_err("should fail");
        assert!(matches!(err, SeedError::PatchRead { .. }));
        assert!(err.to_string().contains("absent.patch"));
    }

    #[test]
    fn empty_patch_file_is_valid_input() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("empty.patch");
        std::fs::write(&path, b"").expect("write patch");
        assert_eq!(
            patch_file_hash(&path).expect("hash patch"),
            wyhash::hash(0, b"")
        );
    }
}
