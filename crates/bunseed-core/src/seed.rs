use std::path::PathBuf;

use anyhow::Result;
use bunseed_domain::{cache_basename, CacheSuffix, Specifier};
use serde_json::json;
use tracing::debug;

use crate::error::SeedError;
use crate::linker::create_cache_entry;
use crate::outcome::ExecutionOutcome;
use crate::patch::patch_file_hash;
use crate::registry::registry_suffix_host;

/// One seeding run: everything the orchestrator supplies for one dependency.
#[derive(Clone, Debug)]
pub struct SeedRequest {
    pub out_root: PathBuf,
    pub specifier: String,
    pub package_path: PathBuf,
    pub patch_file: Option<PathBuf>,
    pub registry: Option<String>,
    pub dry_run: bool,
}

/// Compute the cache entry basename for the request and materialize the
/// entry (unless `dry_run`). Expected failures come back as structured
/// outcomes rather than errors; nothing here retries.
pub fn seed_cache_entry(request: &SeedRequest) -> Result<ExecutionOutcome> {
    // Patch bytes are read before any basename work so that a bad patch
    // path aborts with zero filesystem effects.
    let patch_hash = match &request.patch_file {
        Some(path) => match patch_file_hash(path) {
            Ok(hash) => Some(hash),
            Err(err) => return Ok(error_outcome(&err)),
        },
        None => None,
    };

    let registry_host = request.registry.as_deref().and_then(registry_suffix_host);
    let specifier = Specifier::classify(&request.specifier);
    let suffix = CacheSuffix {
        registry_host: registry_host.as_deref(),
        patch_hash,
    };
    let basename = cache_basename(&specifier, &suffix);
    debug!(%basename, kind = specifier.kind(), "computed cache entry basename");

    let mut details = json!({
        "specifier": request.specifier,
        "kind": specifier.kind(),
        "basename": basename,
        "package": request.package_path.display().to_string(),
    });
    if let Some(host) = &registry_host {
        details["registry_host"] = json!(host);
    }
    if let Some(hash) = patch_hash {
        details["patch_hash"] = json!(format!("{hash:016x}"));
    }

    if request.dry_run {
        return Ok(ExecutionOutcome::success(
            format!("would link {basename}"),
            details,
        ));
    }

    match create_cache_entry(&request.out_root, &basename, &request.package_path) {
        Ok(link_path) => {
            details["link"] = json!(link_path.display().to_string());
            Ok(ExecutionOutcome::success(
                format!("linked {basename}"),
                details,
            ))
        }
        Err(err) => Ok(error_outcome(&err)),
    }
}

fn error_outcome(err: &SeedError) -> ExecutionOutcome {
    let details = match err {
        SeedError::EntryExists { path } => json!({
            "path": path.display().to_string(),
            "hint": "remove the existing cache entry before re-seeding this dependency",
        }),
        SeedError::PatchRead { path, .. } => json!({
            "path": path.display().to_string(),
            "hint": "check the --patch-file path; the file must exist and be readable",
        }),
        SeedError::CreateDir { path, .. } | SeedError::Symlink { path, .. } => json!({
            "path": path.display().to_string(),
        }),
        SeedError::UnsupportedPlatform => json!({}),
    };
    if err.is_user_error() {
        ExecutionOutcome::user_error(err.to_string(), details)
    } else {
        ExecutionOutcome::failure(err.to_string(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::{seed_cache_entry, SeedRequest};
    use crate::outcome::CommandStatus;
    use std::fs;
    use std::path::PathBuf;

    fn request(out_root: PathBuf, specifier: &str, package: PathBuf) -> SeedRequest {
        SeedRequest {
            out_root,
            specifier: specifier.to_string(),
            package_path: package,
            patch_file: None,
            registry: None,
            dry_run: false,
        }
    }

    #[test]
    fn seeds_one_entry_and_reports_the_basename() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out = temp.path().join("cache");
        let package = temp.path().join("react");
        fs::create_dir_all(&package).expect("package dir");

        let outcome = seed_cache_entry(&request(out.clone(), "react@18.2.0", package.clone()))
            .expect("seed entry");
        assert_eq!(outcome.status, CommandStatus::Ok);
        assert_eq!(outcome.details["basename"], "react@18.2.0@@@1");
        assert_eq!(
            fs::read_link(out.join("react@18.2.0@@@1")).expect("read link"),
            package
        );
    }

    #[test]
    fn dry_run_computes_without_touching_the_filesystem() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out = temp.path().join("cache");
        let mut req = request(out.clone(), "react@18.2.0", temp.path().join("react"));
        req.dry_run = true;

        let outcome = seed_cache_entry(&req).expect("dry run");
        assert_eq!(outcome.status, CommandStatus::Ok);
        assert_eq!(outcome.details["basename"], "react@18.2.0@@@1");
        assert!(!out.exists(), "dry run must not create the out root");
    }

    #[test]
    fn duplicate_entry_is_a_user_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out = temp.path().join("cache");
        let package = temp.path().join("react");
        fs::create_dir_all(&package).expect("package dir");
        let req = request(out, "react@18.2.0", package);

        seed_cache_entry(&req).expect("first seed");
        let second = seed_cache_entry(&req).expect("second seed");
        assert_eq!(second.status, CommandStatus::UserError);
        assert!(second.message.contains("already exists"));
    }

    #[test]
    fn unreadable_patch_file_aborts_before_any_linking() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out = temp.path().join("cache");
        let mut req = request(out.clone(), "lodash@4.17.21", temp.path().join("lodash"));
        req.patch_file = Some(temp.path().join("missing.patch"));

        let outcome = seed_cache_entry(&req).expect("seed");
        assert_eq!(outcome.status, CommandStatus::UserError);
        assert!(!out.exists(), "failed patch read must leave no directories");
    }

    #[test]
    fn registry_and_patch_flow_into_the_basename() {
        let temp = tempfile::tempdir().expect("tempdir");
        let out = temp.path().join("cache");
        let package = temp.path().join("lodash");
        fs::create_dir_all(&package).expect("package dir");
        let patch = temp.path().join("local.patch");
        fs::write(&patch, b"+1\n").expect("write patch");

        let mut req = request(out, "lodash@4.17.21", package);
        req.registry = Some("https://npm.pkg.github.com/".to_string());
        req.patch_file = Some(patch.clone());
        let outcome = seed_cache_entry(&req).expect("seed");

        let expected_hash = bunseed_domain::wyhash::hash(
            0,
            &fs::read(&patch).expect("read patch"),
        );
        let expected = format!(
            "lodash@4.17.21@@npm.pkg.github.com@@@1_patch_hash={expected_hash:016x}"
        );
        assert_eq!(outcome.details["basename"], expected.as_str());
    }
}
