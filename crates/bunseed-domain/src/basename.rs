//! Cache entry basename encoding.
//!
//! Reproduces bun's install-cache naming byte-for-byte. Two details look like
//! bugs and are not: the prerelease hash renders lowercase while the build
//! hash renders uppercase, and the git variant never carries the generation
//! marker or any suffix. Both are contracts of the external cache format.

use crate::specifier::{NpmSpecifier, Specifier};
use crate::wyhash;

/// Generation marker embedded in most basenames so the cache format can
/// version itself.
pub const GEN_MARKER: &str = "@@@1";

/// Host of the registry whose packages carry no registry marker.
pub const DEFAULT_REGISTRY_HOST: &str = "registry.npmjs.org";

/// Optional basename modifiers, composable independently of the base grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheSuffix<'a> {
    /// Non-default registry host, rendered as `@@host` before the marker.
    pub registry_host: Option<&'a str>,
    /// Fingerprint of the patch file contents, rendered as
    /// `_patch_hash=<hex16>` after the marker.
    pub patch_hash: Option<u64>,
}

impl CacheSuffix<'_> {
    fn render(&self) -> String {
        let mut suffix = match self.registry_host {
            Some(host) => format!("@@{host}{GEN_MARKER}"),
            None => GEN_MARKER.to_string(),
        };
        if let Some(patch_hash) = self.patch_hash {
            suffix.push_str("_patch_hash=");
            suffix.push_str(&lower_hex16(patch_hash));
        }
        suffix
    }
}

fn lower_hex16(value: u64) -> String {
    hex::encode(value.to_be_bytes())
}

fn upper_hex16(value: u64) -> String {
    hex::encode_upper(value.to_be_bytes())
}

/// Render the cache entry basename for `specifier` with `suffix`.
///
/// Deterministic: identical inputs yield byte-identical basenames, and
/// distinct `(specifier, suffix)` pairs yield distinct basenames.
pub fn cache_basename(specifier: &Specifier<'_>, suffix: &CacheSuffix<'_>) -> String {
    match specifier {
        Specifier::Npm(npm) => npm_basename(npm, suffix),
        Specifier::Tarball { url } => format!(
            "@T@{}{}",
            lower_hex16(wyhash::hash(0, url.as_bytes())),
            suffix.render()
        ),
        Specifier::Github { ident } => format!("@GH@{ident}{}", suffix.render()),
        // No marker, no registry, no patch hash. Ever.
        Specifier::Git { ident } => format!("@G@{ident}"),
    }
}

fn npm_basename(npm: &NpmSpecifier<'_>, suffix: &CacheSuffix<'_>) -> String {
    let Some(ver) = &npm.version else {
        return format!("{}{}", npm.name, suffix.render());
    };

    let mut out = format!("{}{}", npm.name, ver.core);
    if let Some(prerelease) = ver.prerelease {
        out.push('-');
        out.push_str(&lower_hex16(wyhash::hash(0, prerelease.as_bytes())));
    }
    if let Some(build) = ver.build {
        out.push('+');
        out.push_str(&upper_hex16(wyhash::hash(0, build.as_bytes())));
    }
    out.push_str(&suffix.render());
    out
}
