use bunseed_domain::DEFAULT_REGISTRY_HOST;
use url::Url;

/// Reduce a `--registry` value to the host component bun embeds in cache
/// keys. Accepts either a bare hostname or a full registry URL; the default
/// npm registry never appears in a cache key, so both of its spellings
/// normalize to `None`.
pub fn registry_suffix_host(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Bare hosts ("npm.pkg.github.com") fail URL parsing or parse without a
    // host part ("localhost:4873" reads as a scheme); both fall back to the
    // raw value minus any trailing slash.
    let host = Url::parse(trimmed)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| trimmed.trim_end_matches('/').to_string());

    if host == DEFAULT_REGISTRY_HOST {
        None
    } else {
        Some(host)
    }
}
