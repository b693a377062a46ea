#![deny(clippy::all, warnings)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod basename;
pub mod specifier;
pub mod wyhash;

pub use basename::{cache_basename, CacheSuffix, DEFAULT_REGISTRY_HOST, GEN_MARKER};
pub use specifier::{NpmSpecifier, Specifier, VersionFields};
