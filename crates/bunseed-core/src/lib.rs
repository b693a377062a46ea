#![deny(clippy::all, warnings)]

mod error;
mod linker;
mod outcome;
mod patch;
mod registry;
mod seed;

pub use error::SeedError;
pub use linker::create_cache_entry;
pub use outcome::{to_json_response, CommandStatus, ExecutionOutcome};
pub use patch::patch_file_hash;
pub use registry::registry_suffix_host;
pub use seed::{seed_cache_entry, SeedRequest};
