//! Removed-API configuration, registry and match resolution

pub mod record;
pub mod registry;
pub mod resolver;

pub use record::{split_identifier, RemovalRecord, SplitIdentifier, NO_REPLACEMENT};
pub use registry::{RawRemoval, RemovalRegistry};
pub use resolver::{extract_candidate, find_removed_usage, report, Candidate, REMOVED_MESSAGE};
