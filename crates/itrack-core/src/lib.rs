//! itrack-core: Core library for the itrack issue tracker
//!
//! Provides the data model, the store abstraction, and configuration for a
//! minimal issue tracker. No SQL, no daemon - just JSONL files.

pub mod config;
pub mod draft;
pub mod error;
pub mod id;
pub mod issue;
pub mod store;

pub use config::Config;
pub use draft::Draft;
pub use error::Error;
pub use id::generate_id;
pub use issue::{Issue, IssueUpdate, NewIssue, Status};
pub use store::{IssueStore, JsonlStore, MemoryStore};

/// Result type for itrack operations
pub type Result<T> = std::result::Result<T, Error>;
