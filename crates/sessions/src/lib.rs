//! Session lookup for imaging-locator.
//!
//! Structured session keys and read-only access to the pipeline's
//! session → directory table, either in memory or from a JSON export.

pub mod json_store;
pub mod session_key;
pub mod store;

pub use json_store::JsonDirectoryStore;
pub use session_key::{ParseSessionKeyError, SessionKey};
pub use store::{DirectoryStore, LookupError, MemoryDirectoryStore, SessionDirectoryRecord};
