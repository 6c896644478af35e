//! Storage layer for SplitBudget
//!
//! A key-value store abstraction with a file-backed implementation using
//! atomic writes, and the persistence gateway that validates and merges
//! stored budgets.

pub mod file_io;
pub mod gateway;
pub mod merge;
pub mod store;

pub use file_io::{read_text, remove_file_if_exists, write_text_atomic};
pub use gateway::{PersistenceGateway, STORAGE_KEY};
pub use merge::{merge_with_seed, CategoryPolicy};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::SplitPaths;
use crate::error::SplitError;

/// Open the file-backed gateway under the configured data directory
pub fn open_file_gateway(paths: &SplitPaths) -> Result<PersistenceGateway<FileStore>, SplitError> {
    paths.ensure_directories()?;
    Ok(PersistenceGateway::new(FileStore::new(paths.data_dir())))
}
