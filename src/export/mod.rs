//! Export module for SplitBudget
//!
//! Manual backup and restore of the whole budget as a JSON document.

pub mod json;

pub use json::{export_file_name, export_snapshot, import_snapshot};
