//! JSON export and import of budget snapshots
//!
//! The export document is the budget state itself, pretty-printed, so an
//! export can be imported back unchanged.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{ImportError, SplitError, SplitResult};
use crate::models::BudgetState;
use crate::storage::{merge_with_seed, CategoryPolicy};

/// Render `state` as a pretty-printed JSON document
pub fn export_snapshot(state: &BudgetState) -> SplitResult<String> {
    serde_json::to_string_pretty(state).map_err(|e| SplitError::Export(e.to_string()))
}

/// Parse an exported document back into a budget
///
/// Categories or category fields missing from the document are taken from
/// the seed budget.
pub fn import_snapshot(json_text: &str) -> Result<BudgetState, ImportError> {
    let payload: Value =
        serde_json::from_str(json_text).map_err(|e| ImportError::Malformed(e.to_string()))?;
    merge_with_seed(&payload, CategoryPolicy::FillMissing)
}

/// Suggested file name for an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("budget-backup-{}.json", date.format("%Y-%m-%d"))
}
