//! SplitBudget - Terminal 50/30/20 budgeting
//!
//! This library splits a monthly income into three fixed categories (needs,
//! wants, savings), tracks the expenses planned against each, and persists
//! the whole budget as a single JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: The budget snapshot and its parts
//! - `services`: Pure state transitions and derived totals
//! - `storage`: Key-value persistence and merge-on-load
//! - `export`: JSON backup documents
//! - `session`: The live budget and the data-management dialog
//! - `display`: Plain-text rendering
//! - `cli`: Command handlers
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use splitbudget::models::CategoryKey;
//! use splitbudget::services::mutation;
//! use splitbudget::session::BudgetSession;
//! use splitbudget::storage::{MemoryStore, PersistenceGateway};
//!
//! let mut session = BudgetSession::open(PersistenceGateway::new(MemoryStore::new()));
//! session.update_budget(|b| mutation::set_income(b, 2000.0));
//! session.update_budget(|b| mutation::add_expense(b, CategoryKey::Needs, "Rent", 900.0));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{ImportError, SplitError, SplitResult};
