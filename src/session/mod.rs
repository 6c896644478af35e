//! Budget session
//!
//! The session owns the live budget snapshot and the persistence gateway.
//! Front ends read the snapshot, hand transforms to `update_budget`, and use
//! the data operations (clear, export, import) exposed here.

pub mod data_manager;
pub mod status;

pub use data_manager::DataManager;
pub use status::{ClearConfirmation, StatusKind, Tick, TransferStatus};

use tracing::{info, warn};

use crate::error::{ImportError, SplitResult};
use crate::export;
use crate::models::BudgetState;
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Live budget plus the gateway persisting it
#[derive(Debug)]
pub struct BudgetSession<S> {
    gateway: PersistenceGateway<S>,
    budget: BudgetState,
    is_loading: bool,
}

impl<S: KeyValueStore> BudgetSession<S> {
    /// Create a session holding the seed budget, not yet loaded
    pub fn new(gateway: PersistenceGateway<S>) -> Self {
        Self {
            gateway,
            budget: BudgetState::seed(),
            is_loading: true,
        }
    }

    /// Create a session and load the stored budget
    pub fn open(gateway: PersistenceGateway<S>) -> Self {
        let mut session = Self::new(gateway);
        session.load();
        session
    }

    /// Replace the snapshot with the stored budget (or the seed)
    pub fn load(&mut self) {
        self.budget = self.gateway.load();
        self.is_loading = false;
    }

    /// True until the initial load has finished
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Current snapshot
    pub fn budget(&self) -> &BudgetState {
        &self.budget
    }

    /// The gateway persisting this session
    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    /// Replace the snapshot with `transform(current)` and save it
    pub fn update_budget<F>(&mut self, transform: F)
    where
        F: FnOnce(&BudgetState) -> BudgetState,
    {
        self.budget = transform(&self.budget);
        self.persist();
    }

    fn persist(&self) {
        // nothing is written before the stored budget has been read
        if !self.is_loading {
            self.gateway.save(&self.budget);
        }
    }

    /// Reset to the seed and remove the stored budget
    ///
    /// The in-memory reset always happens. Returns false when the stored
    /// payload could not be removed.
    pub fn clear_budget(&mut self) -> bool {
        self.budget = BudgetState::seed();
        match self.gateway.try_clear() {
            Ok(()) => {
                info!("budget cleared");
                true
            }
            Err(e) => {
                warn!(error = %e, "budget cleared in memory only");
                false
            }
        }
    }

    /// Current snapshot as a pretty-printed JSON document
    pub fn export_data(&self) -> SplitResult<String> {
        export::export_snapshot(&self.budget)
    }

    /// Replace the snapshot with an imported document
    ///
    /// On failure the current snapshot is left unchanged.
    pub fn try_import_data(&mut self, json_text: &str) -> Result<(), ImportError> {
        let imported = export::import_snapshot(json_text)?;
        info!(expenses = imported.expense_count(), "budget imported");
        self.update_budget(|_| imported);
        Ok(())
    }

    /// Like `try_import_data`, reporting only success
    pub fn import_data(&mut self, json_text: &str) -> bool {
        match self.try_import_data(json_text) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "import rejected");
                false
            }
        }
    }
}
