//! Data-management dialog logic
//!
//! Export, import and clear with user-facing status messages. The dialog
//! state lives here; the budget itself stays in the `BudgetSession`.

use std::time::{Duration, Instant};

use tracing::{error, warn};

use super::status::{ClearConfirmation, Tick, TransferStatus};
use super::BudgetSession;
use crate::error::ImportError;
use crate::storage::KeyValueStore;

/// How long an import success is shown before the dialog closes
pub const IMPORT_SUCCESS_DELAY: Duration = Duration::from_secs(2);
/// How long a clear success is shown before the dialog closes
pub const CLEAR_SUCCESS_DELAY: Duration = Duration::from_secs(2);
/// How long other messages stay visible
pub const MESSAGE_DELAY: Duration = Duration::from_secs(3);

/// State of the data-management dialog
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    status: TransferStatus,
    confirmation: ClearConfirmation,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &TransferStatus {
        &self.status
    }

    pub fn confirmation(&self) -> ClearConfirmation {
        self.confirmation
    }

    /// Export the current budget, reporting the outcome in the status
    pub fn export<S: KeyValueStore>(
        &mut self,
        session: &BudgetSession<S>,
        now: Instant,
    ) -> Option<String> {
        match session.export_data() {
            Ok(json) => {
                self.status
                    .succeed("Data exported successfully", now, MESSAGE_DELAY, false);
                Some(json)
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.status.fail("Failed to export data", now, MESSAGE_DELAY);
                None
            }
        }
    }

    /// Import a document into the session, reporting the outcome
    pub fn import<S: KeyValueStore>(
        &mut self,
        session: &mut BudgetSession<S>,
        json_text: &str,
        now: Instant,
    ) -> Result<(), ImportError> {
        match session.try_import_data(json_text) {
            Ok(()) => {
                self.status
                    .succeed("Data imported successfully", now, IMPORT_SUCCESS_DELAY, true);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "import rejected");
                self.status
                    .fail("The file is not in a valid format", now, MESSAGE_DELAY);
                Err(e)
            }
        }
    }

    /// Report that the chosen file could not be read
    pub fn import_read_failed(&mut self, now: Instant) {
        self.status.fail("Failed to read the file", now, MESSAGE_DELAY);
    }

    /// First step of clearing: ask for confirmation
    pub fn request_clear(&mut self) {
        self.confirmation.request();
    }

    /// Abandon a pending clear
    pub fn cancel_clear(&mut self) {
        self.confirmation.cancel();
    }

    /// Clear the budget if a confirmation is pending
    ///
    /// Returns whether the clear happened.
    pub fn confirm_clear<S: KeyValueStore>(
        &mut self,
        session: &mut BudgetSession<S>,
        now: Instant,
    ) -> bool {
        if !self.confirmation.confirm() {
            return false;
        }

        if session.clear_budget() {
            self.status
                .succeed("All data deleted successfully", now, CLEAR_SUCCESS_DELAY, true);
        } else {
            self.status.fail(
                "Budget reset, but stored data could not be removed",
                now,
                MESSAGE_DELAY,
            );
        }
        true
    }

    /// Expire the status message if due
    pub fn tick(&mut self, now: Instant) -> Tick {
        let tick = self.status.tick(now);
        if tick != Tick::Unchanged && self.confirmation == ClearConfirmation::Cleared {
            self.confirmation.reset();
        }
        tick
    }
}
