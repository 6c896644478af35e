//! Persistence gateway
//!
//! All store access goes through here. Loading never fails (a bad or missing
//! payload yields the seed budget) and saving never propagates errors to the
//! caller; failures are logged and the in-memory session carries on.

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{SplitError, SplitResult};
use crate::models::BudgetState;

use super::merge::{merge_with_seed, CategoryPolicy};
use super::store::KeyValueStore;

/// Fixed key the budget is stored under
pub const STORAGE_KEY: &str = "budget-app-data";

/// Loads and saves budget snapshots through a key-value store
#[derive(Debug)]
pub struct PersistenceGateway<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    /// Create a gateway using the default storage key
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Create a gateway using a custom storage key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The key the budget is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored budget, falling back to the seed
    pub fn load(&self) -> BudgetState {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored budget, starting from seed");
                return BudgetState::seed();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored budget");
                return BudgetState::seed();
            }
        };

        let payload: Value = match serde_json::from_str(&raw) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored budget is not valid JSON");
                return BudgetState::seed();
            }
        };

        match merge_with_seed(&payload, CategoryPolicy::RequireAll) {
            Ok(state) => state,
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored budget failed validation");
                BudgetState::seed()
            }
        }
    }

    /// Serialize and store `state`, returning any failure
    pub fn try_save(&self, state: &BudgetState) -> SplitResult<()> {
        let json = serde_json::to_string(state)
            .map_err(|e| SplitError::Storage(format!("Failed to serialize budget: {}", e)))?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, bytes = json.len(), "budget saved");
        Ok(())
    }

    /// Store `state`; failures are logged, not returned
    pub fn save(&self, state: &BudgetState) {
        if let Err(e) = self.try_save(state) {
            error!(key = %self.key, error = %e, "failed to save budget");
        }
    }

    /// Remove the stored budget, returning any failure
    pub fn try_clear(&self) -> SplitResult<()> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "stored budget removed");
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, CategoryKey};
    use crate::services::mutation;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    /// Store whose writes always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> SplitResult<Option<String>> {
            Err(SplitError::Storage("unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> SplitResult<()> {
            Err(SplitError::Storage("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> SplitResult<()> {
            Err(SplitError::Storage("unavailable".into()))
        }
    }

    fn sample_state() -> BudgetState {
        let state = mutation::set_income(&BudgetState::seed(), 3200.0);
        let state = mutation::add_expense(&state, CategoryKey::Needs, "Rent", 1100.0);
        mutation::add_expense(&state, CategoryKey::Savings, "Index fund", 300.0)
    }

    #[test]
    fn test_load_absent_is_seed() {
        let gateway = PersistenceGateway::new(MemoryStore::new());
        assert_eq!(gateway.load(), BudgetState::seed());
    }

    #[test]
    fn test_save_then_load() {
        let gateway = PersistenceGateway::new(MemoryStore::new());
        let state = sample_state();

        gateway.save(&state);
        assert_eq!(gateway.load(), state);
    }

    #[test]
    fn test_load_from_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let state = sample_state();

        PersistenceGateway::new(FileStore::new(temp_dir.path().to_path_buf())).save(&state);
        let reopened = PersistenceGateway::new(FileStore::new(temp_dir.path().to_path_buf()));
        assert_eq!(reopened.load(), state);
    }

    #[test]
    fn test_load_invalid_json_is_seed() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();

        assert_eq!(PersistenceGateway::new(store).load(), BudgetState::seed());
    }

    #[test]
    fn test_load_failing_structural_check_is_seed() {
        let store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"{"monthlyIncome": 500, "categories": {"needs": {}, "wants": {}}}"#,
            )
            .unwrap();

        assert_eq!(PersistenceGateway::new(store).load(), BudgetState::seed());
    }

    #[test]
    fn test_load_string_income_is_seed() {
        let store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"{"monthlyIncome": "500", "categories": {"needs": {}, "wants": {}, "savings": {}}}"#,
            )
            .unwrap();

        assert_eq!(PersistenceGateway::new(store).load(), BudgetState::seed());
    }

    #[test]
    fn test_load_merges_legacy_category() {
        let store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"{
                    "monthlyIncome": 2000,
                    "categories": {
                        "needs": {"name": "Necesidades", "percentage": 50, "expenses": [
                            {"id": "k2j4h6", "description": "Rent", "amount": 900, "isActive": true, "isPaid": false}
                        ]},
                        "wants": {"name": "Deudas/Otros gastos", "percentage": 30, "expenses": []},
                        "savings": {"expenses": []}
                    }
                }"#,
            )
            .unwrap();

        let state = PersistenceGateway::new(store).load();
        assert_eq!(state.monthly_income, 2000.0);
        assert_eq!(state.categories.needs.expenses.len(), 1);
        assert_eq!(state.categories.needs.expenses[0].id.as_str(), "k2j4h6");
        assert_eq!(state.categories.needs.color, "#10B981");
        assert_eq!(state.categories.savings, BudgetCategory::seed(CategoryKey::Savings));
    }

    #[test]
    fn test_load_keeps_budget_with_null_fields() {
        let store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"{
                    "monthlyIncome": 2000,
                    "categories": {
                        "needs": {"color": null, "expenses": [
                            {"id": "a", "description": "Rent", "amount": 900, "isActive": true, "isPaid": false}
                        ]},
                        "wants": {},
                        "savings": {}
                    }
                }"#,
            )
            .unwrap();

        let state = PersistenceGateway::new(store).load();
        assert_eq!(state.monthly_income, 2000.0);
        assert_eq!(state.categories.needs.expenses.len(), 1);
        assert_eq!(state.categories.needs.expenses[0].description, "Rent");
        assert_eq!(state.categories.needs.color, "#10B981");
    }

    #[test]
    fn test_load_null_category_is_seed() {
        let store = MemoryStore::new();
        store
            .set(
                STORAGE_KEY,
                r#"{"monthlyIncome": 2000, "categories": {"needs": null, "wants": {}, "savings": {}}}"#,
            )
            .unwrap();

        assert_eq!(PersistenceGateway::new(store).load(), BudgetState::seed());
    }

    #[test]
    fn test_clear_removes_payload() {
        let gateway = PersistenceGateway::new(MemoryStore::new());
        gateway.save(&sample_state());

        gateway.try_clear().unwrap();
        assert_eq!(gateway.store().get(STORAGE_KEY).unwrap(), None);
        assert_eq!(gateway.load(), BudgetState::seed());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let gateway = PersistenceGateway::new(MemoryStore::new());
        gateway.save(&sample_state());

        assert!(gateway.try_clear().is_ok());
        assert!(gateway.try_clear().is_ok());
        assert_eq!(gateway.load(), BudgetState::seed());
    }

    #[test]
    fn test_failures_are_swallowed() {
        let gateway = PersistenceGateway::new(BrokenStore);

        gateway.save(&sample_state());
        assert_eq!(gateway.load(), BudgetState::seed());

        assert!(gateway.try_save(&sample_state()).is_err());
        assert!(gateway.try_clear().is_err());
    }

    #[test]
    fn test_custom_key() {
        let gateway = PersistenceGateway::with_key(MemoryStore::new(), "other");
        gateway.save(&sample_state());

        assert_eq!(gateway.key(), "other");
        assert!(gateway.store().get("other").unwrap().is_some());
        assert!(gateway.store().get(STORAGE_KEY).unwrap().is_none());
    }
}
