//! Field-level merge of stored or imported payloads over the seed budget
//!
//! Older payloads may lack category fields (e.g. `color`). Each category in
//! the payload is laid over the seed category of the same key, field by
//! field, so whatever the payload does carry survives.

use serde_json::{Map, Value};

use crate::error::ImportError;
use crate::models::{BudgetCategory, BudgetState, Categories, CategoryKey};

/// How strictly the `categories` object is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPolicy {
    /// All three category keys must be present (stored payloads)
    RequireAll,
    /// Missing categories fall back to their seed (imports)
    FillMissing,
}

/// Validate `payload` and merge it over the seed budget
pub fn merge_with_seed(payload: &Value, policy: CategoryPolicy) -> Result<BudgetState, ImportError> {
    let monthly_income = payload
        .get("monthlyIncome")
        .and_then(Value::as_f64)
        .ok_or(ImportError::MissingIncome)?;

    let categories = payload
        .get("categories")
        .and_then(Value::as_object)
        .ok_or(ImportError::MissingCategories)?;

    if policy == CategoryPolicy::RequireAll {
        if let Some(key) = CategoryKey::ALL
            .into_iter()
            .find(|key| !categories.get(key.as_str()).is_some_and(Value::is_object))
        {
            return Err(ImportError::InvalidCategory {
                key,
                reason: "missing or not an object".into(),
            });
        }
    }

    Ok(BudgetState {
        monthly_income,
        categories: Categories {
            needs: merge_category(categories, CategoryKey::Needs)?,
            wants: merge_category(categories, CategoryKey::Wants)?,
            savings: merge_category(categories, CategoryKey::Savings)?,
        },
    })
}

fn merge_category(
    categories: &Map<String, Value>,
    key: CategoryKey,
) -> Result<BudgetCategory, ImportError> {
    let invalid = |reason: String| ImportError::InvalidCategory { key, reason };

    let seed = BudgetCategory::seed(key);
    let Some(overlay) = categories.get(key.as_str()).and_then(Value::as_object) else {
        // absent, or not an object: nothing to lay over the seed
        return Ok(seed);
    };

    let mut merged = match serde_json::to_value(&seed).map_err(|e| invalid(e.to_string()))? {
        Value::Object(fields) => fields,
        _ => return Err(invalid("seed category is not an object".into())),
    };

    // null fields count as absent and keep the seed value
    for (field, value) in overlay.iter().filter(|(_, v)| !v.is_null()) {
        merged.insert(field.clone(), value.clone());
    }

    serde_json::from_value(Value::Object(merged)).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload() {
        let state = BudgetState::seed();
        let payload = serde_json::to_value(&state).unwrap();

        let merged = merge_with_seed(&payload, CategoryPolicy::RequireAll).unwrap();
        assert_eq!(merged, state);
    }

    #[test]
    fn test_missing_fields_come_from_seed() {
        let payload = json!({
            "monthlyIncome": 1500,
            "categories": {
                "needs": { "name": "Essentials" },
                "wants": {},
                "savings": { "expenses": [] }
            }
        });

        let merged = merge_with_seed(&payload, CategoryPolicy::RequireAll).unwrap();
        assert_eq!(merged.monthly_income, 1500.0);
        assert_eq!(merged.categories.needs.name, "Essentials");
        assert_eq!(merged.categories.needs.percentage, 50.0);
        assert_eq!(merged.categories.wants, BudgetCategory::seed(CategoryKey::Wants));
        assert_eq!(merged.categories.savings, BudgetCategory::seed(CategoryKey::Savings));
    }

    #[test]
    fn test_require_all_rejects_missing_category() {
        let payload = json!({
            "monthlyIncome": 10,
            "categories": { "needs": {}, "wants": {} }
        });

        let err = merge_with_seed(&payload, CategoryPolicy::RequireAll).unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidCategory { key: CategoryKey::Savings, .. }
        ));

        let merged = merge_with_seed(&payload, CategoryPolicy::FillMissing).unwrap();
        assert_eq!(merged.categories.savings, BudgetCategory::seed(CategoryKey::Savings));
    }

    #[test]
    fn test_non_numeric_income() {
        let payload = json!({ "monthlyIncome": "1000", "categories": {} });
        assert_eq!(
            merge_with_seed(&payload, CategoryPolicy::FillMissing),
            Err(ImportError::MissingIncome)
        );
    }

    #[test]
    fn test_missing_categories() {
        let payload = json!({ "monthlyIncome": 1000 });
        assert_eq!(
            merge_with_seed(&payload, CategoryPolicy::FillMissing),
            Err(ImportError::MissingCategories)
        );

        let payload = json!({ "monthlyIncome": 1000, "categories": [] });
        assert_eq!(
            merge_with_seed(&payload, CategoryPolicy::FillMissing),
            Err(ImportError::MissingCategories)
        );
    }

    #[test]
    fn test_non_object_category_uses_seed() {
        let payload = json!({
            "monthlyIncome": 0,
            "categories": { "needs": 5, "wants": {}, "savings": {} }
        });

        let merged = merge_with_seed(&payload, CategoryPolicy::FillMissing).unwrap();
        assert_eq!(merged.categories.needs, BudgetCategory::seed(CategoryKey::Needs));
    }

    #[test]
    fn test_require_all_rejects_null_category() {
        let payload = json!({
            "monthlyIncome": 2000,
            "categories": { "needs": null, "wants": {}, "savings": {} }
        });

        let err = merge_with_seed(&payload, CategoryPolicy::RequireAll).unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidCategory { key: CategoryKey::Needs, .. }
        ));
    }

    #[test]
    fn test_null_fields_keep_seed_values() {
        let payload = json!({
            "monthlyIncome": 2000,
            "categories": {
                "needs": {
                    "color": null,
                    "icon": null,
                    "expenses": [{ "id": "a", "description": "Rent", "amount": 900 }]
                },
                "wants": { "expenses": null },
                "savings": {}
            }
        });

        let merged = merge_with_seed(&payload, CategoryPolicy::RequireAll).unwrap();
        let needs = &merged.categories.needs;
        assert_eq!(needs.color, "#10B981");
        assert_eq!(needs.icon, "home");
        assert_eq!(needs.expenses.len(), 1);
        assert_eq!(needs.expenses[0].description, "Rent");
        assert!(merged.categories.wants.expenses.is_empty());
    }

    #[test]
    fn test_wrongly_typed_field() {
        let payload = json!({
            "monthlyIncome": 0,
            "categories": { "needs": { "expenses": "lots" } }
        });

        let err = merge_with_seed(&payload, CategoryPolicy::FillMissing).unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidCategory { key: CategoryKey::Needs, .. }
        ));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let payload = json!({
            "monthlyIncome": 0,
            "version": 3,
            "categories": { "needs": { "budgetLimit": 12 }, "wants": {}, "savings": {} }
        });

        assert!(merge_with_seed(&payload, CategoryPolicy::RequireAll).is_ok());
    }
}
