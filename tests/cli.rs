use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::path::Path;
use tempfile::TempDir;

fn splitbudget(dir: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("splitbudget")?;
    cmd.env("SPLITBUDGET_DATA_DIR", dir.path())
        .env_remove("SPLITBUDGET_LOG");
    Ok(cmd)
}

/// Expense ids of a category, in stored order
fn stored_ids(dir: &Path, category: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let raw = std::fs::read_to_string(dir.join("data").join("budget-app-data.json"))?;
    let budget: serde_json::Value = serde_json::from_str(&raw)?;
    let ids = budget["categories"][category]["expenses"]
        .as_array()
        .map(|expenses| {
            expenses
                .iter()
                .filter_map(|e| e["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    Ok(ids)
}

fn add_rent_and_groceries(dir: &TempDir) -> Result<Vec<String>, Box<dyn Error>> {
    splitbudget(dir)?
        .args(["expense", "add", "needs", "Rent", "900"])
        .assert()
        .success();
    splitbudget(dir)?
        .args(["expense", "add", "needs", "Groceries", "200"])
        .assert()
        .success();
    stored_ids(dir.path(), "needs")
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack.find(needle).unwrap_or(usize::MAX)
}

#[test]
fn summary_without_income_prompts_for_it() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    splitbudget(&dir)?
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set your monthly income"));
    Ok(())
}

#[test]
fn income_and_expenses_persist_between_runs() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    splitbudget(&dir)?
        .args(["income", "set", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly income set to $2000.00"));

    splitbudget(&dir)?
        .args(["expense", "add", "needs", "Rent", "900"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Rent' ($900.00)"));

    splitbudget(&dir)?
        .args(["expense", "add", "needs", "Groceries", "200"])
        .assert()
        .success();

    assert!(dir.path().join("data").join("budget-app-data.json").exists());

    splitbudget(&dir)?
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Monthly income: $2000.00")
                .and(predicate::str::contains("Necesidades [needs] ⚠"))
                .and(predicate::str::contains("Spent $1100.00 of $1000.00"))
                .and(predicate::str::contains("Groceries")),
        );
    Ok(())
}

#[test]
fn invalid_input_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    splitbudget(&dir)?
        .args(["expense", "add", "needs", "   ", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("description cannot be empty"));

    splitbudget(&dir)?
        .args(["expense", "add", "wants", "Cinema", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    splitbudget(&dir)?
        .args(["income", "set", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));

    splitbudget(&dir)?
        .args(["expense", "add", "food", "Pizza", "10"])
        .assert()
        .failure();

    splitbudget(&dir)?
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no expenses)"));
    Ok(())
}

#[test]
fn unknown_expense_id_is_reported() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    splitbudget(&dir)?
        .args(["expense", "delete", "savings", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: deadbeef"));
    Ok(())
}

#[test]
fn export_then_import_restores_the_budget() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let backup = dir.path().join("backup.json");

    splitbudget(&dir)?
        .args(["income", "set", "1500"])
        .assert()
        .success();
    splitbudget(&dir)?
        .args(["expense", "add", "savings", "Emergency fund", "300"])
        .assert()
        .success();

    splitbudget(&dir)?
        .args(["data", "export", "--output"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data exported successfully"));
    assert!(backup.exists());

    splitbudget(&dir)?
        .args(["data", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data deleted successfully"));

    splitbudget(&dir)?
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set your monthly income"));

    splitbudget(&dir)?
        .args(["data", "import"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data imported successfully"));

    splitbudget(&dir)?
        .args(["expense", "list", "savings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emergency fund"));
    Ok(())
}

#[test]
fn import_rejects_invalid_documents() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"categories": {}}"#)?;

    splitbudget(&dir)?
        .args(["data", "import"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in a valid format"));

    splitbudget(&dir)?
        .args(["data", "import"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read the file"));
    Ok(())
}

#[test]
fn clear_can_be_declined() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    splitbudget(&dir)?
        .args(["income", "set", "800"])
        .assert()
        .success();

    splitbudget(&dir)?
        .args(["data", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    splitbudget(&dir)?
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$800.00"));
    Ok(())
}

#[test]
fn reorder_with_all_ids_changes_the_order() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ids = add_rent_and_groceries(&dir)?;
    assert_eq!(ids.len(), 2);

    let output = splitbudget(&dir)?
        .args(["expense", "reorder", "needs", ids[1].as_str(), ids[0].as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output)?;
    assert!(position(&stdout, "Groceries") < position(&stdout, "Rent"));

    assert_eq!(stored_ids(dir.path(), "needs")?, vec![ids[1].clone(), ids[0].clone()]);
    Ok(())
}

#[test]
fn reorder_rejects_duplicated_or_missing_ids() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ids = add_rent_and_groceries(&dir)?;

    splitbudget(&dir)?
        .args(["expense", "reorder", "needs", ids[0].as_str(), ids[0].as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly once"));

    splitbudget(&dir)?
        .args(["expense", "reorder", "needs", ids[1].as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly once"));

    assert_eq!(stored_ids(dir.path(), "needs")?, ids);
    Ok(())
}

#[test]
fn move_uses_one_based_positions() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ids = add_rent_and_groceries(&dir)?;

    splitbudget(&dir)?
        .args(["expense", "move", "needs", "1", "2"])
        .assert()
        .success();
    assert_eq!(stored_ids(dir.path(), "needs")?, vec![ids[1].clone(), ids[0].clone()]);

    splitbudget(&dir)?
        .args(["expense", "move", "needs", "0", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    splitbudget(&dir)?
        .args(["expense", "move", "needs", "1", "3"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn pay_toggle_and_edit_update_the_list() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let ids = add_rent_and_groceries(&dir)?;
    let rent = &ids[0][..8];
    let groceries = &ids[1][..8];

    splitbudget(&dir)?
        .args(["expense", "pay", "needs", rent])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Rent' marked as paid"));

    splitbudget(&dir)?
        .args(["expense", "toggle", "needs", groceries])
        .assert()
        .success()
        .stdout(predicate::str::contains("excluded from"));

    splitbudget(&dir)?
        .args(["expense", "edit", "needs", rent, "Rent and water", "950"])
        .assert()
        .success();

    splitbudget(&dir)?
        .args(["expense", "list", "needs"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rent and water")
                .and(predicate::str::contains("$950.00  paid"))
                .and(predicate::str::contains("$200.00  inactive")),
        );
    Ok(())
}
