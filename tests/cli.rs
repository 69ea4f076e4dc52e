use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::{
    prelude::PredicateBooleanExt,
    str::{contains, starts_with},
};
use tempfile::TempDir;

const BIN_NAME: &str = "finance";

fn finance(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env_remove("RUST_LOG")
        .env_remove("FINANCE_TRACKER_DB")
        .arg("--db-path")
        .arg(db_path);
    cmd
}

fn add(db_path: &Path, date: &str, amount: &str, category: &str, description: &str) {
    finance(db_path)
        .args(["add", "--date", date])
        .arg(format!("--amount={amount}"))
        .args(["--category", category, "--description", description])
        .assert()
        .success()
        .stdout(starts_with("Added transaction #"));
}

#[test]
fn added_transactions_are_listed_newest_first() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    add(&db_path, "2024-01-05", "1000", "Income", "salary");
    add(&db_path, "2024-01-10", "-200.50", "Groceries", "weekly shop");

    let output = finance(&db_path).arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let groceries = stdout.find("Groceries").expect("groceries row listed");
    let income = stdout.find("salary").expect("income row listed");
    assert!(groceries < income, "expected newest first, got:\n{stdout}");
    assert!(stdout.contains("-200.50"), "got:\n{stdout}");
    assert!(stdout.contains("1000.00"), "got:\n{stdout}");
}

#[test]
fn database_path_can_come_from_the_environment() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("from_env.db");

    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .env_remove("RUST_LOG")
        .env("FINANCE_TRACKER_DB", &db_path)
        .args(["add", "--date", "2024-03-01", "--amount", "5", "--category", "Other"])
        .assert()
        .success();

    assert!(db_path.is_file());
}

#[test]
fn invalid_date_fails_without_storing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    finance(&db_path)
        .args(["add", "--date", "2024-13-01", "--amount", "5"])
        .assert()
        .failure()
        .stderr(contains("is not a valid date"));

    finance(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions."));
}

#[test]
fn invalid_amount_fails() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    finance(&db_path)
        .args(["add", "--date", "2024-01-01", "--amount", "abc"])
        .assert()
        .failure()
        .stderr(contains("is not a valid amount"));
}

#[test]
fn monthly_totals_as_json() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    add(&db_path, "2024-01-05", "1000", "Income", "salary");
    add(&db_path, "2024-01-10", "-200.50", "Groceries", "");
    add(&db_path, "2024-02-01", "-50", "Groceries", "");

    finance(&db_path)
        .args(["totals", "--year", "2024", "--month", "1", "--json"])
        .assert()
        .success()
        .stdout(
            contains("\"Groceries\": -200.5")
                .and(contains("\"Income\": 1000.0"))
                .and(contains("-50").not()),
        );

    finance(&db_path)
        .args(["split", "--year", "2024", "--month", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"Income\": 1000.0").and(contains("\"Expense\": 200.5")));
}

#[test]
fn reports_for_empty_periods_say_so() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    add(&db_path, "2024-01-05", "1000", "Income", "salary");

    finance(&db_path)
        .args(["totals", "--year", "2023"])
        .assert()
        .success()
        .stdout(contains("No transactions for that year."));

    finance(&db_path)
        .args(["split", "--year", "2024", "--month", "6"])
        .assert()
        .success()
        .stdout(contains("No transactions for that month."));
}

#[test]
fn month_out_of_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    finance(&db_path)
        .args(["totals", "--year", "2024", "--month", "13"])
        .assert()
        .failure();
}

#[test]
fn import_skips_bad_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");
    let csv_path = dir.path().join("import.csv");
    fs::write(
        &csv_path,
        "t_date,amount,category,description\n\
         2024-02-01,abc,Food,bad\n\
         2024-02-02,12.5,Food,lunch\n",
    )
    .unwrap();

    finance(&db_path)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Imported 1 rows."));

    finance(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("lunch").and(contains("bad").not()));
}

#[test]
fn export_writes_header_and_rows_oldest_first() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");
    let csv_path = dir.path().join("export.csv");

    add(&db_path, "2024-01-10", "-200.50", "Groceries", "");
    add(&db_path, "2024-01-05", "1000", "Income", "salary");

    finance(&db_path)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Exported 2 rows to"));

    let contents = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "t_date,amount,category,description",
            "2024-01-05,1000,Income,salary",
            "2024-01-10,-200.5,Groceries,",
        ]
    );
}

#[test]
fn update_and_delete_by_id() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    add(&db_path, "2024-01-10", "-20", "Food", "lunch");

    finance(&db_path)
        .args(["update", "1", "--date", "2024-01-11", "--amount=-25"])
        .args(["--category", "Dining", "--description", "dinner"])
        .assert()
        .success();

    finance(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-01-11").and(contains("dinner")).and(contains("lunch").not()));

    finance(&db_path)
        .args(["delete", "1", "42"])
        .assert()
        .success();

    finance(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions."));
}

#[test]
fn chart_writes_html_report() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");
    let html_path = dir.path().join("report.html");

    add(&db_path, "2024-01-05", "1000", "Income", "salary");
    add(&db_path, "2024-01-10", "-200.50", "Groceries", "");

    finance(&db_path)
        .args(["chart", "--year", "2024", "--output"])
        .arg(&html_path)
        .assert()
        .success()
        .stdout(contains("Wrote"));

    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"), "got {html}");
    assert!(html.contains("category-totals-chart"));
}

#[test]
fn categories_lists_suggestions() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    finance(&db_path)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Other")));
}

#[test]
fn unpadded_dates_in_existing_database_are_listed_and_exported() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");
    let csv_path = dir.path().join("export.csv");

    add(&db_path, "2024-01-02", "1", "Income", "");
    rusqlite::Connection::open(&db_path)
        .unwrap()
        .execute(
            "INSERT INTO transactions (t_date, amount, category, description) VALUES ('2024-1-5', -2.0, 'Dining', '')",
            (),
        )
        .unwrap();

    finance(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2024-01-05").and(contains("Dining")));

    finance(&db_path)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Exported 2 rows to"));

    let contents = fs::read_to_string(&csv_path).unwrap();
    assert!(contents.contains("2024-01-05,-2,Dining,"), "got {contents}");
}

#[test]
fn default_date_falls_in_default_report_period() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finance.db");

    finance(&db_path)
        .args(["add", "--amount=-7.5", "--category", "Dining"])
        .assert()
        .success();

    finance(&db_path)
        .args(["totals", "--json"])
        .assert()
        .success()
        .stdout(contains("\"Dining\": -7.5"));
}
