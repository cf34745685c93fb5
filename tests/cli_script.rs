use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wallet_tracker_cli").unwrap();
    cmd.env("WALLET_TRACKER_CLI_SCRIPT", "1")
        .env("WALLET_TRACKER_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_records_and_persists_an_expense() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("expense Coffee 10 Food 2024-01-01\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Added expense `Coffee`"))
        .stdout(contains("Wallet Balance: $4990.00"))
        .stdout(contains("Coffee"));

    let raw = fs::read_to_string(home.path().join("storage.json")).unwrap();
    let slots: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(slots["wallet"], "4990");

    script_command(&home)
        .write_stdin("balance\nexit\n")
        .assert()
        .success()
        .stdout(contains("Wallet Balance: $4990.00"));
}

#[test]
fn script_mode_fills_forms_step_by_step() {
    let home = TempDir::new().unwrap();
    let input = "\
expense
set title \"Movie night\"
set price 25
set category entertainment
set date 2024-01-02
submit
income
set amount 500
submit
summary
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added expense `Movie night`"))
        .stdout(contains("Added income of $500.00."))
        .stdout(contains("Wallet Balance: $5475.00"))
        .stdout(contains("Entertainment"));
}

#[test]
fn rejected_submissions_are_reported_without_stopping() {
    let home = TempDir::new().unwrap();
    let input = "\
expense Flight 9000 Travel 2024-03-03
cancel
delete 1
income
submit
cancel
balance
exit
";

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Insufficient balance"))
        .stdout(contains("No expense #1"))
        .stdout(contains("Enter income amount"))
        .stdout(contains("Wallet Balance: $5000.00"));

    assert!(!home.path().join("storage.json").exists());
}

#[test]
fn unknown_commands_suggest_a_match() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("balanse\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `balanse`"))
        .stdout(contains("Did you mean `balance`?"));
}

#[test]
fn script_output_is_plain_text() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("expense Taxi 20 Travel 2024-04-04\ncharts\nexit\n")
        .assert()
        .success()
        .stdout(contains("Expense Distribution"))
        .stdout(contains("#"))
        .stdout(contains("\u{1b}[").not());
}
