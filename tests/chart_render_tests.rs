use wallet_tracker::cli::output::{set_preferences, OutputPreferences};
use wallet_tracker::cli::ui::charts::{render_distribution, render_magnitude};
use wallet_tracker::cli::ui::dashboard::render_transactions;
use wallet_tracker::domain::{Category, Expense};
use wallet_tracker::ledger::summarize;

use chrono::NaiveDate;

fn plain() {
    set_preferences(OutputPreferences {
        plain_mode: true,
    });
}

fn records() -> Vec<Expense> {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    vec![
        Expense::new("Coffee", 10.0, Category::Food, day),
        Expense::new("Movie", 30.0, Category::Entertainment, day),
    ]
}

#[test]
fn distribution_shows_shares_of_spending() {
    plain();
    let chart = render_distribution(&summarize(&records()), 8);
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Food           ##......   25.0%");
    assert_eq!(lines[1], "Entertainment  ######..   75.0%");
}

#[test]
fn magnitude_scales_to_the_largest_category() {
    plain();
    let chart = render_magnitude(&summarize(&records()), 6, "$");
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines[0], "Food           ##      $10.00");
    assert_eq!(lines[1], "Entertainment  ######  $30.00");
}

#[test]
fn empty_summary_renders_a_message() {
    let summary = summarize(Vec::<Expense>::new().iter());
    assert_eq!(render_distribution(&summary, 10), "No expenses recorded yet.");
    assert_eq!(render_magnitude(&summary, 10, "$"), "No expenses recorded yet.");
}

#[test]
fn transaction_rows_are_numbered_from_one() {
    plain();
    let table = render_transactions(&records(), "$");
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("1  Coffee"));
    assert!(lines[3].starts_with("2  Movie"));
    assert!(lines[3].ends_with("Entertainment  2024-01-01"));
    assert_eq!(render_transactions(&Vec::<Expense>::new(), "$"), "No transactions yet.");
}
