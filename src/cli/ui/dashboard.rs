//! Balance line and transaction list.

use crate::domain::Expense;

use super::table_renderer::{Table, TableColumn};

const TITLE_MAX_WIDTH: usize = 32;

/// Formats `value` with two decimals behind the currency symbol.
pub fn format_amount(value: f64, currency: &str) -> String {
    if value < 0.0 {
        format!("-{currency}{:.2}", value.abs())
    } else {
        format!("{currency}{:.2}", value)
    }
}

pub fn balance_line(balance: f64, currency: &str) -> String {
    format!("Wallet Balance: {}", format_amount(balance, currency))
}

/// Transactions in store order, numbered from 1 for the edit/delete commands.
pub fn render_transactions<'a>(
    records: impl IntoIterator<Item = &'a Expense>,
    currency: &str,
) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Title").max_width(TITLE_MAX_WIDTH),
        TableColumn::right("Price"),
        TableColumn::left("Category"),
        TableColumn::left("Date"),
    ]);
    for (idx, expense) in records.into_iter().enumerate() {
        table.push_row(vec![
            (idx + 1).to_string(),
            expense.title.clone(),
            format_amount(expense.price, currency),
            expense.category.label().to_string(),
            expense.date_label(),
        ]);
    }
    if table.rows.is_empty() {
        return "No transactions yet.".to_string();
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(4990.0, "$"), "$4990.00");
        assert_eq!(format_amount(0.126, "€"), "€0.13");
        assert_eq!(format_amount(-5.5, "$"), "-$5.50");
        assert_eq!(balance_line(5475.0, "$"), "Wallet Balance: $5475.00");
    }
}
