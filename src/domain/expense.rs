//! Expense records as stored and displayed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Date format used for entry and persistence.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One stored expense transaction.
///
/// Serialized as `{title, price, category, date}` with the date written as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub title: String,
    pub price: f64,
    pub category: Category,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(title: impl Into<String>, price: f64, category: Category, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            price,
            category,
            date,
        }
    }

    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_plain_date() {
        let expense = Expense::new(
            "Coffee",
            10.0,
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let json = serde_json::to_string(&expense).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Coffee","price":10.0,"category":"Food","date":"2024-01-01"}"#
        );
    }

    #[test]
    fn deserializes_integer_prices() {
        let expense: Expense = serde_json::from_str(
            r#"{"title":"Train","price":42,"category":"Travel","date":"2024-03-09"}"#,
        )
        .unwrap();
        assert_eq!(expense.price, 42.0);
        assert_eq!(expense.date_label(), "2024-03-09");
    }
}
