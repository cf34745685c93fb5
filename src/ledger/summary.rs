//! Per-category spend totals feeding the charts.

use crate::domain::{Category, Expense};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Category totals in [`Category::ALL`] order, nonzero entries only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    entries: Vec<CategoryTotal>,
}

impl Summary {
    pub fn entries(&self) -> &[CategoryTotal] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.total).sum()
    }

    /// Largest single category total, or zero when empty.
    pub fn max(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.total)
            .fold(0.0, f64::max)
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    /// Fraction of the overall total spent in `category`.
    pub fn share(&self, category: Category) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        self.get(category).unwrap_or(0.0) / total
    }
}

/// Groups `records` by category and sums their prices.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a Expense>) -> Summary {
    let mut totals = [0.0_f64; Category::ALL.len()];
    for record in records {
        totals[record.category.ordinal()] += record.price;
    }
    let entries = Category::ALL
        .iter()
        .zip(totals)
        .filter(|(_, total)| *total != 0.0)
        .map(|(category, total)| CategoryTotal {
            category: *category,
            total,
        })
        .collect();
    Summary { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(price: f64, category: Category) -> Expense {
        Expense::new(
            "item",
            price,
            category,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    #[test]
    fn follows_category_order_not_insertion_order() {
        let records = vec![
            expense(5.0, Category::Entertainment),
            expense(7.0, Category::Food),
            expense(3.0, Category::Entertainment),
        ];
        let summary = summarize(&records);
        let categories: Vec<_> = summary.entries().iter().map(|e| e.category).collect();
        assert_eq!(categories, [Category::Food, Category::Entertainment]);
        assert_eq!(summary.get(Category::Entertainment), Some(8.0));
        assert_eq!(summary.get(Category::Travel), None);
    }

    #[test]
    fn zero_totals_are_omitted() {
        let records = vec![expense(0.0, Category::Travel), expense(4.0, Category::Food)];
        let summary = summarize(&records);
        assert_eq!(summary.entries().len(), 1);
        assert_eq!(summary.total(), 4.0);
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let summary = summarize(&Vec::<Expense>::new());
        assert!(summary.is_empty());
        assert_eq!(summary.share(Category::Food), 0.0);
        assert_eq!(summary.max(), 0.0);
    }

    #[test]
    fn shares_sum_to_one() {
        let records = vec![
            expense(30.0, Category::Food),
            expense(50.0, Category::Travel),
            expense(20.0, Category::Entertainment),
        ];
        let summary = summarize(&records);
        let sum: f64 = Category::ALL.iter().map(|c| summary.share(*c)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(summary.max(), 50.0);
    }
}
