//! Text charts over the category summary.

use colored::{Color, Colorize};

use crate::cli::output::current_preferences;
use crate::domain::Category;
use crate::ledger::Summary;

use super::dashboard::format_amount;

const EMPTY_MESSAGE: &str = "No expenses recorded yet.";

fn category_color(category: Category) -> Color {
    match category {
        Category::Food => Color::Blue,
        Category::Travel => Color::Green,
        Category::Entertainment => Color::Yellow,
    }
}

fn label_width() -> usize {
    Category::ALL
        .iter()
        .map(|category| category.label().len())
        .max()
        .unwrap_or(0)
}

/// Number of filled cells for `value` on a `width`-cell axis ending at `max`.
/// Any nonzero value gets at least one cell.
pub fn bar_cells(value: f64, max: f64, width: usize) -> usize {
    if width == 0 || max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = ((value / max) * width as f64).round() as usize;
    cells.clamp(1, width)
}

fn bar(category: Category, filled: usize, width: usize, show_track: bool) -> String {
    let plain = current_preferences().plain_mode;
    let (fill, track) = if plain { ('#', '.') } else { ('█', '░') };
    let mut text = fill.to_string().repeat(filled);
    if !plain {
        text = text.color(category_color(category)).to_string();
    }
    if show_track {
        text.push_str(&track.to_string().repeat(width.saturating_sub(filled)));
    } else {
        text.push_str(&" ".repeat(width.saturating_sub(filled)));
    }
    text
}

/// Proportional view: each category's share of total spending.
pub fn render_distribution(summary: &Summary, width: usize) -> String {
    if summary.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    let labels = label_width();
    summary
        .entries()
        .iter()
        .map(|entry| {
            let share = summary.share(entry.category);
            let filled = bar_cells(share, 1.0, width);
            format!(
                "{:<labels$}  {}  {:>5.1}%",
                entry.category.label(),
                bar(entry.category, filled, width, true),
                share * 100.0,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Magnitude view: per-category totals scaled to the largest one.
pub fn render_magnitude(summary: &Summary, width: usize, currency: &str) -> String {
    if summary.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    let labels = label_width();
    let max = summary.max();
    summary
        .entries()
        .iter()
        .map(|entry| {
            let filled = bar_cells(entry.total, max, width);
            format!(
                "{:<labels$}  {}  {}",
                entry.category.label(),
                bar(entry.category, filled, width, false),
                format_amount(entry.total, currency),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
