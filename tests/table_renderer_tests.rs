use wallet_tracker::cli::output::{set_preferences, OutputPreferences};
use wallet_tracker::cli::ui::table_renderer::{
    horizontal_rule, render_cell, visible_width, Alignment, Table, TableColumn,
};

fn plain() {
    set_preferences(OutputPreferences {
        plain_mode: true,
    });
}

#[test]
fn widths_follow_the_widest_cell_up_to_the_cap() {
    let mut table = Table::new(vec![
        TableColumn::left("Title").max_width(8),
        TableColumn::right("Price"),
    ]);
    table.push_row(vec!["Weekend getaway".into(), "$1200.00".into()]);
    table.push_row(vec!["Tea".into(), "$4.00".into()]);

    assert_eq!(table.compute_widths(), vec![8, 8]);
}

#[test]
fn cells_are_padded_or_truncated_to_width() {
    assert_eq!(render_cell("Tea", 6, Alignment::Left), "Tea   ");
    assert_eq!(render_cell("4.00", 6, Alignment::Right), "  4.00");
    assert_eq!(render_cell("Weekend getaway", 8, Alignment::Left), "Weekend…");
}

#[test]
fn ansi_sequences_do_not_count_towards_width() {
    assert_eq!(visible_width("\u{1b}[32mFood\u{1b}[0m"), 4);
}

#[test]
fn plain_render_uses_ascii_rule() {
    plain();
    assert_eq!(horizontal_rule(&[3, 4]), "-".repeat(9));

    let mut table = Table::new(vec![TableColumn::left("Category"), TableColumn::right("Total")]);
    table.push_row(vec!["Food".into(), "$10.00".into()]);
    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Category   Total");
    assert_eq!(lines[1], "----------------");
    assert_eq!(lines[2], "Food      $10.00");
}
