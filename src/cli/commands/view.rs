use crate::cli::core::CommandResult;
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::charts::{render_distribution, render_magnitude};
use crate::cli::ui::dashboard::{balance_line, format_amount, render_transactions};
use crate::cli::ui::table_renderer::{Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show all transactions", "list", cmd_list),
        CommandEntry::new("balance", "Show the wallet balance", "balance", cmd_balance),
        CommandEntry::new(
            "summary",
            "Show spending per category",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "charts",
            "Chart spending distribution and totals",
            "charts",
            cmd_charts,
        ),
        CommandEntry::new(
            "dashboard",
            "Show balance, charts, and transactions",
            "dashboard",
            cmd_dashboard,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section("Transactions");
    io::print_info(render_transactions(
        context.tracker.records(),
        context.currency(),
    ));
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(balance_line(context.tracker.balance(), context.currency()));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section("Expense Summary");
    let summary = context.tracker.summary();
    if summary.is_empty() {
        io::print_info("No expenses recorded yet.");
        return Ok(());
    }

    let currency = context.currency();
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Total"),
        TableColumn::right("Share"),
    ]);
    for entry in summary.entries() {
        table.push_row(vec![
            entry.category.label().to_string(),
            format_amount(entry.total, currency),
            format!("{:.1}%", summary.share(entry.category) * 100.0),
        ]);
    }
    io::print_info(table.render());
    io::print_info(format!("Total spent: {}", format_amount(summary.total(), currency)));
    Ok(())
}

fn cmd_charts(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.tracker.summary();
    let width = context.config.chart_width;
    section("Expense Distribution");
    io::print_info(render_distribution(&summary, width));
    section("Expense Totals");
    io::print_info(render_magnitude(&summary, width, context.currency()));
    Ok(())
}

fn cmd_dashboard(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    section("Expense Tracker");
    cmd_balance(context, args)?;
    cmd_charts(context, args)?;
    cmd_list(context, args)
}
