//! Commands that open, fill, submit, and cancel the entry forms, plus delete.

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::cli::ui::dashboard::{balance_line, format_amount};
use crate::core::{Dialog, ExpenseField, FormMode, Submission};
use crate::domain::Category;
use crate::errors::TrackerError;

use super::parse_row;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "Add income to the wallet",
            "income [amount]",
            cmd_income,
        ),
        CommandEntry::new(
            "expense",
            "Record a new expense",
            "expense [title price category date]",
            cmd_expense,
        ),
        CommandEntry::new(
            "edit",
            "Edit an expense from the list",
            "edit <#> [field value]",
            cmd_edit,
        ),
        CommandEntry::new(
            "set",
            "Set a field of the open form",
            "set <amount|title|price|category|date> <value>",
            cmd_set,
        ),
        CommandEntry::new("submit", "Submit the open form", "submit", cmd_submit),
        CommandEntry::new(
            "cancel",
            "Close the open form without saving",
            "cancel",
            cmd_cancel,
        ),
        CommandEntry::new(
            "delete",
            "Delete an expense and refund its price",
            "delete <#>",
            cmd_delete,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 1 {
        return Err(CommandError::InvalidArguments(
            "usage: income [amount]".into(),
        ));
    }
    context.forms.open_income()?;

    if let Some(amount) = args.first() {
        context.forms.set_income_amount(*amount)?;
        return submit(context);
    }
    if context.mode() == CliMode::Interactive {
        return run_income_wizard(context);
    }
    io::print_info("Income form open: `set amount <value>`, then `submit`.");
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() && args.len() != ExpenseField::ALL.len() {
        return Err(CommandError::InvalidArguments(
            "usage: expense [title price category date]".into(),
        ));
    }
    context.forms.open_expense()?;

    if !args.is_empty() {
        for (field, value) in ExpenseField::ALL.iter().zip(args) {
            context.forms.set_expense_field(*field, *value)?;
        }
        return submit(context);
    }
    if context.mode() == CliMode::Interactive {
        return run_expense_wizard(context);
    }
    io::print_info("Expense form open: `set <title|price|category|date> <value>`, then `submit`.");
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (row, rest) = args.split_first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: edit <#> [field value]".into())
    })?;
    let index = parse_row(row)?;
    let shortcut = match rest {
        [] => None,
        [field, value @ ..] if !value.is_empty() => Some((parse_field(field)?, value.join(" "))),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: edit <#> [field value]".into(),
            ))
        }
    };

    context.forms.open_edit(index, context.tracker.records())?;

    if let Some((field, value)) = shortcut {
        context.forms.set_expense_field(field, value)?;
        return submit(context);
    }
    if context.mode() == CliMode::Interactive {
        return run_expense_wizard(context);
    }
    io::print_info(format!(
        "Editing expense #{}: `set <field> <value>`, then `submit`.",
        index + 1
    ));
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [field, value @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: set <field> <value>".into(),
        ));
    };
    let value = value.join(" ");

    if context.forms.is_closed() {
        return Err(TrackerError::NoOpenForm("entry").into());
    }
    if matches!(context.forms.dialog(), Dialog::Income(_)) {
        if !field.eq_ignore_ascii_case("amount") {
            return Err(CommandError::InvalidArguments(format!(
                "the income form only has an `amount` field, not `{}`",
                field
            )));
        }
        context.forms.set_income_amount(value)?;
    } else {
        context.forms.set_expense_field(parse_field(field)?, value)?;
    }
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    submit(context)
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.forms.cancel() {
        io::print_info("Form closed without saving.");
    } else {
        io::print_info("No form is open.");
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [row] = args else {
        return Err(CommandError::InvalidArguments("usage: delete <#>".into()));
    };
    let index = parse_row(row)?;
    context.forms.ensure_closed()?;

    let removed = context.tracker.delete_expense(index)?;
    io::print_success(format!(
        "Deleted expense #{} `{}` and refunded {}.",
        index + 1,
        removed.title,
        format_amount(removed.price, context.currency())
    ));
    io::print_info(balance_line(context.tracker.balance(), context.currency()));
    Ok(())
}

fn parse_field(name: &str) -> Result<ExpenseField, CommandError> {
    ExpenseField::parse(name).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "unknown field `{}` (expected title, price, category, or date)",
            name
        ))
    })
}

fn submit(context: &mut ShellContext) -> CommandResult {
    let submission = context.forms.submit(&mut context.tracker)?;
    report_submission(context, &submission);
    Ok(())
}

fn report_submission(context: &ShellContext, submission: &Submission) {
    let currency = context.currency();
    let message = match submission {
        Submission::Income { amount, .. } => {
            format!("Added income of {}.", format_amount(*amount, currency))
        }
        Submission::Created { expense, .. } => format!(
            "Added expense `{}` ({}, {}, {}).",
            expense.title,
            format_amount(expense.price, currency),
            expense.category,
            expense.date_label()
        ),
        Submission::Edited {
            index,
            previous,
            expense,
            ..
        } => format!(
            "Updated expense #{} `{}` ({} -> {}).",
            index + 1,
            expense.title,
            format_amount(previous.price, currency),
            format_amount(expense.price, currency)
        ),
    };
    io::print_success(message);
    io::print_info(balance_line(context.tracker.balance(), currency));
}

fn run_income_wizard(context: &mut ShellContext) -> CommandResult {
    loop {
        let Dialog::Income(draft) = context.forms.dialog().clone() else {
            return Ok(());
        };
        section("Add Income");
        let amount = io::prompt_text(&context.theme, "Income amount", &draft.amount)?;
        context.forms.set_income_amount(amount)?;

        if !submit_or_retry(context)? {
            return Ok(());
        }
    }
}

fn run_expense_wizard(context: &mut ShellContext) -> CommandResult {
    loop {
        let Dialog::Expense { mode, draft } = context.forms.dialog().clone() else {
            return Ok(());
        };
        section(match mode {
            FormMode::Create => "Add Expense".to_string(),
            FormMode::Edit(index) => format!("Edit Expense #{}", index + 1),
        });

        for field in ExpenseField::ALL {
            let value = match field {
                ExpenseField::Category => {
                    let current = draft.category.parse::<Category>().ok().map(Category::ordinal);
                    let labels = Category::labels();
                    match io::select_option(&context.theme, "Category", &labels, current)? {
                        Some(choice) => labels[choice].to_string(),
                        None => return dismiss(context),
                    }
                }
                ExpenseField::Date => {
                    io::prompt_text(&context.theme, "Date (YYYY-MM-DD)", draft.value(field))?
                }
                _ => io::prompt_text(&context.theme, &capitalize(field.name()), draft.value(field))?,
            };
            context.forms.set_expense_field(field, value)?;
        }

        match io::confirm_action(&context.theme, "Save expense?", true)? {
            Some(true) => {}
            _ => return dismiss(context),
        }
        if !submit_or_retry(context)? {
            return Ok(());
        }
    }
}

/// Submits the open form. Returns `true` when the user wants to correct a
/// rejected submission, `false` once the form is closed.
fn submit_or_retry(context: &mut ShellContext) -> Result<bool, CommandError> {
    match submit(context) {
        Ok(()) => Ok(false),
        Err(CommandError::Tracker(err)) if err.is_validation() => {
            io::print_error(&err);
            match io::confirm_action(&context.theme, "Edit the form again?", true)? {
                Some(true) => Ok(true),
                _ => {
                    dismiss(context)?;
                    Ok(false)
                }
            }
        }
        Err(err) => Err(err),
    }
}

fn dismiss(context: &mut ShellContext) -> CommandResult {
    context.forms.cancel();
    io::print_info("Form closed without saving.");
    Ok(())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
