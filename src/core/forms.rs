//! Income and expense entry forms.
//!
//! At most one dialog is open at a time. Field edits are explicit set
//! commands that replace the draft wholesale, and submitting commits through
//! the [`Tracker`] so that the state and the store change together.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    domain::{Category, Expense, DATE_FORMAT},
    errors::{Result, TrackerError, ValidationError},
    ledger::RecordStore,
    storage::KeyValueStore,
};

use super::app_state::Tracker;

/// Whether the expense form creates a record or edits the one at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(usize),
}

/// Fields of the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Title,
    Price,
    Category,
    Date,
}

impl ExpenseField {
    pub const ALL: [ExpenseField; 4] = [
        ExpenseField::Title,
        ExpenseField::Price,
        ExpenseField::Category,
        ExpenseField::Date,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExpenseField::Title => "title",
            ExpenseField::Price => "price",
            ExpenseField::Category => "category",
            ExpenseField::Date => "date",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw text of the income form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeDraft {
    pub amount: String,
}

impl IncomeDraft {
    pub fn with_amount(value: impl Into<String>) -> Self {
        Self {
            amount: value.into(),
        }
    }

    /// Parses the amount. Range checks happen when the wallet is credited.
    pub fn validate(&self) -> std::result::Result<f64, ValidationError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingIncomeAmount);
        }
        raw.parse::<f64>()
            .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))
    }
}

/// Raw text of the expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub title: String,
    pub price: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            price: expense.price.to_string(),
            category: expense.category.label().to_string(),
            date: expense.date_label(),
        }
    }

    /// Returns a new draft with `field` set to `value`.
    pub fn with(&self, field: ExpenseField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            ExpenseField::Title => next.title = value,
            ExpenseField::Price => next.price = value,
            ExpenseField::Category => next.category = value,
            ExpenseField::Date => next.date = value,
        }
        next
    }

    pub fn value(&self, field: ExpenseField) -> &str {
        match field {
            ExpenseField::Title => &self.title,
            ExpenseField::Price => &self.price,
            ExpenseField::Category => &self.category,
            ExpenseField::Date => &self.date,
        }
    }

    /// Builds the expense this draft describes, or the first reason it
    /// cannot be committed.
    pub fn validate(&self) -> std::result::Result<Expense, ValidationError> {
        if ExpenseField::ALL
            .iter()
            .any(|field| self.value(*field).trim().is_empty())
        {
            return Err(ValidationError::MissingFields);
        }

        let raw_price = self.price.trim();
        let price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| ValidationError::InvalidPrice(raw_price.to_string()))?;
        let category = self.category.parse::<Category>()?;
        let raw_date = self.date.trim();
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(raw_date.to_string()))?;

        Ok(Expense::new(self.title.trim(), price, category, date))
    }
}

/// Which dialog is open, with its in-progress buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    #[default]
    Closed,
    Income(IncomeDraft),
    Expense {
        mode: FormMode,
        draft: ExpenseDraft,
    },
}

impl Dialog {
    fn name(&self) -> &'static str {
        match self {
            Dialog::Closed => "entry",
            Dialog::Income(_) => "income",
            Dialog::Expense { .. } => "expense",
        }
    }
}

/// Result of a committed form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Income {
        amount: f64,
        balance: f64,
    },
    Created {
        expense: Expense,
        balance: f64,
    },
    Edited {
        index: usize,
        previous: Expense,
        expense: Expense,
        balance: f64,
    },
}

#[derive(Debug, Default)]
pub struct FormController {
    dialog: Dialog,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn is_closed(&self) -> bool {
        self.dialog == Dialog::Closed
    }

    /// Fails with `FormBusy` unless no dialog is open.
    pub fn ensure_closed(&self) -> Result<()> {
        match self.dialog {
            Dialog::Closed => Ok(()),
            ref open => Err(TrackerError::FormBusy(open.name())),
        }
    }

    pub fn open_income(&mut self) -> Result<()> {
        self.ensure_closed()?;
        self.dialog = Dialog::Income(IncomeDraft::default());
        debug!("income form opened");
        Ok(())
    }

    pub fn open_expense(&mut self) -> Result<()> {
        self.ensure_closed()?;
        self.dialog = Dialog::Expense {
            mode: FormMode::Create,
            draft: ExpenseDraft::default(),
        };
        debug!("expense form opened");
        Ok(())
    }

    /// Opens the expense form pre-populated from the record at `index`.
    pub fn open_edit(&mut self, index: usize, records: &RecordStore) -> Result<()> {
        self.ensure_closed()?;
        let expense = records
            .get(index)
            .ok_or(TrackerError::RecordNotFound(index))?;
        self.dialog = Dialog::Expense {
            mode: FormMode::Edit(index),
            draft: ExpenseDraft::from_expense(expense),
        };
        debug!(index, "expense form opened for editing");
        Ok(())
    }

    pub fn set_income_amount(&mut self, value: impl Into<String>) -> Result<()> {
        match self.dialog {
            Dialog::Income(_) => {
                self.dialog = Dialog::Income(IncomeDraft::with_amount(value));
                Ok(())
            }
            _ => Err(TrackerError::NoOpenForm("income")),
        }
    }

    pub fn set_expense_field(&mut self, field: ExpenseField, value: impl Into<String>) -> Result<()> {
        let Dialog::Expense { mode, draft } = &self.dialog else {
            return Err(TrackerError::NoOpenForm("expense"));
        };
        let next = Dialog::Expense {
            mode: *mode,
            draft: draft.with(field, value),
        };
        self.dialog = next;
        Ok(())
    }

    /// Validates and commits the open dialog.
    ///
    /// A rejected submission keeps the dialog and its buffer as they were. A
    /// storage failure closes the dialog because the change was already
    /// applied in memory.
    pub fn submit<S: KeyValueStore>(&mut self, tracker: &mut Tracker<S>) -> Result<Submission> {
        let outcome = match &self.dialog {
            Dialog::Closed => return Err(TrackerError::NoOpenForm("entry")),
            Dialog::Income(draft) => submit_income(draft, tracker),
            Dialog::Expense { mode, draft } => submit_expense(*mode, draft, tracker),
        };
        match outcome {
            Ok(submission) => {
                self.dialog = Dialog::Closed;
                Ok(submission)
            }
            Err(err @ TrackerError::Storage(_)) => {
                self.dialog = Dialog::Closed;
                Err(err)
            }
            Err(err) => {
                debug!(%err, "submission rejected");
                Err(err)
            }
        }
    }

    /// Closes any open dialog without committing. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = !self.is_closed();
        if was_open {
            debug!(dialog = self.dialog.name(), "form canceled");
        }
        self.dialog = Dialog::Closed;
        was_open
    }
}

fn submit_income<S: KeyValueStore>(
    draft: &IncomeDraft,
    tracker: &mut Tracker<S>,
) -> Result<Submission> {
    let amount = draft.validate()?;
    let balance = tracker.add_income(amount)?;
    Ok(Submission::Income { amount, balance })
}

fn submit_expense<S: KeyValueStore>(
    mode: FormMode,
    draft: &ExpenseDraft,
    tracker: &mut Tracker<S>,
) -> Result<Submission> {
    let expense = draft.validate()?;
    match mode {
        FormMode::Create => {
            let balance = tracker.add_expense(expense.clone())?;
            Ok(Submission::Created { expense, balance })
        }
        FormMode::Edit(index) => {
            let previous = tracker.edit_expense(index, expense.clone())?;
            Ok(Submission::Edited {
                index,
                previous,
                expense,
                balance: tracker.balance(),
            })
        }
    }
}
