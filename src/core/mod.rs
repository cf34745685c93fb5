pub mod app_state;
pub mod forms;

pub use app_state::{AppState, Tracker};
pub use forms::{Dialog, ExpenseDraft, ExpenseField, FormController, FormMode, IncomeDraft, Submission};
