use thiserror::Error;

/// Rejections of user input. Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Enter income amount")]
    MissingIncomeAmount,
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Invalid amount `{0}` (expected a positive number)")]
    InvalidAmount(String),
    #[error("Invalid price `{0}` (expected a number of zero or more)")]
    InvalidPrice(String),
    #[error("Unknown category `{0}`")]
    UnknownCategory(String),
    #[error("Invalid date `{0}` (use YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Insufficient balance: {price:.2} exceeds the available {balance:.2}")]
    InsufficientBalance { price: f64, balance: f64 },
}

/// Error type shared by the ledger, storage, and form layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Holds the 0-based index; the message shows the 1-based row number.
    #[error("No expense #{}", .0 + 1)]
    RecordNotFound(usize),
    #[error("The {0} form is not open")]
    NoOpenForm(&'static str),
    #[error("The {0} form is still open; submit or cancel it first")]
    FormBusy(&'static str),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// True for rejections that leave all state untouched.
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
