//! Error types for the transaction validator.

use thiserror::Error;

/// Result type alias for wrapper operations (file I/O, JSON, database setup).
pub type Result<T> = std::result::Result<T, ValidatorError>;

/// A single validation finding.
///
/// `Display` renders the exact message reported in
/// [`ValidationResult::errors`](crate::ValidationResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("amount is required")]
    AmountMissing,

    #[error("amount must be a number")]
    AmountNotNumeric,

    #[error("amount must be greater than 0")]
    AmountNotPositive,

    #[error("date is required")]
    DateMissing,

    #[error("date is not a valid date")]
    DateInvalid,

    #[error("account_id is required")]
    AccountIdMissing,

    #[error("account existence could not be verified (no db handler or callback provided)")]
    AccountUnverifiable,

    #[error("account with id {account_id} does not exist")]
    AccountNotFound { account_id: String },
}

/// Failure of an account existence lookup.
///
/// The validator never surfaces these; any `LookupError` is read as
/// "account does not exist".
#[derive(Error, Debug)]
pub enum LookupError {
    /// The database handle failed to prepare or run the query
    #[error("database lookup failed: {0}")]
    Database(#[from] rusqlite::Error),

    /// A caller-supplied predicate reported a failure
    #[error("account lookup callback failed: {0}")]
    Callback(String),

    /// The lookup panicked
    #[error("account lookup panicked")]
    Panicked,
}

/// Errors raised by the command-line wrapper around the validator.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input record is not a JSON transaction object
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Accounts database could not be opened
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: validate-transaction <transaction.json> [--db <accounts.sqlite>]")]
    MissingArgument,

    /// `--db` given without a path
    #[error("--db requires a path to an SQLite accounts database")]
    MissingDbPath,

    /// Unknown flag or surplus positional argument
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}
