//! # Transaction Validator
//!
//! Validates a financial transaction record before it is persisted: the
//! amount must be present and positive, the date present and well-formed, and
//! the referenced account must exist according to a caller-supplied predicate
//! or a database lookup.
//!
//! ## Design Principles
//!
//! - **Accumulate, don't fail fast**: every finding is reported, in the fixed
//!   order amount, date, account
//! - **Never throws**: lookup errors and panics become "does not exist"
//! - **Explicit coercion**: amounts go through `rust_decimal`, dates through a
//!   strict `YYYY-MM-DD` check
//! - **Bound parameters only**: the database lookup never interpolates ids
//!
//! ## Example
//!
//! ```
//! use transaction_validator::{validate, TransactionInput};
//!
//! let result = validate(&TransactionInput::new());
//! assert!(!result.valid);
//! assert_eq!(
//!     result.errors,
//!     vec!["amount is required", "date is required", "account_id is required"]
//! );
//! ```

pub mod account;
pub mod amount;
pub mod date;
pub mod error;
pub mod transaction;
pub mod validator;

pub use account::{AccountId, AccountQuery, ExistenceChecker, ACCOUNT_EXISTS_SQL};
pub use amount::{Amount, AmountInput};
pub use date::{parse_iso_date, DateInput};
pub use error::{LookupError, Result, ValidationIssue, ValidatorError};
pub use transaction::TransactionInput;
pub use validator::{collect_issues, validate, ValidationResult};
