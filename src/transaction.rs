//! The transaction record handed to the validator.

use crate::account::{AccountId, AccountQuery, ExistenceChecker};
use crate::amount::AmountInput;
use crate::date::DateInput;
use crate::error::LookupError;
use serde::Deserialize;

/// A transaction awaiting validation.
///
/// Every field is optional; a missing field is reported by the validator, not
/// rejected at construction. JSON `null` deserializes as absent. The existence
/// mechanism is never part of the serialized record and has to be attached
/// with one of the `with_*` helpers.
///
/// # Examples
///
/// ```
/// use transaction_validator::{validate, TransactionInput};
///
/// let tx = TransactionInput::new()
///     .with_amount(100)
///     .with_date("2024-05-01")
///     .with_account_id(1)
///     .with_account_exists(|id| id.to_string() == "1");
///
/// assert!(validate(&tx).valid);
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TransactionInput<'a> {
    #[serde(default)]
    pub amount: Option<AmountInput>,

    #[serde(default)]
    pub date: Option<DateInput>,

    #[serde(default)]
    pub account_id: Option<AccountId>,

    #[serde(skip)]
    pub existence: Option<ExistenceChecker<'a>>,
}

impl<'a> TransactionInput<'a> {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: impl Into<AmountInput>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<DateInput>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<AccountId>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Attaches a predicate that answers whether an account exists.
    pub fn with_account_exists<F>(mut self, f: F) -> Self
    where
        F: Fn(&AccountId) -> bool + 'a,
    {
        self.existence = Some(ExistenceChecker::predicate(f));
        self
    }

    /// Attaches a predicate that may fail; failures count as "does not exist".
    pub fn with_fallible_account_exists<F>(mut self, f: F) -> Self
    where
        F: Fn(&AccountId) -> Result<bool, LookupError> + 'a,
    {
        self.existence = Some(ExistenceChecker::fallible(f));
        self
    }

    /// Attaches a database handle used for the account lookup.
    pub fn with_db(mut self, handle: &'a dyn AccountQuery) -> Self {
        self.existence = Some(ExistenceChecker::query(handle));
        self
    }
}
