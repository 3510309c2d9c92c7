//! Transaction validation.
//!
//! Checks run in a fixed order (amount, date, account) and every finding is
//! collected; nothing short-circuits except within a single field. The caller
//! always gets a [`ValidationResult`] back, never an error or a panic from an
//! account lookup.

use crate::account::AccountId;
use crate::error::ValidationIssue;
use crate::transaction::TransactionInput;
use log::debug;
use serde::Serialize;

/// Outcome of validating one transaction.
///
/// `valid` is `true` exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from typed findings, preserving their order.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let errors: Vec<String> = issues.iter().map(ToString::to_string).collect();
        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates a transaction record.
///
/// The input is only read. The one side effect is the account lookup, which
/// runs only when `account_id` is present.
pub fn validate(transaction: &TransactionInput<'_>) -> ValidationResult {
    let issues = collect_issues(transaction);
    debug!("Transaction validated with {} issue(s)", issues.len());
    ValidationResult::from_issues(issues)
}

/// Runs every check and returns the typed findings in report order.
pub fn collect_issues(transaction: &TransactionInput<'_>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(issue) = check_amount(transaction) {
        issues.push(issue);
    }
    if let Some(issue) = check_date(transaction) {
        issues.push(issue);
    }
    check_account(transaction, &mut issues);

    issues
}

fn check_amount(transaction: &TransactionInput<'_>) -> Option<ValidationIssue> {
    let amount = match &transaction.amount {
        Some(amount) => amount,
        None => return Some(ValidationIssue::AmountMissing),
    };

    match amount.coerce() {
        None => Some(ValidationIssue::AmountNotNumeric),
        Some(value) if !value.is_positive() => Some(ValidationIssue::AmountNotPositive),
        Some(_) => None,
    }
}

fn check_date(transaction: &TransactionInput<'_>) -> Option<ValidationIssue> {
    match &transaction.date {
        None => Some(ValidationIssue::DateMissing),
        Some(date) if !date.is_valid() => Some(ValidationIssue::DateInvalid),
        Some(_) => None,
    }
}

fn check_account(transaction: &TransactionInput<'_>, issues: &mut Vec<ValidationIssue>) {
    let account_id = match &transaction.account_id {
        Some(id) => id,
        None => {
            issues.push(ValidationIssue::AccountIdMissing);
            return;
        }
    };

    let exists = match &transaction.existence {
        // Lookup failures read as "not found" and add no message of their own.
        Some(checker) => checker.check(account_id).unwrap_or(false),
        None => {
            issues.push(ValidationIssue::AccountUnverifiable);
            false
        }
    };

    if !exists {
        issues.push(not_found(account_id));
    }
}

fn not_found(account_id: &AccountId) -> ValidationIssue {
    ValidationIssue::AccountNotFound {
        account_id: account_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use chrono::NaiveDate;

    fn complete() -> TransactionInput<'static> {
        TransactionInput::new()
            .with_amount(10)
            .with_date("2024-01-15")
            .with_account_id(5)
            .with_account_exists(|_| true)
    }

    fn errors_of(tx: &TransactionInput<'_>) -> Vec<String> {
        validate(tx).errors
    }

    #[test]
    fn test_complete_transaction_is_valid() {
        let result = validate(&complete());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_amount() {
        let mut tx = complete();
        tx.amount = None;
        assert_eq!(errors_of(&tx), vec!["amount is required"]);
    }

    #[test]
    fn test_non_numeric_amount() {
        let tx = complete().with_amount("abc");
        assert_eq!(errors_of(&tx), vec!["amount must be a number"]);
    }

    #[test]
    fn test_negative_and_zero_amounts() {
        let tx = complete().with_amount(-5);
        assert_eq!(errors_of(&tx), vec!["amount must be greater than 0"]);

        let tx = complete().with_amount(0);
        assert_eq!(errors_of(&tx), vec!["amount must be greater than 0"]);

        let tx = complete().with_amount("0.00");
        assert_eq!(errors_of(&tx), vec!["amount must be greater than 0"]);
    }

    #[test]
    fn test_nan_amount_is_not_a_number() {
        let tx = complete().with_amount(f64::NAN);
        assert_eq!(errors_of(&tx), vec!["amount must be a number"]);
    }

    #[test]
    fn test_amounts_outside_decimal_range() {
        for amount in ["1e-30", "0.00000000000000000000000000001", "1e30"] {
            assert!(validate(&complete().with_amount(amount)).valid, "amount {:?}", amount);
        }
        assert!(validate(&complete().with_amount(1e-30)).valid);
        assert!(validate(&complete().with_amount(1e30)).valid);

        let tx = complete().with_amount("-1e30");
        assert_eq!(errors_of(&tx), vec!["amount must be greater than 0"]);
    }

    #[test]
    fn test_missing_date() {
        let mut tx = complete();
        tx.date = None;
        assert_eq!(errors_of(&tx), vec!["date is required"]);
    }

    #[test]
    fn test_invalid_date_string() {
        let tx = complete().with_date("2024-13-40");
        assert_eq!(errors_of(&tx), vec!["date is not a valid date"]);
    }

    #[test]
    fn test_native_date_skips_parsing() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert!(validate(&complete().with_date(date)).valid);
        assert!(validate(&complete().with_date(date.and_hms_opt(0, 0, 0).unwrap())).valid);
    }

    #[test]
    fn test_missing_account_id_skips_lookup() {
        let mut tx = complete().with_account_exists(|_| panic!("must not be called"));
        tx.account_id = None;
        assert_eq!(errors_of(&tx), vec!["account_id is required"]);
    }

    #[test]
    fn test_predicate_false() {
        let tx = complete().with_account_exists(|_| false);
        assert_eq!(errors_of(&tx), vec!["account with id 5 does not exist"]);
    }

    #[test]
    fn test_failing_predicate_reads_as_not_found() {
        let tx = complete()
            .with_fallible_account_exists(|_| Err(LookupError::Callback("timeout".to_string())));
        assert_eq!(errors_of(&tx), vec!["account with id 5 does not exist"]);
    }

    #[test]
    fn test_no_mechanism_yields_two_errors() {
        let mut tx = complete();
        tx.existence = None;
        assert_eq!(
            errors_of(&tx),
            vec![
                "account existence could not be verified (no db handler or callback provided)",
                "account with id 5 does not exist",
            ]
        );
    }

    #[test]
    fn test_errors_follow_field_order() {
        let tx = TransactionInput::new()
            .with_amount("abc")
            .with_date("nope")
            .with_account_id("acc-1")
            .with_account_exists(|_| false);

        assert_eq!(
            errors_of(&tx),
            vec![
                "amount must be a number",
                "date is not a valid date",
                "account with id acc-1 does not exist",
            ]
        );
    }

    #[test]
    fn test_collect_issues_returns_typed_findings() {
        let issues = collect_issues(&TransactionInput::new());
        assert_eq!(
            issues,
            vec![
                ValidationIssue::AmountMissing,
                ValidationIssue::DateMissing,
                ValidationIssue::AccountIdMissing,
            ]
        );
    }

    #[test]
    fn test_from_issues_sets_valid_flag() {
        assert!(ValidationResult::from_issues(Vec::new()).valid);
        assert!(!ValidationResult::from_issues(vec![ValidationIssue::DateMissing]).valid);
    }
}
