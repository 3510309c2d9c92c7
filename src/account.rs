//! Account identifiers and the mechanisms that confirm an account exists.
//!
//! The caller chooses one mechanism per validation: a predicate closure or a
//! database handle. Lookups report failure through [`LookupError`]; turning
//! that into a "does not exist" verdict is the validator's job.

use crate::error::LookupError;
use rusqlite::types::ToSqlOutput;
use rusqlite::{params, Connection, ToSql};
use serde::Deserialize;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Lookup issued against a database handle. The account id is bound as `?1`.
pub const ACCOUNT_EXISTS_SQL: &str = "SELECT 1 FROM accounts WHERE id = ?1";

/// Opaque account identifier.
///
/// Integers and strings are the usual shapes; any other JSON value is kept
/// verbatim in `Other` so it can still be displayed and looked up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AccountId {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountId::Integer(id) => write!(f, "{}", id),
            AccountId::Text(id) => f.write_str(id),
            AccountId::Other(id) => write!(f, "{}", id),
        }
    }
}

impl ToSql for AccountId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            AccountId::Integer(id) => id.to_sql(),
            AccountId::Text(id) => id.to_sql(),
            AccountId::Other(serde_json::Value::Number(n)) => Ok(match n.as_i64() {
                Some(i) => ToSqlOutput::from(i),
                None => ToSqlOutput::from(n.as_f64().unwrap_or(f64::NAN)),
            }),
            // Booleans and structured values bind as their JSON text
            AccountId::Other(other) => Ok(ToSqlOutput::from(other.to_string())),
        }
    }
}

impl From<i32> for AccountId {
    fn from(value: i32) -> Self {
        AccountId::Integer(i64::from(value))
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        AccountId::Integer(value)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        AccountId::Text(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        AccountId::Text(value)
    }
}

/// A handle that can run a single-parameter query and report whether it
/// produced any row.
pub trait AccountQuery {
    /// Executes `sql` with `account_id` bound as its only positional
    /// parameter. Returns `true` if at least one row came back.
    fn row_exists(&self, sql: &str, account_id: &AccountId) -> Result<bool, LookupError>;
}

impl AccountQuery for Connection {
    fn row_exists(&self, sql: &str, account_id: &AccountId) -> Result<bool, LookupError> {
        let mut stmt = self.prepare_cached(sql)?;
        Ok(stmt.exists(params![account_id])?)
    }
}

type PredicateFn<'a> = dyn Fn(&AccountId) -> Result<bool, LookupError> + 'a;

/// How the validator confirms that an account exists.
///
/// A predicate and a query handle are mutually exclusive; when a caller has
/// both, the predicate is the one to pass.
pub enum ExistenceChecker<'a> {
    /// Caller-supplied lookup function
    Predicate(Box<PredicateFn<'a>>),

    /// Database handle queried with [`ACCOUNT_EXISTS_SQL`]
    Query(&'a dyn AccountQuery),
}

impl<'a> ExistenceChecker<'a> {
    /// Wraps an infallible predicate.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&AccountId) -> bool + 'a,
    {
        ExistenceChecker::Predicate(Box::new(move |id| Ok(f(id))))
    }

    /// Wraps a predicate that can fail.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&AccountId) -> Result<bool, LookupError> + 'a,
    {
        ExistenceChecker::Predicate(Box::new(f))
    }

    /// Uses a database handle for the lookup.
    pub fn query(handle: &'a dyn AccountQuery) -> Self {
        ExistenceChecker::Query(handle)
    }

    /// Runs the lookup for `account_id`.
    ///
    /// A panic inside the predicate or handle is caught and reported as
    /// [`LookupError::Panicked`]. This relies on the default `panic = "unwind"`.
    /// The process panic hook still runs first, so unless the caller installed
    /// a quiet hook the standard "thread panicked" line reaches stderr.
    pub fn check(&self, account_id: &AccountId) -> Result<bool, LookupError> {
        panic::catch_unwind(AssertUnwindSafe(|| match self {
            ExistenceChecker::Predicate(f) => f(account_id),
            ExistenceChecker::Query(handle) => handle.row_exists(ACCOUNT_EXISTS_SQL, account_id),
        }))
        .unwrap_or_else(|_| Err(LookupError::Panicked))
    }
}

impl fmt::Debug for ExistenceChecker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExistenceChecker::Predicate(_) => f.write_str("ExistenceChecker::Predicate(..)"),
            ExistenceChecker::Query(_) => f.write_str("ExistenceChecker::Query(..)"),
        }
    }
}
