//! Transaction Validator CLI
//!
//! Validates a single transaction record read from a JSON file and prints the
//! result as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transaction.json --db accounts.sqlite
//! ```
//!
//! Without `--db` no existence mechanism is available and the account check
//! reports that it could not be verified.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use log::{debug, info};
use rusqlite::{Connection, OpenFlags};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use transaction_validator::{validate, Result, TransactionInput, ValidatorError};

/// Parsed command-line arguments.
struct Args {
    input: PathBuf,
    db: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    let content = fs::read_to_string(&args.input)?;
    let transaction: TransactionInput = serde_json::from_str(&content)?;

    let conn = match &args.db {
        Some(path) => {
            debug!("Opening accounts database {}", path.display());
            Some(Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY,
            )?)
        }
        None => None,
    };

    let transaction = match &conn {
        Some(conn) => transaction.with_db(conn),
        None => transaction,
    };

    let result = validate(&transaction);
    info!(
        "{}: valid={} ({} error(s))",
        args.input.display(),
        result.valid,
        result.errors.len()
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut raw: I) -> Result<Args> {
    let mut input = None;
    let mut db = None;

    while let Some(arg) = raw.next() {
        if arg == "--db" {
            let path = raw.next().ok_or(ValidatorError::MissingDbPath)?;
            db = Some(PathBuf::from(path));
        } else if arg.starts_with("--") || input.is_some() {
            return Err(ValidatorError::UnexpectedArgument(arg));
        } else {
            input = Some(PathBuf::from(arg));
        }
    }

    let input = input.ok_or(ValidatorError::MissingArgument)?;
    Ok(Args { input, db })
}
