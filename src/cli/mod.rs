//! CLI argument parsing and command execution
//!
//! Each invocation works against one data directory: the ledger is
//! imported, the requested operation applied, and (for mutating commands)
//! the ledger exported back. Read-only commands require the directory to
//! already exist; mutating commands treat a missing directory as a fresh
//! ledger.

pub mod args;

pub use args::{parse_args, CliArgs, Command};

use crate::core::Ledger;
use crate::io;
use crate::types::LedgerError;
use tracing::info;

/// Execute a parsed CLI invocation
///
/// # Errors
///
/// Propagates any `LedgerError` from the operation or from persistence;
/// the caller is expected to print it and exit non-zero.
pub fn run(args: CliArgs) -> Result<(), LedgerError> {
    let data_dir = &args.data_dir;
    let mut ledger = Ledger::new();

    let mutating = !matches!(args.command, Command::Sum { .. } | Command::History { .. });
    if data_dir.is_dir() {
        io::import(&mut ledger, data_dir)?;
    } else if !mutating {
        // Read-only commands have nothing to work on without a ledger.
        return Err(LedgerError::working_directory_not_found(data_dir));
    } else {
        info!(dir = %data_dir.display(), "no data directory yet, starting a fresh ledger");
    }

    match &args.command {
        Command::Register { phone } => {
            let account = ledger.register_account(phone)?;
            println!("Registered account {} for {}", account.id, account.phone);
        }
        Command::Deposit { account_id, amount } => {
            ledger.deposit(*account_id, *amount)?;
            let account = ledger.find_account_by_id(*account_id)?;
            println!("Account {} balance is now {}", account.id, account.balance);
        }
        Command::Pay {
            account_id,
            amount,
            category,
        } => {
            let payment = ledger.pay(*account_id, *amount, category)?;
            println!("Payment {} of {} ({})", payment.id, payment.amount, payment.category);
        }
        Command::Reject { payment_id } => {
            ledger.reject(payment_id)?;
            println!("Payment {} rejected and refunded", payment_id);
        }
        Command::Repeat { payment_id } => {
            let payment = ledger.repeat(payment_id)?;
            println!("Repeated as payment {} of {}", payment.id, payment.amount);
        }
        Command::Favorite { payment_id, name } => {
            let favorite = ledger.favorite_payment(payment_id, name)?;
            println!("Favorite {} ({}) created", favorite.id, favorite.name);
        }
        Command::PayFavorite { favorite_id } => {
            let payment = ledger.pay_from_favorite(favorite_id)?;
            println!("Payment {} of {} ({})", payment.id, payment.amount, payment.category);
        }
        Command::Sum { chunk_size } => {
            println!("{}", ledger.sum_payments(*chunk_size));
        }
        Command::History {
            account_id,
            out_dir,
            records_per_file,
        } => {
            let history = ledger.account_history(*account_id)?;
            io::history_to_files(&history, out_dir, *records_per_file)?;
            println!(
                "Exported {} payments of account {} to {}",
                history.len(),
                account_id,
                out_dir.display()
            );
        }
    }

    if mutating {
        io::export(&ledger, data_dir)?;
    }
    Ok(())
}
