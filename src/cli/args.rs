use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{AccountId, Money};

/// Manage a wallet ledger persisted as flat dump files
#[derive(Parser, Debug)]
#[command(name = "wallet-ledger")]
#[command(about = "Manage accounts, payments, and favorites in a flat-file wallet ledger", long_about = None)]
pub struct CliArgs {
    /// Directory holding the persisted ledger dumps
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        help = "Directory the ledger is imported from and exported to"
    )]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations exposed on the command line
///
/// Mutating commands load the ledger from the data directory (a missing
/// directory means a fresh ledger), apply the operation, and write the
/// ledger back. Read-only commands require the directory to exist.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new account for a phone number
    Register {
        /// Phone number; must not be registered yet
        phone: String,
    },

    /// Credit funds to an account
    Deposit {
        /// The account to credit
        account_id: AccountId,
        /// Amount in the smallest currency unit; must be positive
        amount: Money,
    },

    /// Make a payment from an account
    Pay {
        /// The account to debit
        account_id: AccountId,
        /// Amount in the smallest currency unit; must be positive
        amount: Money,
        /// Category label for the payment
        category: String,
    },

    /// Reject a payment, refunding its amount
    Reject {
        /// The payment to reject
        payment_id: String,
    },

    /// Repeat a payment as a brand-new one
    Repeat {
        /// The payment to repeat
        payment_id: String,
    },

    /// Snapshot a payment as a named favorite
    Favorite {
        /// The payment to snapshot
        payment_id: String,
        /// Name for the template
        name: String,
    },

    /// Replay a favorite as a new payment
    PayFavorite {
        /// The favorite to replay
        favorite_id: String,
    },

    /// Sum all payment amounts (read-only)
    Sum {
        /// Payments per concurrent worker chunk; 1 sums sequentially
        #[arg(
            long = "chunk-size",
            value_name = "SIZE",
            default_value_t = 1,
            help = "Payments per worker chunk (1 = sequential)"
        )]
        chunk_size: usize,
    },

    /// Export one account's payment history to files (read-only)
    History {
        /// The account whose payments to export
        account_id: AccountId,

        /// Directory to write the history files into
        #[arg(long = "out-dir", value_name = "DIR", default_value = "history")]
        out_dir: PathBuf,

        /// Payments per history file before splitting into numbered files
        #[arg(
            long = "records-per-file",
            value_name = "COUNT",
            default_value_t = 50
        )]
        records_per_file: usize,
    },
}

/// Parse command-line arguments
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[test]
    fn test_default_data_dir() {
        let parsed = CliArgs::try_parse_from(["program", "sum"]).unwrap();
        assert_eq!(parsed.data_dir, Path::new("data"));
    }

    #[test]
    fn test_custom_data_dir() {
        let parsed =
            CliArgs::try_parse_from(["program", "--data-dir", "/tmp/ledger", "sum"]).unwrap();
        assert_eq!(parsed.data_dir, Path::new("/tmp/ledger"));
    }

    #[test]
    fn test_register_command() {
        let parsed = CliArgs::try_parse_from(["program", "register", "+992501182129"]).unwrap();
        match parsed.command {
            Command::Register { phone } => assert_eq!(phone, "+992501182129"),
            other => panic!("Expected register, got {:?}", other),
        }
    }

    #[test]
    fn test_pay_command() {
        let parsed = CliArgs::try_parse_from(["program", "pay", "1", "10", "Food"]).unwrap();
        match parsed.command {
            Command::Pay {
                account_id,
                amount,
                category,
            } => {
                assert_eq!(account_id, 1);
                assert_eq!(amount, 10);
                assert_eq!(category, "Food");
            }
            other => panic!("Expected pay, got {:?}", other),
        }
    }

    #[rstest]
    #[case::default_chunk(&["program", "sum"], 1)]
    #[case::explicit_chunk(&["program", "sum", "--chunk-size", "8"], 8)]
    fn test_sum_chunk_size(#[case] args: &[&str], #[case] expected: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Sum { chunk_size } => assert_eq!(chunk_size, expected),
            other => panic!("Expected sum, got {:?}", other),
        }
    }

    #[test]
    fn test_history_defaults() {
        let parsed = CliArgs::try_parse_from(["program", "history", "3"]).unwrap();
        match parsed.command {
            Command::History {
                account_id,
                out_dir,
                records_per_file,
            } => {
                assert_eq!(account_id, 3);
                assert_eq!(out_dir, Path::new("history"));
                assert_eq!(records_per_file, 50);
            }
            other => panic!("Expected history, got {:?}", other),
        }
    }

    #[rstest]
    #[case::no_command(&["program"])]
    #[case::unknown_command(&["program", "transfer"])]
    #[case::pay_non_numeric_amount(&["program", "pay", "1", "ten", "Food"])]
    #[case::register_missing_phone(&["program", "register"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
