//! Dump file format handling
//!
//! This module centralizes all persistence format concerns:
//! - Record structures mapping entities onto dump file rows
//! - Encoding collections to the `;`-delimited, newline-terminated format
//! - Decoding dump file contents back into entities
//! - The superseded legacy single-file accounts encoding (`|`-separated
//!   records, `;`-delimited fields), kept only for byte-for-byte
//!   compatibility with old exports
//!
//! All functions are pure (no I/O) for easy testing. Field values must not
//! contain `;`, `|`, or newlines; the format defines no escaping, so
//! quoting is disabled entirely.
//!
//! # Field orders
//!
//! ```text
//! accounts.dump   : id;phone;balance
//! payments.dump   : id;accountId;amount;category;status
//! favorites.dump  : id;accountId;name;amount;category
//! ```

use crate::types::{Account, AccountId, Favorite, LedgerError, Money, Payment, PaymentStatus};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Dump file name for accounts
pub const ACCOUNTS_DUMP: &str = "accounts.dump";
/// Dump file name for payments
pub const PAYMENTS_DUMP: &str = "payments.dump";
/// Dump file name for favorites
pub const FAVORITES_DUMP: &str = "favorites.dump";

/// One row of `accounts.dump`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub phone: String,
    pub balance: Money,
}

/// One row of `payments.dump`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub account_id: AccountId,
    pub amount: Money,
    pub category: String,
    pub status: PaymentStatus,
}

/// One row of `favorites.dump`
///
/// Note the order: the name comes before the amount, unlike payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: String,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: String,
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        AccountRecord {
            id: account.id,
            phone: account.phone.clone(),
            balance: account.balance,
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account {
            id: record.id,
            phone: record.phone,
            balance: record.balance,
        }
    }
}

impl From<&Payment> for PaymentRecord {
    fn from(payment: &Payment) -> Self {
        PaymentRecord {
            id: payment.id.clone(),
            account_id: payment.account_id,
            amount: payment.amount,
            category: payment.category.clone(),
            status: payment.status,
        }
    }
}

impl From<PaymentRecord> for Payment {
    fn from(record: PaymentRecord) -> Self {
        Payment {
            id: record.id,
            account_id: record.account_id,
            amount: record.amount,
            category: record.category,
            status: record.status,
        }
    }
}

impl From<&Favorite> for FavoriteRecord {
    fn from(favorite: &Favorite) -> Self {
        FavoriteRecord {
            id: favorite.id.clone(),
            account_id: favorite.account_id,
            name: favorite.name.clone(),
            amount: favorite.amount,
            category: favorite.category.clone(),
        }
    }
}

impl From<FavoriteRecord> for Favorite {
    fn from(record: FavoriteRecord) -> Self {
        Favorite {
            id: record.id,
            account_id: record.account_id,
            name: record.name,
            amount: record.amount,
            category: record.category,
        }
    }
}

/// Encode records into the dump format: `;`-delimited fields, one
/// newline-terminated record per item, no header, no quoting
pub fn encode<T: Serialize>(
    file: &str,
    records: impl IntoIterator<Item = T>,
) -> Result<String, LedgerError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| LedgerError::parsing_error(file, e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| LedgerError::parsing_error(file, e))?;
    String::from_utf8(bytes).map_err(|e| LedgerError::parsing_error(file, e))
}

/// Decode a full dump file's contents into records
///
/// Records are split on newline (a trailing empty record is ignored) and
/// fields on `;`. Any malformed field fails the whole file.
///
/// # Errors
///
/// Returns `ParsingError` naming `file` if any record has the wrong field
/// count or a non-numeric value in a numeric field.
pub fn decode<T: DeserializeOwned>(file: &str, data: &str) -> Result<Vec<T>, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_reader(data.as_bytes());
    reader
        .deserialize()
        .map(|result| result.map_err(|e| LedgerError::parsing_error(file, e)))
        .collect()
}

/// Encode accounts in the legacy single-file format
///
/// Records are separated by `|` instead of newline (including one after
/// the final record), fields stay `;`-delimited.
pub fn encode_accounts_legacy(accounts: &[Account]) -> Result<String, LedgerError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'|'))
        .from_writer(Vec::new());
    for account in accounts {
        writer
            .serialize(AccountRecord::from(account))
            .map_err(|e| LedgerError::parsing_error(ACCOUNTS_DUMP, e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| LedgerError::parsing_error(ACCOUNTS_DUMP, e))?;
    String::from_utf8(bytes).map_err(|e| LedgerError::parsing_error(ACCOUNTS_DUMP, e))
}

/// Decode accounts from the legacy single-file format
pub fn decode_accounts_legacy(data: &str) -> Result<Vec<Account>, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .terminator(Terminator::Any(b'|'))
        .from_reader(data.as_bytes());
    reader
        .deserialize::<AccountRecord>()
        .map(|result| {
            result
                .map(Account::from)
                .map_err(|e| LedgerError::parsing_error(ACCOUNTS_DUMP, e))
        })
        .collect()
}
