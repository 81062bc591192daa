//! Directory-based persistence for the ledger
//!
//! Exports write one dump file per entity kind into a directory; imports
//! read whichever of the three files are present and merge them into the
//! ledger. File contents are handled by [`crate::io::dump_format`]; this
//! module owns the directory layout and the merge protocol.
//!
//! # Failure isolation
//!
//! Each file write is independent: a failure does not roll back files
//! already written in the same export call. On import, a malformed file
//! fails with `ParsingError` but never prevents importing the other
//! files; the first error encountered is reported after all files have
//! been attempted.

use crate::core::Ledger;
use crate::io::dump_format::{
    self, AccountRecord, FavoriteRecord, PaymentRecord, ACCOUNTS_DUMP, FAVORITES_DUMP,
    PAYMENTS_DUMP,
};
use crate::types::{LedgerError, Payment};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Export the ledger to a directory
///
/// For each entity kind with at least one record, creates the directory
/// if absent and writes `accounts.dump`, `payments.dump`, or
/// `favorites.dump`. Kinds with zero records produce no file.
///
/// # Errors
///
/// Returns `WorkingDirectoryNotFound` if the directory or a file cannot
/// be created or written. Files already written stay in place.
pub fn export(ledger: &Ledger, dir: &Path) -> Result<(), LedgerError> {
    if !ledger.accounts().is_empty() {
        let data = dump_format::encode(
            ACCOUNTS_DUMP,
            ledger.accounts().iter().map(AccountRecord::from),
        )?;
        write_dump(dir, ACCOUNTS_DUMP, &data)?;
    }
    if !ledger.payments().is_empty() {
        let data = dump_format::encode(
            PAYMENTS_DUMP,
            ledger.payments().iter().map(PaymentRecord::from),
        )?;
        write_dump(dir, PAYMENTS_DUMP, &data)?;
    }
    if !ledger.favorites().is_empty() {
        let data = dump_format::encode(
            FAVORITES_DUMP,
            ledger.favorites().iter().map(FavoriteRecord::from),
        )?;
        write_dump(dir, FAVORITES_DUMP, &data)?;
    }
    Ok(())
}

/// Import dump files from a directory, merging into the ledger
///
/// Each of the three expected files that is present is parsed and merged.
/// Dedup is by record ID, first occurrence (including records already in
/// the ledger) wins. Imported accounts advance the next-account-ID
/// counter past the maximum imported ID.
///
/// # Errors
///
/// Returns `WorkingDirectoryNotFound` if the directory does not exist.
/// Returns the first per-file error (`ParsingError` for malformed
/// contents, `WorkingDirectoryNotFound` for unreadable files) after all
/// present files have been attempted; records merged from files processed
/// before the failing one remain merged.
pub fn import(ledger: &mut Ledger, dir: &Path) -> Result<(), LedgerError> {
    if !dir.is_dir() {
        return Err(LedgerError::working_directory_not_found(dir));
    }

    let mut first_error = None;
    let mut note = |result: Result<(), LedgerError>| {
        if let Err(error) = result {
            warn!(%error, "dump file import failed");
            first_error.get_or_insert(error);
        }
    };

    note(import_accounts(ledger, dir));
    note(import_payments(ledger, dir));
    note(import_favorites(ledger, dir));

    match first_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Export accounts in the legacy single-file encoding
///
/// Superseded by [`export`]; kept for byte-for-byte compatibility with
/// old single-file dumps (`|`-separated records).
pub fn export_accounts_to_file(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let data = dump_format::encode_accounts_legacy(ledger.accounts())?;
    fs::write(path, data).map_err(|error| {
        warn!(%error, path = %path.display(), "legacy export failed");
        LedgerError::working_directory_not_found(path)
    })
}

/// Import accounts from the legacy single-file encoding
///
/// Merges with the same ID/phone dedup as a directory import.
pub fn import_accounts_from_file(ledger: &mut Ledger, path: &Path) -> Result<(), LedgerError> {
    let data = fs::read_to_string(path).map_err(|error| {
        warn!(%error, path = %path.display(), "legacy import failed");
        LedgerError::working_directory_not_found(path)
    })?;
    for account in dump_format::decode_accounts_legacy(&data)? {
        if !ledger.absorb_account(account) {
            debug!("skipped duplicate account record");
        }
    }
    Ok(())
}

/// Write an account's payment history to files in a directory
///
/// With at most `records_per_file` payments everything goes into a single
/// `payments.dump`; otherwise the history is split into numbered
/// `payments1.dump`, `payments2.dump`, ... files of `records_per_file`
/// records each (the last may be shorter). No payments, no files.
pub fn history_to_files(
    payments: &[Payment],
    dir: &Path,
    records_per_file: usize,
) -> Result<(), LedgerError> {
    if payments.is_empty() {
        return Ok(());
    }
    let records_per_file = records_per_file.max(1);
    if payments.len() <= records_per_file {
        let data = dump_format::encode(PAYMENTS_DUMP, payments.iter().map(PaymentRecord::from))?;
        return write_dump(dir, PAYMENTS_DUMP, &data);
    }
    for (index, chunk) in payments.chunks(records_per_file).enumerate() {
        let file = format!("payments{}.dump", index + 1);
        let data = dump_format::encode(&file, chunk.iter().map(PaymentRecord::from))?;
        write_dump(dir, &file, &data)?;
    }
    Ok(())
}

fn write_dump(dir: &Path, file: &str, data: &str) -> Result<(), LedgerError> {
    fs::create_dir_all(dir).map_err(|error| {
        warn!(%error, dir = %dir.display(), "failed to create export directory");
        LedgerError::working_directory_not_found(dir)
    })?;
    let path = dir.join(file);
    fs::write(&path, data).map_err(|error| {
        warn!(%error, path = %path.display(), "failed to write dump file");
        LedgerError::working_directory_not_found(&path)
    })?;
    debug!(path = %path.display(), "dump file written");
    Ok(())
}

fn import_accounts(ledger: &mut Ledger, dir: &Path) -> Result<(), LedgerError> {
    let Some(data) = read_if_present(dir, ACCOUNTS_DUMP)? else {
        return Ok(());
    };
    let records: Vec<AccountRecord> = dump_format::decode(ACCOUNTS_DUMP, &data)?;
    for record in records {
        if !ledger.absorb_account(record.into()) {
            debug!(file = ACCOUNTS_DUMP, "skipped duplicate account record");
        }
    }
    Ok(())
}

fn import_payments(ledger: &mut Ledger, dir: &Path) -> Result<(), LedgerError> {
    let Some(data) = read_if_present(dir, PAYMENTS_DUMP)? else {
        return Ok(());
    };
    let records: Vec<PaymentRecord> = dump_format::decode(PAYMENTS_DUMP, &data)?;
    for record in records {
        if !ledger.absorb_payment(record.into()) {
            debug!(file = PAYMENTS_DUMP, "skipped duplicate payment record");
        }
    }
    Ok(())
}

fn import_favorites(ledger: &mut Ledger, dir: &Path) -> Result<(), LedgerError> {
    let Some(data) = read_if_present(dir, FAVORITES_DUMP)? else {
        return Ok(());
    };
    let records: Vec<FavoriteRecord> = dump_format::decode(FAVORITES_DUMP, &data)?;
    for record in records {
        if !ledger.absorb_favorite(record.into()) {
            debug!(file = FAVORITES_DUMP, "skipped duplicate favorite record");
        }
    }
    Ok(())
}

/// Read a dump file's full contents, or `None` if it does not exist
fn read_if_present(dir: &Path, file: &str) -> Result<Option<String>, LedgerError> {
    let path = dir.join(file);
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(&path)
        .map(Some)
        .map_err(|error| {
            warn!(%error, path = %path.display(), "failed to read dump file");
            LedgerError::working_directory_not_found(&path)
        })
}
