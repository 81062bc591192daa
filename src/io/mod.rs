//! I/O handling
//!
//! - `dump_format` - pure encode/decode of the dump file format
//! - `codec` - directory layout, file reads/writes, and merge-on-import

pub mod codec;
pub mod dump_format;

pub use codec::{export, export_accounts_to_file, history_to_files, import, import_accounts_from_file};
