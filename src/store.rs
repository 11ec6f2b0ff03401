//! Flat-file persistence for account lists: UTF-8 CSV with a `Username,URL`
//! header, one row per account, file order preserved.

use std::path::Path;

use crate::github::{Account, FollowError};

/// Writes the header row and one row per account. The header is written
/// explicitly so an empty list still produces a loadable file.
pub fn save_accounts(path: &Path, accounts: &[Account]) -> Result<(), FollowError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["Username", "URL"])?;
    for account in accounts {
        writer.serialize(account)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads accounts in file order. No validation beyond the two named columns;
/// a malformed file propagates as an error.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, FollowError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut accounts = Vec::new();
    for record in reader.deserialize() {
        accounts.push(record?);
    }
    Ok(accounts)
}
