//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over seed file rows, delegating format
//! concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Individual row errors are yielded as Err variants in the iterator, tagged
//!   with the line number they came from
//! - [`load_transfers`] and [`load_accounts`] skip bad rows with a warning and
//!   keep going

use crate::core::ledger_service::InMemoryTransferService;
use crate::io::csv_format::{
    convert_account_row, convert_transfer_row, CsvAccountRow, CsvTransferRow,
};
use crate::types::{Account, LedgerError, TransferRecord};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous CSV reader
///
/// Deserializes rows of type `Row` one at a time and converts each into a `T`.
///
/// # Examples
///
/// ```no_run
/// use transfer_ledger::io::sync_reader::SyncReader;
/// use std::path::Path;
///
/// let reader = SyncReader::transfers(Path::new("transfers.csv")).unwrap();
/// let records: Vec<_> = reader.filter_map(Result::ok).collect();
/// println!("Loaded {} transfers", records.len());
/// ```
pub struct SyncReader<Row, T> {
    reader: csv::Reader<File>,
    convert: fn(Row) -> Result<T, LedgerError>,
    line_num: u64,
    _row: PhantomData<Row>,
}

impl<Row, T> SyncReader<Row, T> {
    /// Open a CSV file with a header row
    ///
    /// The reader trims whitespace from all fields.
    pub fn open(path: &Path, convert: fn(Row) -> Result<T, LedgerError>) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            convert,
            line_num: 0,
            _row: PhantomData,
        })
    }
}

impl SyncReader<CsvTransferRow, TransferRecord> {
    /// Reader over a transfers CSV
    pub fn transfers(path: &Path) -> Result<Self, LedgerError> {
        Self::open(path, convert_transfer_row)
    }
}

impl SyncReader<CsvAccountRow, Account> {
    /// Reader over an accounts CSV
    pub fn accounts(path: &Path) -> Result<Self, LedgerError> {
        Self::open(path, convert_account_row)
    }
}

impl<Row: DeserializeOwned, T> Iterator for SyncReader<Row, T> {
    type Item = Result<T, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<Row>();
        let result = deserializer.next()?;

        self.line_num += 1;
        // +1 for the header row
        let line = self.line_num + 1;

        Some(match result {
            Ok(row) => (self.convert)(row).map_err(|e| LedgerError::ParseError {
                line: Some(line),
                message: e.to_string(),
            }),
            Err(e) => Err(e.into()),
        })
    }
}

fn collect_valid<Row: DeserializeOwned, T>(
    reader: SyncReader<Row, T>,
    path: &Path,
) -> Vec<T> {
    let mut skipped = 0usize;
    let items: Vec<T> = reader
        .filter_map(|result| match result {
            Ok(item) => Some(item),
            Err(e) => {
                skipped += 1;
                warn!(path = %path.display(), error = %e, "skipping malformed row");
                None
            }
        })
        .collect();

    info!(path = %path.display(), loaded = items.len(), skipped, "seed file loaded");
    items
}

/// Load every valid transfer from a CSV file
pub fn load_transfers(path: &Path) -> Result<Vec<TransferRecord>, LedgerError> {
    Ok(collect_valid(SyncReader::transfers(path)?, path))
}

/// Load every valid account from a CSV file
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, LedgerError> {
    Ok(collect_valid(SyncReader::accounts(path)?, path))
}

/// Seed an in-memory account service from an accounts file and an optional
/// transfers file
///
/// Transfers that reuse an earlier id or name an account missing from the
/// accounts file are dropped with a warning by
/// [`InMemoryTransferService::with_data`].
pub fn load_service(
    accounts: &Path,
    transfers: Option<&Path>,
) -> Result<InMemoryTransferService, LedgerError> {
    let accounts = load_accounts(accounts)?;
    let transfers = match transfers {
        Some(path) => load_transfers(path)?,
        None => Vec::new(),
    };
    Ok(InMemoryTransferService::with_data(accounts, transfers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TransferStatus, TransferType};
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TRANSFER_HEADER: &str =
        "transfer_id,transfer_type_id,transfer_status_id,account_from,account_to,amount\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_open_fails_on_missing_file() {
        let result = SyncReader::transfers(Path::new("nonexistent.csv"));
        match result {
            Err(LedgerError::IoError { message }) => assert!(message.contains("Failed to open file")),
            _ => panic!("expected an I/O error"),
        }
    }

    #[test]
    fn test_reads_valid_transfer() {
        let file = create_temp_csv(&format!("{TRANSFER_HEADER}1,1,1,10,20,50.00\n"));

        let records: Vec<_> = SyncReader::transfers(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.transfer_type(), TransferType::Send);
        assert_eq!(record.status(), TransferStatus::Approved);
        assert_eq!(record.amount(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_includes_line_numbers_in_errors() {
        let file = create_temp_csv(&format!(
            "{TRANSFER_HEADER}1,1,1,10,20,50.00\n2,7,1,10,20,5.00\n3,0,0,20,10,1.00\n"
        ));

        let records: Vec<_> = SyncReader::transfers(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());
        match &records[1] {
            Err(LedgerError::ParseError { line, message }) => {
                assert_eq!(*line, Some(3));
                assert!(message.contains("Unknown transfer type code 7"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_handles_whitespace() {
        let file = create_temp_csv(&format!("{TRANSFER_HEADER}  4 , 0 , 0 , 10 , 20 , 5.00 \n"));

        let records: Vec<_> = SyncReader::transfers(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), 4);
    }

    #[test]
    fn test_undeserializable_row_is_error() {
        let file = create_temp_csv(&format!("{TRANSFER_HEADER}x,1,1,10,20,5.00\n"));

        let records: Vec<_> = SyncReader::transfers(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        assert!(matches!(records[0], Err(LedgerError::ParseError { .. })));
    }

    #[test]
    fn test_load_transfers_skips_bad_rows() {
        let file = create_temp_csv(&format!(
            "{TRANSFER_HEADER}1,1,1,10,20,50.00\n2,1,1,10,10,5.00\n3,0,0,20,10,1.00\n"
        ));

        let records = load_transfers(file.path()).unwrap();
        let ids: Vec<_> = records.iter().map(TransferRecord::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_load_transfers_empty_after_header() {
        let file = create_temp_csv(TRANSFER_HEADER);
        assert!(load_transfers(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_accounts() {
        let file = create_temp_csv("account_id,username,balance\n10,alice,100.00\n20,,5\n30,carol,0\n");

        let accounts = load_accounts(file.path()).unwrap();
        let names: Vec<_> = accounts.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "carol"]);
    }
}
