use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info};
use serde::Deserialize;

use crate::error::{Result, SalesSummaryError};
use crate::record::SalesRecord;

/// Date convention of the ledger export.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// One row of the ledger export, before date parsing and branch screening.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLedgerRow {
    pub date: String,
    #[serde(default)]
    pub branch: String,
    pub product: String,
    pub customer: String,
    pub gross_subtotal: f64,
}

/// Reads a CSV ledger export into typed records.
///
/// Expects a header row with `date,branch,product,customer,gross_subtotal`
/// columns and DD/MM/YYYY dates. Rows without a branch are dropped, so every
/// record handed to the engine carries a non-empty branch. A malformed date
/// aborts the load with the offending row number.
pub fn read_ledger_csv<R: io::Read>(reader: R) -> Result<Vec<SalesRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (idx, row) in csv_reader.deserialize::<RawLedgerRow>().enumerate() {
        let row = row?;
        // Row numbers are 1-based and count the header line.
        let row_number = idx + 2;

        if row.branch.trim().is_empty() {
            dropped += 1;
            continue;
        }

        let date = NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT).map_err(|_| {
            SalesSummaryError::InvalidDate {
                row: row_number,
                value: row.date.clone(),
            }
        })?;

        records.push(SalesRecord {
            date,
            branch: row.branch.trim().to_string(),
            product: row.product,
            customer: row.customer,
            gross_subtotal: row.gross_subtotal,
        });
    }

    if dropped > 0 {
        debug!("Dropped {} ledger rows with no branch", dropped);
    }

    Ok(records)
}

/// Opens `path` and reads it as a CSV ledger export.
pub fn load_ledger_file<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>> {
    let file = File::open(path.as_ref())?;
    let records = read_ledger_csv(file)?;
    info!(
        "Loaded {} sales records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}
