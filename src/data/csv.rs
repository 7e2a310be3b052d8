//! CSV loading for two-column (x, y) datasets.
//!
//! Supported format:
//! - UTF-8, comma-separated, exactly two numeric columns per row
//! - Optional header row (auto-detected: the first row is a header if it
//!   contains any non-numeric, non-empty cell)
//! - Surrounding whitespace in cells is ignored; blank lines are skipped

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::data::sample::Sample;
use crate::error::{Error, Result};

/// Reads a dataset from a CSV file on disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let file = File::open(path)?;
    parse_csv(BufReader::new(file))
}

/// Parses CSV data into samples.
///
/// # Errors
/// - `Error::Parse` when a row does not hold exactly two numbers
/// - `Error::EmptyDataset` when no data rows remain after the header
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        if idx == 0 && is_header(&record) {
            continue;
        }

        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 1);
        samples.push(parse_row(&record, row)?);
    }

    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }

    Ok(samples)
}

/// Returns `true` if the record looks like a header (any cell non-numeric).
fn is_header(record: &StringRecord) -> bool {
    record
        .iter()
        .any(|cell| !cell.is_empty() && cell.parse::<f64>().is_err())
}

fn parse_row(record: &StringRecord, row: usize) -> Result<Sample> {
    if record.len() != 2 {
        return Err(Error::Parse {
            row,
            message: format!("expected 2 columns (x, y), got {}", record.len()),
        });
    }

    let x = parse_cell(&record[0], row)?;
    let y = parse_cell(&record[1], row)?;
    Ok(Sample { x, y })
}

fn parse_cell(cell: &str, row: usize) -> Result<f64> {
    cell.parse::<f64>().map_err(|_| Error::Parse {
        row,
        message: format!("'{cell}' is not a valid number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_without_header() {
        let data = parse_csv("1,2\n3.5, 4\n".as_bytes()).unwrap();
        assert_eq!(data, vec![Sample::new(1.0, 2.0), Sample::new(3.5, 4.0)]);
    }

    #[test]
    fn skips_detected_header() {
        let data = parse_csv("hours,score\n1,10\n2,20\n".as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0], Sample::new(1.0, 10.0));
    }

    #[test]
    fn reports_row_of_bad_cell() {
        let err = parse_csv("1,2\n3,abc\n".as_bytes()).unwrap_err();
        match err {
            Error::Parse { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse_csv("1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { row: 1, .. }));
    }

    #[test]
    fn header_only_is_empty() {
        let err = parse_csv("x,y\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }
}
