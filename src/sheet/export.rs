use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use tracing::info;

use super::error::SheetError;
use super::record::Record;

/// Name of the single worksheet in an exported workbook.
pub const SHEET_NAME: &str = "Registrations";

/// Character-width hints for the first columns, in the usual column order
/// (name, email, phone, college, year, department, …, submission date).
pub const COLUMN_WIDTHS: &[f64] = &[20.0, 30.0, 15.0, 25.0, 10.0, 20.0, 15.0, 40.0, 20.0];

/// Returns the union of keys across `records`, in order of first appearance.
pub fn column_headers(records: &[Record]) -> Vec<&str> {
    let mut headers: Vec<&str> = Vec::new();
    for key in records.iter().flat_map(Record::keys) {
        if !headers.contains(&key) {
            headers.push(key);
        }
    }
    headers
}

/// Returns the export file name for `date`: `pookalam_registrations_YYYY-MM-DD.xlsx`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("pookalam_registrations_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Serializes `records` into an `.xlsx` workbook held in memory.
///
/// Row 1 holds the column headers; each record follows on its own row, with
/// a blank cell wherever the record lacks a column. Returns
/// [`SheetError::NoData`] for an empty list.
pub fn write_workbook(records: &[Record]) -> Result<Vec<u8>, SheetError> {
    if records.is_empty() {
        return Err(SheetError::NoData);
    }

    let headers = column_headers(records);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col_num(col)?, *header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = u32::try_from(i + 1).map_err(|_| SheetError::TooLarge)?;
        for (col, header) in headers.iter().enumerate() {
            if let Some(value) = record.get(header) {
                sheet.write_string(row, col_num(col)?, value)?;
            }
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col_num(col)?, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Writes `records` to `dir` under [`export_filename`] for `date`, returning the path.
///
/// Nothing is written when the list is empty.
pub fn export_to_dir(
    records: &[Record],
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, SheetError> {
    let bytes = write_workbook(records)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(date));
    fs::write(&path, bytes)?;
    info!(path = %path.display(), rows = records.len(), "exported records");
    Ok(path)
}

fn col_num(col: usize) -> Result<u16, SheetError> {
    u16::try_from(col).map_err(|_| SheetError::TooLarge)
}
