use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::{info, warn};

use super::error::SheetError;
use super::record::Record;

/// Column name given to a header cell that is blank.
pub const EMPTY_HEADER: &str = "__EMPTY";

/// Parses the first sheet of a workbook into records.
///
/// The first row supplies column names; every following row with at least
/// one non-empty cell becomes a record. Empty cells are left out of the
/// record. Blank header cells are named [`EMPTY_HEADER`] and repeated names
/// get a `_1`, `_2`, … suffix.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<Record>, SheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(SheetError::NoSheets)??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers = header_names(header_row);

    let records = rows
        .filter_map(|row| {
            let record: Record = headers
                .iter()
                .zip(row)
                .filter_map(|(header, cell)| cell_text(cell).map(|text| (header.as_str(), text)))
                .collect();
            (!record.is_empty()).then_some(record)
        })
        .collect();
    Ok(records)
}

/// Reads the file at `path` and parses it with [`parse_workbook`].
///
/// The parse runs on the blocking pool so the caller's runtime stays responsive.
pub async fn import_file(path: impl AsRef<Path>) -> Result<Vec<Record>, SheetError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let result = tokio::task::spawn_blocking(move || parse_workbook(&bytes)).await?;
    match &result {
        Ok(records) => info!(path = %path.display(), count = records.len(), "imported records"),
        Err(e) => warn!(path = %path.display(), error = %e, "import failed"),
    }
    result
}

fn header_names(row: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    row.iter()
        .map(|cell| {
            let base = cell_text(cell).unwrap_or_else(|| EMPTY_HEADER.to_string());
            let count = seen.entry(base.clone()).or_insert(0);
            let name = match *count {
                0 => base,
                n => format!("{base}_{n}"),
            };
            *count += 1;
            name
        })
        .collect()
}

/// Renders a cell as text; `None` for empty cells.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        // Integral floats print without a trailing `.0` (phone numbers, years).
        Data::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
