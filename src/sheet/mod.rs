//! Spreadsheet import/export of the session's records list.
//!
//! Export writes a single `Registrations` sheet with one row per record;
//! import reads the first sheet of any workbook calamine understands. The
//! list is independent of form submissions.

mod error;
mod export;
mod import;
mod record;

pub use error::SheetError;
pub use export::{
    COLUMN_WIDTHS, SHEET_NAME, column_headers, export_filename, export_to_dir, write_workbook,
};
pub use import::{EMPTY_HEADER, import_file, parse_workbook};
pub use record::{Record, RecordStore};
