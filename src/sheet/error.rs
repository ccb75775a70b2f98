/// Errors that can occur while importing or exporting records.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be built.
    #[error("spreadsheet write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// The file is not a readable spreadsheet.
    #[error("spreadsheet read error: {0}")]
    Read(#[from] calamine::Error),

    /// The workbook contains no sheets.
    #[error("spreadsheet has no sheets")]
    NoSheets,

    /// Export was requested for an empty records list.
    #[error("No data to export!")]
    NoData,

    /// More rows or columns than a worksheet can hold.
    #[error("too many rows or columns for a worksheet")]
    TooLarge,

    /// The background parse task panicked or was cancelled.
    #[error("import task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
