//! TUI screen implementations.

pub mod help;
pub mod records;
pub mod register;

pub use help::{HelpState, draw_help};
pub use records::{IMPORT_FAILED, RecordsState, draw_records, import_succeeded};
pub use register::{RegisterState, draw_register};
