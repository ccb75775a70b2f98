//! Actions returned by screen event handlers.

use std::path::PathBuf;

use crate::model::Registration;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to start background work, update shared
/// state, and navigate between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Send a validated registration to the backend.
    Submit(Registration),
    /// Write the records list to a spreadsheet in the export directory.
    ExportRecords,
    /// Replace the records list with the contents of the spreadsheet at this path.
    ImportRecords(PathBuf),
    /// Quit the application.
    Quit,
}
