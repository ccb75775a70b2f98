//! Records screen: view the imported records list, import a workbook, export the list.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::sheet::{RecordStore, column_headers};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{FormField, draw_form};

/// Shown when an import fails for any reason.
pub const IMPORT_FAILED: &str = "Error reading file. Please ensure it's a valid Excel file.";

/// Message shown after a successful import of `count` records.
pub fn import_succeeded(count: usize) -> String {
    format!("Successfully imported {count} records!")
}

/// Columns shown in the preview table.
const PREVIEW_COLUMNS: usize = 4;

/// State for the records screen.
#[derive(Debug, Clone, Default)]
pub struct RecordsState {
    path: String,
    scroll: usize,
}

impl RecordsState {
    /// Creates a new records state with an empty import path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// `row_count` is the size of the records list; scrolling stops at its last row.
    pub fn handle_key(&mut self, key: KeyEvent, row_count: usize) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('e') => Action::ExportRecords,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.scroll = self.visible_scroll(row_count).saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(row_count.saturating_sub(1));
                Action::None
            }
            KeyCode::Backspace => {
                self.path.pop();
                Action::None
            }
            KeyCode::Enter => match self.path.trim() {
                "" => Action::None,
                path => Action::ImportRecords(PathBuf::from(path)),
            },
            KeyCode::Esc => Action::Navigate(Screen::Register),
            KeyCode::Char(ch) => {
                self.path.push(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns the import path typed so far.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the index of the first visible row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Returns the first visible row for a list of `row_count` rows.
    ///
    /// An import can shrink the list below the current scroll position.
    pub fn visible_scroll(&self, row_count: usize) -> usize {
        self.scroll.min(row_count.saturating_sub(1))
    }
}

/// Renders the records screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_records(state: &RecordsState, store: &RecordStore, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Records ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [count_area, table_area, path_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let count = Line::from(Span::styled(
        format!("Records: {}", store.len()),
        Style::default().fg(Color::White),
    ));
    frame.render_widget(Paragraph::new(count), count_area);

    let headers: Vec<&str> = column_headers(store.records())
        .into_iter()
        .take(PREVIEW_COLUMNS)
        .collect();
    if headers.is_empty() {
        let empty = Paragraph::new("No records. Import a workbook below.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, table_area);
    } else {
        let first = state.visible_scroll(store.len());
        let rows = store.records().iter().skip(first).map(|record| {
            Row::new(
                headers
                    .iter()
                    .map(|h| record.get(h).unwrap_or("").to_string())
                    .collect::<Vec<_>>(),
            )
        });
        let widths = vec![Constraint::Ratio(1, headers.len() as u32); headers.len()];
        let table = Table::new(rows, widths).header(
            Row::new(headers.iter().map(|h| h.to_string()).collect::<Vec<_>>()).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        );
        frame.render_widget(table, table_area);
    }

    let path_field = FormField::text("Import file", "path/to/registrations.xlsx")
        .with_value(state.path());
    draw_form(&[path_field], 0, frame, path_area);

    let footer = Paragraph::new(Line::from(
        "Enter: import  Ctrl-E: export  ↑/↓: scroll  Esc/F2: form  F1: help",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..press(KeyCode::Char(ch))
        }
    }

    #[test]
    fn typing_builds_path() {
        let mut state = RecordsState::new();
        for ch in "a.xlsx".chars() {
            state.handle_key(press(KeyCode::Char(ch)), 0);
        }
        state.handle_key(press(KeyCode::Backspace), 0);
        assert_eq!(state.path(), "a.xls");
    }

    #[test]
    fn enter_with_path_imports() {
        let mut state = RecordsState::new();
        for ch in " regs.xlsx ".chars() {
            state.handle_key(press(KeyCode::Char(ch)), 0);
        }
        assert_eq!(
            state.handle_key(press(KeyCode::Enter), 0),
            Action::ImportRecords(PathBuf::from("regs.xlsx"))
        );
    }

    #[test]
    fn enter_without_path_does_nothing() {
        let mut state = RecordsState::new();
        assert_eq!(state.handle_key(press(KeyCode::Enter), 0), Action::None);
    }

    #[test]
    fn ctrl_e_exports() {
        let mut state = RecordsState::new();
        assert_eq!(state.handle_key(ctrl('e'), 0), Action::ExportRecords);
        assert_eq!(state.path(), "");
    }

    #[test]
    fn other_ctrl_keys_are_ignored() {
        let mut state = RecordsState::new();
        assert_eq!(state.handle_key(ctrl('x'), 0), Action::None);
        assert_eq!(state.path(), "");
    }

    #[test]
    fn esc_returns_to_form() {
        let mut state = RecordsState::new();
        assert_eq!(
            state.handle_key(press(KeyCode::Esc), 0),
            Action::Navigate(Screen::Register)
        );
    }

    #[test]
    fn scroll_saturates_at_top() {
        let mut state = RecordsState::new();
        state.handle_key(press(KeyCode::Up), 5);
        assert_eq!(state.scroll(), 0);
        state.handle_key(press(KeyCode::Down), 5);
        state.handle_key(press(KeyCode::Down), 5);
        state.handle_key(press(KeyCode::Up), 5);
        assert_eq!(state.scroll(), 1);
    }

    #[test]
    fn scroll_stops_at_last_row() {
        let mut state = RecordsState::new();
        for _ in 0..10 {
            state.handle_key(press(KeyCode::Down), 3);
        }
        assert_eq!(state.scroll(), 2);
    }

    #[test]
    fn scroll_stays_at_top_of_empty_list() {
        let mut state = RecordsState::new();
        state.handle_key(press(KeyCode::Down), 0);
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn visible_scroll_clamps_after_list_shrinks() {
        let mut state = RecordsState::new();
        for _ in 0..5 {
            state.handle_key(press(KeyCode::Down), 10);
        }
        assert_eq!(state.scroll(), 5);
        assert_eq!(state.visible_scroll(2), 1);
        assert_eq!(state.visible_scroll(0), 0);
        assert_eq!(state.visible_scroll(10), 5);

        state.handle_key(press(KeyCode::Up), 2);
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn import_messages() {
        assert_eq!(import_succeeded(3), "Successfully imported 3 records!");
        assert!(IMPORT_FAILED.starts_with("Error reading file."));
    }
}
