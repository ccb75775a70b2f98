//! Form widget: a focus ring plus a renderer for labelled input rows.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// How a field takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text typed character by character.
    Text,
    /// A fixed list of options stepped with ←/→.
    Select,
}

/// One row of a rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Display label shown in the row's title.
    pub label: String,
    /// Current value; empty shows the placeholder.
    pub value: String,
    /// Text shown dimmed while the value is empty.
    pub placeholder: String,
    /// Error message to show under the row, if any.
    pub error: Option<String>,
    pub kind: InputKind,
}

impl FormField {
    /// Creates a text field with no value.
    pub fn text(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            placeholder: placeholder.into(),
            error: None,
            kind: InputKind::Text,
        }
    }

    /// Creates a select field with no value.
    pub fn select(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Select,
            ..Self::text(label, placeholder)
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// Focus position over a fixed number of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    focus: usize,
    len: usize,
}

impl FocusRing {
    /// Creates a ring over `len` fields with focus on the first.
    pub fn new(len: usize) -> Self {
        Self { focus: 0, len }
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.focus = (self.focus + 1) % self.len;
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.focus = (self.focus + self.len - 1) % self.len;
    }

    /// Moves focus to `index`; out-of-range indices are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.len {
            self.focus = index;
        }
    }
}

/// Renders `fields` stacked vertically, highlighting the one at `focus`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[FormField], focus: usize, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_focused = i == focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        // Every field in a form is required.
        let label = format!("{} *", field.label);

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = Vec::new();
        if field.kind == InputKind::Select {
            spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
        }
        if field.value.is_empty() {
            spans.push(Span::styled(
                &field.placeholder,
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(&field.value));
        }
        match field.kind {
            InputKind::Select => {
                spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
            }
            InputKind::Text if is_focused => {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            InputKind::Text => {}
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Error overlaps the bottom border of its row.
        if let Some(ref err) = field.error
            && rows[i].height >= row_height
        {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
