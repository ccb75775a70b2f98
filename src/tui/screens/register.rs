//! Registration screen: the competition sign-up form.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{FormController, Phase, SubmitAttempt};
use crate::model::{Field, YEAR_PLACEHOLDER, format_submission_date};
use crate::tui::action::Action;
use crate::tui::widgets::form::{FocusRing, FormField, draw_form};

/// State for the registration screen.
#[derive(Debug, Clone)]
pub struct RegisterState {
    form: FormController,
    focus: FocusRing,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterState {
    /// Creates an empty form focused on the first field.
    pub fn new() -> Self {
        Self {
            form: FormController::new(),
            focus: FocusRing::new(Field::all().len()),
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let field = self.focused_field();
        match key.code {
            KeyCode::Tab => {
                self.form.blur(field);
                self.focus.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.blur(field);
                self.focus.focus_prev();
                Action::None
            }
            KeyCode::Left if field == Field::Year => {
                self.form.cycle_year(false);
                Action::None
            }
            KeyCode::Right if field == Field::Year => {
                self.form.cycle_year(true);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.pop_char(field);
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(field, ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns the form controller.
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Returns the form controller for applying submission results.
    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// Returns the field that currently has focus.
    pub fn focused_field(&self) -> Field {
        Field::all()[self.focus.focus()]
    }

    /// Builds the rows to render from the controller's current state.
    pub fn fields(&self) -> Vec<FormField> {
        Field::all()
            .iter()
            .map(|&field| {
                let row = match field {
                    Field::Year => FormField::select(field.label(), YEAR_PLACEHOLDER),
                    _ => FormField::text(field.label(), placeholder(field)),
                };
                row.with_value(self.form.values().value(field))
                    .with_error(self.form.error(field).map(|e| e.to_string()))
            })
            .collect()
    }

    /// Validates the whole form and, if it passes, hands the registration to the app.
    fn submit(&mut self) -> Action {
        self.form.blur(self.focused_field());
        match self
            .form
            .begin_submit(format_submission_date(&Local::now()))
        {
            SubmitAttempt::Ready(registration) => Action::Submit(registration),
            SubmitAttempt::Invalid(errors) => {
                if let Some((first, _)) = errors.iter().next() {
                    self.focus.set_focus(first.index());
                }
                Action::None
            }
            SubmitAttempt::InFlight => Action::None,
        }
    }
}

static COMPETITION_DETAILS: &[(&str, &str)] = &[
    ("Event Date", "September 1-4, 2025"),
    ("Prizes", "Win exciting"),
    ("Theme", "Create Reels"),
];

static CREDITS: &[&str] = &[
    "© 2025 Code-a-Pookalam. Organized by CODE Association.",
    "Celebrating the fusion of tradition and technology through digital art.",
];

/// The event information panel shown beside the form.
fn competition_details() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Competition Details", heading))];
    for (title, text) in COMPETITION_DETAILS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {title:<12}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*text, Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));
    lines.extend(
        CREDITS
            .iter()
            .map(|c| Line::from(Span::styled(*c, Style::default().fg(Color::DarkGray)))),
    );
    lines
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::FullName => "Enter your full name",
        Field::Email => "your.email@example.com",
        Field::Phone => "9876543210",
        Field::College => "Your college/institution name",
        Field::Department => "Your department",
        Field::Year => YEAR_PLACEHOLDER,
    }
}

/// Renders the registration screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_register(state: &RegisterState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Register for Code-a-Pookalam ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, form_area, status_area, details_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3 * Field::all().len() as u16),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let header = Line::from(Span::styled(
        "Reels competition · 2025 Digital Art Competition",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(header), header_area);

    draw_form(&state.fields(), state.focus.focus(), frame, form_area);

    if state.form().phase() == Phase::Submitting {
        let status = Paragraph::new(Span::styled(
            "Submitting…",
            Style::default().fg(Color::Cyan),
        ));
        frame.render_widget(status, status_area);
    }

    frame.render_widget(Paragraph::new(competition_details()), details_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift-Tab: field  ←/→: year  Enter: register  F3: records  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::model::{AcademicYear, ValidationError};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(state: &mut RegisterState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn fill(state: &mut RegisterState) {
        for value in [
            "Anjali Menon",
            "anjali@example.com",
            "9876543210",
            "CET",
            "Computer Science",
        ] {
            type_str(state, value);
            state.handle_key(press(KeyCode::Tab));
        }
        state.handle_key(press(KeyCode::Right));
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_go_to_focused_field() {
            let mut state = RegisterState::new();
            type_str(&mut state, "Anj");
            assert_eq!(state.form().values().full_name, "Anj");
        }

        #[test]
        fn backspace_removes_last_char() {
            let mut state = RegisterState::new();
            type_str(&mut state, "Anj");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.form().values().full_name, "An");
        }

        #[test]
        fn tab_blurs_and_moves_focus() {
            let mut state = RegisterState::new();
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focused_field(), Field::Email);
            assert_eq!(
                state.form().error(Field::FullName),
                Some(ValidationError::FullNameRequired)
            );
        }

        #[test]
        fn back_tab_wraps_to_year() {
            let mut state = RegisterState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focused_field(), Field::Year);
        }

        #[test]
        fn arrows_cycle_year_only_on_year_field() {
            let mut state = RegisterState::new();
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.form().values().year, None);

            state.handle_key(press(KeyCode::BackTab));
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.form().values().year, Some(AcademicYear::Second));
        }

        #[test]
        fn control_chars_are_not_typed() {
            let mut state = RegisterState::new();
            let ctrl_e = KeyEvent {
                modifiers: KeyModifiers::CONTROL,
                ..press(KeyCode::Char('e'))
            };
            state.handle_key(ctrl_e);
            assert_eq!(state.form().values().full_name, "");
        }

        #[test]
        fn esc_quits() {
            let mut state = RegisterState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn invalid_form_returns_none_and_focuses_first_error() {
            let mut state = RegisterState::new();
            type_str(&mut state, "Anjali");
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Tab));

            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
            assert_eq!(state.focused_field(), Field::Email);
            assert_eq!(state.form().phase(), Phase::Editing);
        }

        #[test]
        fn valid_form_returns_submit() {
            let mut state = RegisterState::new();
            fill(&mut state);

            let action = state.handle_key(press(KeyCode::Enter));
            let Action::Submit(registration) = action else {
                panic!("expected Submit, got {action:?}");
            };
            assert_eq!(registration.email, "anjali@example.com");
            assert_eq!(registration.year, AcademicYear::First);
            assert!(!registration.submission_date.is_empty());
            assert_eq!(state.form().phase(), Phase::Submitting);
        }

        #[test]
        fn enter_while_submitting_does_nothing() {
            let mut state = RegisterState::new();
            fill(&mut state);
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
        }
    }

    mod details {
        use super::*;

        fn text(lines: &[Line]) -> String {
            lines
                .iter()
                .map(|l| {
                    l.spans
                        .iter()
                        .map(|s| s.content.to_string())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        }

        #[test]
        fn lists_event_information_and_credits() {
            let details = text(&competition_details());
            assert!(details.starts_with("Competition Details"));
            assert!(details.contains("September 1-4, 2025"));
            assert!(details.contains("Prizes"));
            assert!(details.contains("Create Reels"));
            assert!(details.contains("Organized by CODE Association."));
        }

        #[test]
        fn draws_details_below_form() {
            use ratatui::Terminal;
            use ratatui::backend::TestBackend;

            let state = RegisterState::new();
            let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
            terminal
                .draw(|frame| draw_register(&state, frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let screen: String = (0..buf.area.height)
                .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
                .map(|(x, y)| buf[(x, y)].symbol().chars().next().unwrap_or(' '))
                .collect();
            assert!(screen.contains("Full Name *"));
            assert!(screen.contains("Competition Details"));
            assert!(screen.contains("September 1-4, 2025"));
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn rows_follow_form_order_with_visible_errors_only() {
            let mut state = RegisterState::new();
            type_str(&mut state, "A");
            let rows = state.fields();
            assert_eq!(rows.len(), Field::all().len());
            assert_eq!(rows[0].label, "Full Name");
            assert_eq!(rows[0].value, "A");
            assert_eq!(rows[0].error, None);

            state.handle_key(press(KeyCode::Tab));
            let rows = state.fields();
            assert_eq!(
                rows[0].error.as_deref(),
                Some("Name must be at least 2 characters")
            );
        }

        #[test]
        fn year_row_is_select_with_placeholder() {
            let state = RegisterState::new();
            let rows = state.fields();
            let year = &rows[Field::Year.index()];
            assert_eq!(year.placeholder, YEAR_PLACEHOLDER);
            assert_eq!(year.value, "");
        }
    }
}
