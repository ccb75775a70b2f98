use std::collections::BTreeSet;

use tracing::debug;

use crate::model::{
    AcademicYear, Field, FieldErrors, FormValues, Registration, ValidationError, validate,
};
use crate::submit::{Notification, Submitter};

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Accepting input; the initial state.
    #[default]
    Editing,
    /// A registration has been handed to the submitter and no result has arrived.
    Submitting,
    /// The last submission finished, successfully or not.
    IdleAfterResult,
}

/// Outcome of [`FormController::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// At least one field failed; nothing should be sent.
    Invalid(FieldErrors),
    /// A previous submission is still in flight; nothing should be sent.
    InFlight,
    /// All fields passed; send this registration.
    Ready(Registration),
}

/// Registration form state: values, touched fields, errors and lifecycle phase.
///
/// Errors are recomputed from the values after every event. An error is
/// only *visible* (see [`error`](Self::error)) once its field is touched.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    values: FormValues,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    phase: Phase,
}

impl FormController {
    /// Creates an empty form in [`Phase::Editing`].
    pub fn new() -> Self {
        let mut form = Self::default();
        form.revalidate();
        form
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Returns the error to display for `field`: present only when the field
    /// is touched and its value fails its rule.
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field).filter(|_| self.is_touched(field))
    }

    /// Returns the errors of every failing field, touched or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replaces the value of `field`.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.after_edit();
    }

    /// Appends a character to a text field. Ignored for the year select.
    pub fn push_char(&mut self, field: Field, ch: char) {
        if field == Field::Year {
            return;
        }
        let mut value = self.values.value(field).to_string();
        value.push(ch);
        self.change(field, value);
    }

    /// Removes the last character of a text field. Ignored for the year select.
    pub fn pop_char(&mut self, field: Field) {
        if field == Field::Year {
            return;
        }
        let mut value = self.values.value(field).to_string();
        value.pop();
        self.change(field, value);
    }

    /// Selects a year option; `None` is the placeholder.
    pub fn select_year(&mut self, year: Option<AcademicYear>) {
        self.values.year = year;
        self.after_edit();
    }

    /// Moves the year select to the next or previous option, wrapping through the placeholder.
    pub fn cycle_year(&mut self, forward: bool) {
        self.select_year(AcademicYear::cycle(self.values.year, forward));
    }

    /// Marks `field` as interacted with, surfacing its error if any.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Validates every field and, if all pass, moves to [`Phase::Submitting`].
    ///
    /// All fields become touched so that every error is visible.
    pub fn begin_submit(&mut self, submission_date: String) -> SubmitAttempt {
        if self.phase == Phase::Submitting {
            return SubmitAttempt::InFlight;
        }
        self.touched.extend(Field::all().iter().copied());
        self.revalidate();

        match Registration::new(&self.values, submission_date) {
            Ok(registration) => {
                self.phase = Phase::Submitting;
                SubmitAttempt::Ready(registration)
            }
            Err(errors) => {
                debug!(failing = errors.len(), "submit blocked by validation");
                self.phase = Phase::Editing;
                SubmitAttempt::Invalid(errors)
            }
        }
    }

    /// Records the result of the in-flight submission.
    ///
    /// Success clears the form; failure keeps the values for a retry.
    pub fn finish(&mut self, succeeded: bool) {
        if succeeded {
            self.reset();
        }
        self.phase = Phase::IdleAfterResult;
    }

    /// Runs one full submission: validate, send through `submitter`, record the result.
    ///
    /// Returns `None` when nothing was sent, otherwise the notification to show.
    pub async fn submit_with<S: Submitter>(
        &mut self,
        submitter: &S,
        submission_date: String,
    ) -> Option<Notification> {
        let SubmitAttempt::Ready(registration) = self.begin_submit(submission_date) else {
            return None;
        };
        let result = submitter.submit(&registration).await;
        let notification = Notification::from_result(&result);
        self.finish(notification.is_success());
        Some(notification)
    }

    /// Clears values, touched flags and errors. The phase is left unchanged.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
        self.revalidate();
    }

    fn after_edit(&mut self) {
        if self.phase == Phase::IdleAfterResult {
            self.phase = Phase::Editing;
        }
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values);
    }
}
