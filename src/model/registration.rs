use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::validation::{FieldErrors, validate};
use super::year::AcademicYear;

/// Raw values of the registration form as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub department: String,
    /// `None` while the placeholder option is selected.
    pub year: Option<AcademicYear>,
}

impl FormValues {
    /// Returns the text shown for `field`; the year is its label, or empty.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::College => &self.college,
            Field::Department => &self.department,
            Field::Year => self.year.as_ref().map_or("", AcademicYear::label),
        }
    }

    /// Replaces the value of `field`. For the year, any text other than
    /// an option label clears the selection.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::College => self.college = value,
            Field::Department => self.department = value,
            Field::Year => self.year = value.parse().ok(),
        }
    }
}

/// A completed registration as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub year: AcademicYear,
    pub department: String,
    pub submission_date: String,
}

impl Registration {
    /// Builds a registration from form values, validating every field first.
    pub fn new(values: &FormValues, submission_date: String) -> Result<Self, FieldErrors> {
        let errors = validate(values);
        let Some(year) = values.year.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };
        Ok(Self {
            full_name: values.full_name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            college: values.college.clone(),
            year,
            department: values.department.clone(),
            submission_date,
        })
    }
}

/// Formats a submission timestamp the way en-US `toLocaleString` does,
/// e.g. `9/1/2025, 4:05:09 PM`.
pub fn format_submission_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
