use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::Field;
use super::registration::FormValues;
use super::year::AcademicYear;

/// Validation errors for registration form fields.
///
/// The `Display` text is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Name must be at least 2 characters")]
    FullNameTooShort,
    #[error("Name must be less than 50 characters")]
    FullNameTooLong,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must be 10 digits")]
    InvalidPhone,
    #[error("College name is required")]
    CollegeRequired,
    #[error("College name must be at least 2 characters")]
    CollegeTooShort,
    #[error("Department is required")]
    DepartmentRequired,
    #[error("Academic year is required")]
    YearRequired,
}

const FULL_NAME_MIN: usize = 2;
const FULL_NAME_MAX: usize = 50;
const COLLEGE_MIN: usize = 2;

// HTML living-standard `type=email` pattern.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid hardcoded regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid hardcoded regex"));

/// Validates a full name: required, 2 to 50 characters.
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    match name.chars().count() {
        0 => Err(ValidationError::FullNameRequired),
        n if n < FULL_NAME_MIN => Err(ValidationError::FullNameTooShort),
        n if n > FULL_NAME_MAX => Err(ValidationError::FullNameTooLong),
        _ => Ok(()),
    }
}

/// Validates an email address against the HTML email syntax.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email {
        "" => Err(ValidationError::EmailRequired),
        s if EMAIL_RE.is_match(s) => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Validates a phone number: exactly ten ASCII digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    match phone {
        "" => Err(ValidationError::PhoneRequired),
        s if PHONE_RE.is_match(s) => Ok(()),
        _ => Err(ValidationError::InvalidPhone),
    }
}

/// Validates a college name: required, at least 2 characters.
pub fn validate_college(college: &str) -> Result<(), ValidationError> {
    match college.chars().count() {
        0 => Err(ValidationError::CollegeRequired),
        n if n < COLLEGE_MIN => Err(ValidationError::CollegeTooShort),
        _ => Ok(()),
    }
}

/// Validates a department: required.
pub fn validate_department(department: &str) -> Result<(), ValidationError> {
    if department.is_empty() {
        Err(ValidationError::DepartmentRequired)
    } else {
        Ok(())
    }
}

/// Validates the academic year: one of the four options must be chosen.
pub fn validate_year(year: Option<AcademicYear>) -> Result<(), ValidationError> {
    year.map(|_| ()).ok_or(ValidationError::YearRequired)
}

/// Checks a single field of `values` against its rule.
pub fn validate_field(field: Field, values: &FormValues) -> Result<(), ValidationError> {
    match field {
        Field::FullName => validate_full_name(&values.full_name),
        Field::Email => validate_email(&values.email),
        Field::Phone => validate_phone(&values.phone),
        Field::College => validate_college(&values.college),
        Field::Department => validate_department(&values.department),
        Field::Year => validate_year(values.year),
    }
}

/// Checks every field, collecting one error per failing field.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for &field in Field::all() {
        if let Err(e) = validate_field(field, values) {
            errors.insert(field, e);
        }
    }
    errors
}

/// Mapping from field to its current error. A missing entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    /// Returns the error for `field`, if any.
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}
