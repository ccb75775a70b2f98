mod field;
mod registration;
mod validation;
mod year;

pub use field::Field;
pub use registration::{FormValues, Registration, format_submission_date};
pub use validation::{
    FieldErrors, ValidationError, validate, validate_college, validate_department,
    validate_email, validate_field, validate_full_name, validate_phone, validate_year,
};
pub use year::{AcademicYear, UnknownYear, YEAR_PLACEHOLDER};
