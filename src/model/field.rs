use std::fmt;

/// A user-entered field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    College,
    Department,
    Year,
}

static ALL_FIELDS: &[Field] = &[
    Field::FullName,
    Field::Email,
    Field::Phone,
    Field::College,
    Field::Department,
    Field::Year,
];

impl Field {
    /// Returns the JSON / column key for this field (e.g. `fullName`).
    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::College => "college",
            Field::Department => "department",
            Field::Year => "year",
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::College => "College/Institution",
            Field::Department => "Department",
            Field::Year => "Academic Year",
        }
    }

    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Position of this field within [`Field::all`].
    pub fn index(self) -> usize {
        ALL_FIELDS.iter().position(|&f| f == self).unwrap_or(0)
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
