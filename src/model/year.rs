use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label of the select's placeholder option; never a valid year.
pub const YEAR_PLACEHOLDER: &str = "Select Your Option";

/// Academic year of study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicYear {
    #[serde(rename = "1st Year")]
    First,
    #[serde(rename = "2nd Year")]
    Second,
    #[serde(rename = "3rd Year")]
    Third,
    #[serde(rename = "4th Year")]
    Fourth,
}

static ALL_YEARS: &[AcademicYear] = &[
    AcademicYear::First,
    AcademicYear::Second,
    AcademicYear::Third,
    AcademicYear::Fourth,
];

impl AcademicYear {
    /// Returns the option label, which is also the submitted value.
    pub fn label(&self) -> &'static str {
        match self {
            AcademicYear::First => "1st Year",
            AcademicYear::Second => "2nd Year",
            AcademicYear::Third => "3rd Year",
            AcademicYear::Fourth => "4th Year",
        }
    }

    /// Returns all years in ascending order.
    pub fn all() -> &'static [AcademicYear] {
        ALL_YEARS
    }

    /// Steps through `None → 1st → … → 4th → None`, the order of the select's options.
    pub fn cycle(current: Option<AcademicYear>, forward: bool) -> Option<AcademicYear> {
        // Slot 0 is the placeholder.
        let slots = ALL_YEARS.len() + 1;
        let pos = current
            .and_then(|y| ALL_YEARS.iter().position(|&x| x == y))
            .map_or(0, |p| p + 1);
        let next = if forward {
            (pos + 1) % slots
        } else {
            (pos + slots - 1) % slots
        };
        next.checked_sub(1).map(|i| ALL_YEARS[i])
    }
}

#[mutants::skip]
impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the four year labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown academic year: {0}")]
pub struct UnknownYear(pub String);

impl FromStr for AcademicYear {
    type Err = UnknownYear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_YEARS
            .iter()
            .copied()
            .find(|y| y.label() == s)
            .ok_or_else(|| UnknownYear(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_label() {
        for year in AcademicYear::all() {
            assert_eq!(year.label().parse::<AcademicYear>(), Ok(*year));
        }
    }

    #[test]
    fn placeholder_is_not_a_year() {
        assert_eq!(
            YEAR_PLACEHOLDER.parse::<AcademicYear>(),
            Err(UnknownYear(YEAR_PLACEHOLDER.to_string()))
        );
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&AcademicYear::Third).unwrap();
        assert_eq!(json, "\"3rd Year\"");
    }

    #[test]
    fn cycle_forward_from_placeholder() {
        assert_eq!(AcademicYear::cycle(None, true), Some(AcademicYear::First));
    }

    #[test]
    fn cycle_forward_wraps_to_placeholder() {
        assert_eq!(AcademicYear::cycle(Some(AcademicYear::Fourth), true), None);
    }

    #[test]
    fn cycle_backward_from_placeholder() {
        assert_eq!(
            AcademicYear::cycle(None, false),
            Some(AcademicYear::Fourth)
        );
    }

    #[test]
    fn cycle_backward_steps_down() {
        assert_eq!(
            AcademicYear::cycle(Some(AcademicYear::Second), false),
            Some(AcademicYear::First)
        );
    }
}
