//! Declarative field rules shared by every request body.
//!
//! A field is described by a static slice of [`Rule`]s; [`validate`] walks the
//! slice in order and stops at the first violated rule, so `Required` should
//! come first.

use crate::domain::error::ValidationError;
use chrono::NaiveDate;
use lazy_regex::regex_is_match;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    MaxBytes(usize),
    Email,
    IsoDate,
}

impl Rule {
    pub fn check(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        let length = value.chars().count();

        let violation = match self {
            Rule::Required if value.trim().is_empty() => Some(format!("{} is required", field)),
            Rule::MinLength(min) if length < *min => Some(format!(
                "{} must be at least {} characters long",
                field, min
            )),
            Rule::MaxLength(max) if length > *max => Some(format!(
                "{} must be at most {} characters long",
                field, max
            )),
            Rule::MaxBytes(max) if value.len() > *max => {
                Some(format!("{} must be at most {} bytes long", field, max))
            }
            Rule::Email if !regex_is_match!(r"^[^@\s]+@[^@\s]+\.[^@\s]+$", value) => {
                Some(format!("{} must be a valid email address", field))
            }
            Rule::IsoDate if parse_date(value).is_none() => {
                Some(format!("{} must be a date in YYYY-MM-DD format", field))
            }
            _ => None,
        };

        match violation {
            Some(message) => Err(ValidationError::new(field, message)),
            None => Ok(()),
        }
    }
}

pub fn validate(field: &'static str, value: &str, rules: &[Rule]) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(field, value))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Turns an untrusted payload into the domain value it describes.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}
