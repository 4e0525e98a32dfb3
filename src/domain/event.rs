use crate::domain::validation::Rule;
use chrono::NaiveDate;
use sqlx::FromRow;

pub const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(100)];
pub const DESCRIPTION_RULES: &[Rule] =
    &[Rule::Required, Rule::MinLength(10), Rule::MaxLength(150)];
pub const DATE_RULES: &[Rule] = &[Rule::Required, Rule::IsoDate];
pub const LOCATION_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(255)];

#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
}

/// The client-editable part of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
}

impl Event {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }

    /// Replaces every editable field, id and owner stay untouched.
    pub fn with_details(self, details: EventDetails) -> Self {
        Event {
            id: self.id,
            owner_id: self.owner_id,
            name: details.name,
            description: details.description,
            date: details.date,
            location: details.location,
        }
    }
}
