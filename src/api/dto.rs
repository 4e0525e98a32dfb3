use crate::domain::attendee::Attendee;
use crate::domain::error::ValidationError;
use crate::domain::event::{self, Event, EventDetails};
use crate::domain::user::{self, NewUser, User};
use crate::domain::validation::{Rule, Validate, parse_date, validate};
use axum::Json;
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Validate for RegisterRequest {
    type Output = NewUser;

    fn validate(self) -> Result<NewUser, ValidationError> {
        validate("email", self.email.trim(), user::EMAIL_RULES)?;
        validate("password", &self.password, user::PASSWORD_RULES)?;
        validate("name", self.name.trim(), user::NAME_RULES)?;

        Ok(NewUser::new(&self.email, self.password, &self.name))
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    type Output = LoginRequest;

    fn validate(self) -> Result<LoginRequest, ValidationError> {
        validate("email", &self.email, &[Rule::Required])?;
        validate("password", &self.password, &[Rule::Required])?;

        Ok(self)
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct EventRequest {
    pub name: String,
    pub description: String,
    #[schema(example = "2030-06-01")]
    pub date: String,
    pub location: String,
}

impl Validate for EventRequest {
    type Output = EventDetails;

    fn validate(self) -> Result<EventDetails, ValidationError> {
        validate("name", &self.name, event::NAME_RULES)?;
        validate("description", &self.description, event::DESCRIPTION_RULES)?;
        validate("date", &self.date, event::DATE_RULES)?;
        validate("location", &self.location, event::LOCATION_RULES)?;

        let date = parse_date(&self.date).ok_or_else(|| {
            ValidationError::new("date", "date must be a date in YYYY-MM-DD format".to_string())
        })?;

        Ok(EventDetails {
            name: self.name,
            description: self.description,
            date,
            location: self.location,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct UserDTO {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<User> for UserDTO {
    fn from(user: User) -> Self {
        UserDTO {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EventDTO {
    pub id: i64,
    #[serde(rename = "ownerId")]
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
}

impl From<Event> for EventDTO {
    fn from(event: Event) -> Self {
        EventDTO {
            id: event.id,
            owner_id: event.owner_id,
            name: event.name,
            description: event.description,
            date: event.date,
            location: event.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct AttendeeDTO {
    pub id: i64,
    #[serde(rename = "eventId")]
    pub event_id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl From<Attendee> for AttendeeDTO {
    fn from(attendee: Attendee) -> Self {
        AttendeeDTO {
            id: attendee.id,
            event_id: attendee.event_id,
            user_id: attendee.user_id,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn reply(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
        (
            status,
            Json(ErrorResponse {
                error: error.into(),
            }),
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}
