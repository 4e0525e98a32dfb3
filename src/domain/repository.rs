use crate::domain::attendee::Attendee;
use crate::domain::event::{Event, EventDetails};
use crate::domain::user::{NewUser, User};
use async_trait::async_trait;
use sqlx::Error as SqlxError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound(String),
    Conflict(String),
    Database(SqlxError),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(msg) => write!(f, "{}", msg),
            RepositoryError::Conflict(msg) => write!(f, "Conflict error: {}", msg),
            RepositoryError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl Error for RepositoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RepositoryError::Database(e) => Some(e),
            _ => None,
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;
    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError>;
    async fn update_password(&self, id: i64, password: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, owner_id: i64, details: &EventDetails)
    -> Result<Event, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Event, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn update(&self, event: &Event) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    async fn insert(&self, event_id: i64, user_id: i64) -> Result<Attendee, RepositoryError>;
    async fn get_by_event_and_user(
        &self,
        event_id: i64,
        user_id: i64,
    ) -> Result<Attendee, RepositoryError>;
    async fn get_users_by_event(&self, event_id: i64) -> Result<Vec<User>, RepositoryError>;
    async fn get_events_by_user(&self, user_id: i64) -> Result<Vec<Event>, RepositoryError>;
    /// Removing a pair that does not exist is not an error.
    async fn delete(&self, event_id: i64, user_id: i64) -> Result<(), RepositoryError>;
}
