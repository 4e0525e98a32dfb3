use crate::domain::attendee::Attendee;
use crate::domain::event::Event;
use crate::domain::repository::{AttendeeRepository, RepositoryError};
use crate::domain::user::User;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite, query, query_as};

#[derive(Clone)]
pub struct SqliteAttendeeRepository {
    pool: Pool<Sqlite>,
}

impl SqliteAttendeeRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendeeRepository for SqliteAttendeeRepository {
    async fn insert(&self, event_id: i64, user_id: i64) -> Result<Attendee, RepositoryError> {
        let attendee = query_as::<_, Attendee>(
            r#"
            INSERT INTO attendees (event_id, user_id)
            VALUES (?, ?)
            RETURNING id, event_id, user_id
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(attendee)
    }

    async fn get_by_event_and_user(
        &self,
        event_id: i64,
        user_id: i64,
    ) -> Result<Attendee, RepositoryError> {
        query_as::<_, Attendee>(
            "SELECT id, event_id, user_id FROM attendees WHERE event_id = ? AND user_id = ?",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound("Attendee not found".to_string()))
    }

    async fn get_users_by_event(&self, event_id: i64) -> Result<Vec<User>, RepositoryError> {
        let users = query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.password, u.name
            FROM users u
            JOIN attendees a ON a.user_id = u.id
            WHERE a.event_id = ?
            ORDER BY a.id
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn get_events_by_user(&self, user_id: i64) -> Result<Vec<Event>, RepositoryError> {
        let events = query_as::<_, Event>(
            r#"
            SELECT e.id, e.owner_id, e.name, e.description, e.date, e.location
            FROM events e
            JOIN attendees a ON a.event_id = e.id
            WHERE a.user_id = ?
            ORDER BY a.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn delete(&self, event_id: i64, user_id: i64) -> Result<(), RepositoryError> {
        query("DELETE FROM attendees WHERE event_id = ? AND user_id = ?")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
