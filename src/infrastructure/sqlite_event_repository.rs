use crate::domain::event::{Event, EventDetails};
use crate::domain::repository::{EventRepository, RepositoryError};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite, query, query_as};

#[derive(Clone)]
pub struct SqliteEventRepository {
    pool: Pool<Sqlite>,
}

impl SqliteEventRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn insert(
        &self,
        owner_id: i64,
        details: &EventDetails,
    ) -> Result<Event, RepositoryError> {
        let event = query_as::<_, Event>(
            r#"
            INSERT INTO events (owner_id, name, description, date, location)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, owner_id, name, description, date, location
            "#,
        )
        .bind(owner_id)
        .bind(&details.name)
        .bind(&details.description)
        .bind(details.date)
        .bind(&details.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    async fn get_by_id(&self, id: i64) -> Result<Event, RepositoryError> {
        query_as::<_, Event>(
            "SELECT id, owner_id, name, description, date, location FROM events WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound("Event not found".to_string()))
    }

    async fn get_all(&self) -> Result<Vec<Event>, RepositoryError> {
        let events = query_as::<_, Event>(
            "SELECT id, owner_id, name, description, date, location FROM events ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn update(&self, event: &Event) -> Result<(), RepositoryError> {
        let result = query(
            r#"
            UPDATE events
            SET name = ?, description = ?, date = ?, location = ?
            WHERE id = ?
            "#,
        )
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }
}
