use crate::domain::event::{Event, EventDetails};
use crate::domain::repository::{EventRepository, RepositoryError};
use async_trait::async_trait;
use sqlx::{MySql, Pool, query, query_as};

#[derive(Clone)]
pub struct MysqlEventRepository {
    pool: Pool<MySql>,
}

impl MysqlEventRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for MysqlEventRepository {
    async fn insert(
        &self,
        owner_id: i64,
        details: &EventDetails,
    ) -> Result<Event, RepositoryError> {
        let result = query(
            r#"
            INSERT INTO events (owner_id, name, description, date, location)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(owner_id)
        .bind(&details.name)
        .bind(&details.description)
        .bind(details.date)
        .bind(&details.location)
        .execute(&self.pool)
        .await?;

        Ok(Event {
            id: result.last_insert_id() as i64,
            owner_id,
            name: details.name.clone(),
            description: details.description.clone(),
            date: details.date,
            location: details.location.clone(),
        })
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
        // MySQL reports zero affected rows when nothing changed, so existence is checked first.
        self.get_by_id(event.id).await?;

        query(
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
