use crate::domain::repository::{RepositoryError, UserRepository};
use crate::domain::user::{NewUser, User};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite, query, query_as};

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Pool<Sqlite>,
}

impl SqliteUserRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let stored = query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, name)
            VALUES (?, ?, ?)
            RETURNING id, email, password, name
            "#,
        )
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        query_as::<_, User>("SELECT id, email, password, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("User not found".to_string()))
    }

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        query_as::<_, User>("SELECT id, email, password, name FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("User not found".to_string()))
    }

    async fn update_password(&self, id: i64, password: &str) -> Result<(), RepositoryError> {
        let result = query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
