use crate::domain::repository::{RepositoryError, UserRepository};
use crate::domain::user::{NewUser, User};
use async_trait::async_trait;
use sqlx::{MySql, Pool, query, query_as};

#[derive(Clone)]
pub struct MysqlUserRepository {
    pool: Pool<MySql>,
}

impl MysqlUserRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let result = query("INSERT INTO users (email, password, name) VALUES (?, ?, ?)")
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.name)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_id() as i64,
            email: user.email.clone(),
            password: user.password.clone(),
            name: user.name.clone(),
        })
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
        query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
