use crate::application::configuration::database::DatabaseConfiguration;
use crate::infrastructure::utils::retry_with_backoff;
use sqlx::migrate::{MigrateDatabase, MigrateError};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Error, MySql, Pool, Sqlite};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DatabaseEngine {
    #[default]
    Sqlite,
    Mysql,
}

impl DatabaseEngine {
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.to_lowercase();

        if url.starts_with("sqlite:") {
            Some(DatabaseEngine::Sqlite)
        } else if url.starts_with("mysql:") {
            Some(DatabaseEngine::Mysql)
        } else {
            None
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseEngine::Sqlite => write!(f, "sqlite"),
            DatabaseEngine::Mysql => write!(f, "mysql"),
        }
    }
}

impl TryFrom<String> for DatabaseEngine {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "sqlite" => Ok(DatabaseEngine::Sqlite),
            "mysql" => Ok(DatabaseEngine::Mysql),
            _ => Err(format!("Unsupported database engine: {}", value)),
        }
    }
}

#[derive(Clone)]
pub enum DatabasePool {
    MySql(Pool<MySql>),
    Sqlite(Pool<Sqlite>),
}

impl DatabasePool {
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        match self {
            DatabasePool::MySql(pool) => sqlx::migrate!("./migrations/mysql").run(pool).await,
            DatabasePool::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await,
        }
    }

    pub async fn close(&self) {
        match self {
            DatabasePool::MySql(pool) => pool.close().await,
            DatabasePool::Sqlite(pool) => pool.close().await,
        }
    }
}

/// Creates the database when it is missing, then connects with retries.
pub async fn create_pool(config: &DatabaseConfiguration) -> Result<DatabasePool, Error> {
    let url = config.database_url();
    let max_connections = config.database_max_connections();
    let timeout = Duration::from_millis(config.database_timeout_ms());

    match config.database_engine() {
        DatabaseEngine::Sqlite => {
            if !Sqlite::database_exists(url).await? {
                tracing::info!("Creating sqlite database");
                Sqlite::create_database(url).await?;
            }

            let pool = retry_with_backoff(
                || {
                    SqlitePoolOptions::new()
                        .max_connections(max_connections)
                        .acquire_timeout(timeout)
                        .connect(url)
                },
                "sqlite",
                3,
                Duration::from_millis(200),
                true,
            )
            .await?;

            Ok(DatabasePool::Sqlite(pool))
        }
        DatabaseEngine::Mysql => {
            let exists = retry_with_backoff(
                || MySql::database_exists(url),
                "mysql",
                5,
                Duration::from_millis(500),
                true,
            )
            .await?;

            if !exists {
                tracing::info!("Creating mysql database");
                MySql::create_database(url).await?;
            }

            let pool = MySqlPoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(timeout)
                .connect(url)
                .await?;

            Ok(DatabasePool::MySql(pool))
        }
    }
}
