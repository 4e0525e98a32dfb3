use crate::domain::repository::{
    AttendeeRepository, EventRepository, RepositoryError, UserRepository,
};
use crate::infrastructure::database::DatabasePool;
use crate::infrastructure::mysql_attendee_repository::MysqlAttendeeRepository;
use crate::infrastructure::mysql_event_repository::MysqlEventRepository;
use crate::infrastructure::mysql_user_repository::MysqlUserRepository;
use crate::infrastructure::sqlite_attendee_repository::SqliteAttendeeRepository;
use crate::infrastructure::sqlite_event_repository::SqliteEventRepository;
use crate::infrastructure::sqlite_user_repository::SqliteUserRepository;
use sqlx::Error as SqlxError;
use std::sync::Arc;

pub fn create_user_repository(pool: DatabasePool) -> Arc<dyn UserRepository> {
    match pool {
        DatabasePool::MySql(pool) => Arc::new(MysqlUserRepository::new(pool)),
        DatabasePool::Sqlite(pool) => Arc::new(SqliteUserRepository::new(pool)),
    }
}

pub fn create_event_repository(pool: DatabasePool) -> Arc<dyn EventRepository> {
    match pool {
        DatabasePool::MySql(pool) => Arc::new(MysqlEventRepository::new(pool)),
        DatabasePool::Sqlite(pool) => Arc::new(SqliteEventRepository::new(pool)),
    }
}

pub fn create_attendee_repository(pool: DatabasePool) -> Arc<dyn AttendeeRepository> {
    match pool {
        DatabasePool::MySql(pool) => Arc::new(MysqlAttendeeRepository::new(pool)),
        DatabasePool::Sqlite(pool) => Arc::new(SqliteAttendeeRepository::new(pool)),
    }
}

impl From<SqlxError> for RepositoryError {
    fn from(error: SqlxError) -> Self {
        match error {
            SqlxError::RowNotFound => RepositoryError::NotFound("Entity not found".to_string()),
            SqlxError::Database(ref e) if e.is_unique_violation() => {
                RepositoryError::Conflict(e.message().to_string())
            }
            _ => RepositoryError::Database(error),
        }
    }
}
