pub mod database;
pub mod mysql_attendee_repository;
pub mod mysql_event_repository;
pub mod mysql_user_repository;
pub mod repository;
pub mod sqlite_attendee_repository;
pub mod sqlite_event_repository;
pub mod sqlite_user_repository;
pub mod utils;
