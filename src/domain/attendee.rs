use sqlx::FromRow;

#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct Attendee {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
}
