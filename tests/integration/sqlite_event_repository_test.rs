use chrono::NaiveDate;
use event_service::domain::event::EventDetails;
use event_service::domain::repository::{EventRepository, RepositoryError, UserRepository};
use event_service::domain::user::NewUser;
use event_service::infrastructure::sqlite_event_repository::SqliteEventRepository;
use event_service::infrastructure::sqlite_user_repository::SqliteUserRepository;
use sqlx::{Pool, Sqlite};

fn details(name: &str) -> EventDetails {
    EventDetails {
        name: name.to_string(),
        description: "A feast at Winterfell".to_string(),
        date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        location: "Winterfell".to_string(),
    }
}

async fn owner(pool: &Pool<Sqlite>) -> i64 {
    SqliteUserRepository::new(pool.clone())
        .insert(&NewUser::new("jon@snow.test", "hash".to_string(), "Jon"))
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_can_add_event(pool: Pool<Sqlite>) {
    let owner_id = owner(&pool).await;
    let repository = SqliteEventRepository::new(pool);

    let event = repository.insert(owner_id, &details("Feast")).await.unwrap();
    let row = repository.get_by_id(event.id).await.unwrap();

    assert_eq!(row, event);
    assert_eq!(row.owner_id, owner_id);
    assert_eq!(row.date, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_lists_all_events(pool: Pool<Sqlite>) {
    let owner_id = owner(&pool).await;
    let repository = SqliteEventRepository::new(pool);
    repository.insert(owner_id, &details("Feast")).await.unwrap();
    repository.insert(owner_id, &details("Wedding")).await.unwrap();

    let events = repository.get_all().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "Feast");
    assert_eq!(events[1].name, "Wedding");
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_updates_event(pool: Pool<Sqlite>) {
    let owner_id = owner(&pool).await;
    let repository = SqliteEventRepository::new(pool);
    let event = repository.insert(owner_id, &details("Feast")).await.unwrap();

    let updated = event.with_details(details("Wedding"));
    repository.update(&updated).await.unwrap();
    let row = repository.get_by_id(updated.id).await.unwrap();

    assert_eq!(row.name, "Wedding");
    assert_eq!(row.owner_id, owner_id);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_deletes_event(pool: Pool<Sqlite>) {
    let owner_id = owner(&pool).await;
    let repository = SqliteEventRepository::new(pool);
    let event = repository.insert(owner_id, &details("Feast")).await.unwrap();

    repository.delete(event.id).await.unwrap();

    assert!(matches!(
        repository.get_by_id(event.id).await,
        Err(RepositoryError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn it_returns_not_found_for_missing_event(pool: Pool<Sqlite>) {
    let owner_id = owner(&pool).await;
    let repository = SqliteEventRepository::new(pool);
    let event = repository.insert(owner_id, &details("Feast")).await.unwrap();
    let mut missing = event.clone();
    missing.id = event.id + 100;

    assert!(matches!(
        repository.delete(missing.id).await,
        Err(RepositoryError::NotFound(_))
    ));
    assert!(matches!(
        repository.update(&missing).await,
        Err(RepositoryError::NotFound(_))
    ));
}
