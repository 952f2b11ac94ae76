//! User directory tests against an in-memory store.

mod support;

use support::{directory, InMemoryStore};

use common::AppError;
use domain::{Argon2Hasher, CreateUser, Password, PasswordHasher, UpdateUser, MIN_PASSWORD_HASH_COST};
use sea_orm::DbErr;
use user_service_lib::service::UserDirectory;

fn jdoe() -> CreateUser {
    CreateUser {
        id: "jdoe".to_string(),
        name: "John Doe".to_string(),
        password: "SecurePass123!".to_string(),
    }
}

#[tokio::test]
async fn test_created_user_has_no_memories() {
    let store = InMemoryStore::new();
    let users = directory(&store);

    users.create_user(jdoe()).await.unwrap();
    let found = users.find_user("jdoe").await.unwrap().unwrap();

    assert_eq!(found.id, "jdoe");
    assert_eq!(found.name, "John Doe");
    assert!(found.memories.is_empty());
}

#[tokio::test]
async fn test_created_password_verifies_against_stored_hash() {
    let store = InMemoryStore::new();
    let users = directory(&store);

    users.create_user(jdoe()).await.unwrap();
    let stored = store.password_hash_of("jdoe").unwrap();

    assert_ne!(stored, "SecurePass123!");
    let hasher = Argon2Hasher::new(MIN_PASSWORD_HASH_COST).unwrap();
    assert!(hasher.verify("SecurePass123!", &Password::from_hash(stored.clone())));
    assert!(!hasher.verify("wrong-password", &Password::from_hash(stored)));
}

#[tokio::test]
async fn test_find_unknown_user_is_none() {
    let store = InMemoryStore::new();
    let users = directory(&store);

    assert!(users.find_user("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_user_includes_memories() {
    let store = InMemoryStore::new();
    let users = directory(&store);
    users.create_user(jdoe()).await.unwrap();
    store.add_memory("jdoe", "Lisbon");
    store.add_memory("someone-else", "Porto");

    let found = users.find_user("jdoe").await.unwrap().unwrap();

    assert_eq!(found.memories.len(), 1);
    assert_eq!(found.memories[0].title, "Lisbon");
}

#[tokio::test]
async fn test_duplicate_id_is_rejected_by_storage() {
    let store = InMemoryStore::new();
    let users = directory(&store);
    users.create_user(jdoe()).await.unwrap();

    let result = users.create_user(jdoe()).await;

    assert!(matches!(result, Err(AppError::Database(DbErr::Custom(_)))));
    assert_eq!(users.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_on_empty_store_is_empty() {
    let store = InMemoryStore::new();

    assert!(directory(&store).list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_returns_every_user() {
    let store = InMemoryStore::new();
    let users = directory(&store);
    users.create_user(jdoe()).await.unwrap();
    users
        .create_user(CreateUser {
            id: "asmith".to_string(),
            name: "Alice Smith".to_string(),
            password: "AnotherPass1!".to_string(),
        })
        .await
        .unwrap();

    let ids: Vec<String> = users
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();

    assert_eq!(ids, vec!["jdoe", "asmith"]);
}

#[tokio::test]
async fn test_update_name_keeps_password_hash() {
    let store = InMemoryStore::new();
    let users = directory(&store);
    users.create_user(jdoe()).await.unwrap();
    let hash_before = store.password_hash_of("jdoe").unwrap();

    let updated = users
        .update_user(
            "jdoe",
            UpdateUser {
                name: Some("Johnny".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Johnny");
    assert_eq!(store.password_hash_of("jdoe").unwrap(), hash_before);
    assert_eq!(users.find_user("jdoe").await.unwrap().unwrap().name, "Johnny");
}

#[tokio::test]
async fn test_update_unknown_user_fails() {
    let store = InMemoryStore::new();
    let users = directory(&store);

    let result = users.update_user("ghost", UpdateUser::default()).await;

    assert!(matches!(result, Err(AppError::Database(DbErr::RecordNotUpdated))));
}

#[tokio::test]
async fn test_delete_then_find_is_none() {
    let store = InMemoryStore::new();
    let users = directory(&store);
    users.create_user(jdoe()).await.unwrap();

    let removed = users.delete_user("jdoe").await.unwrap();

    assert_eq!(removed.id, "jdoe");
    assert_eq!(removed.name, "John Doe");
    assert!(users.find_user("jdoe").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_unknown_user_fails() {
    let store = InMemoryStore::new();
    let users = directory(&store);

    let result = users.delete_user("ghost").await;

    assert!(matches!(result, Err(AppError::Database(DbErr::RecordNotFound(_)))));
}

#[tokio::test]
async fn test_list_user_memories() {
    let store = InMemoryStore::new();
    let users = directory(&store);
    store.add_memory("jdoe", "Lisbon");
    store.add_memory("jdoe", "Madrid");

    let titles: Vec<String> = users
        .list_user_memories("jdoe")
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();

    assert_eq!(titles, vec!["Lisbon", "Madrid"]);
    assert!(users.list_user_memories("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_points_are_projected_with_memory_title() {
    let store = InMemoryStore::new();
    let users = directory(&store);
    let trip = store.add_memory("jdoe", "Trip");
    store.add_point("jdoe", trip, 1.5, -2.25);

    let points = users.list_user_points("jdoe").await.unwrap();
    let json = serde_json::to_value(&points).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{ "x": 1.5, "y": -2.25, "memory": { "title": "Trip" } }])
    );
    assert!(json[0].get("user_id").is_none());
    assert!(json[0].get("memory_id").is_none());
}

#[tokio::test]
async fn test_points_empty_for_user_without_points() {
    let store = InMemoryStore::new();
    let users = directory(&store);

    assert!(users.list_user_points("loner").await.unwrap().is_empty());
}
