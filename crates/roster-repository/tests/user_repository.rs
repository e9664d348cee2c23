//! End-to-end repository tests over the in-memory store.

use roster_core::{CreateUser, PageRequest, PasswordHasher, Role, RosterError, UpdateUser, UserId};
use roster_repository::{MemoryUserStore, UserDao, UserQuery, UserRepository};
use std::sync::Arc;

fn repository() -> UserRepository {
    let store = Arc::new(MemoryUserStore::new());
    let dao = UserDao::new(store, PasswordHasher::with_cost(1));
    UserRepository::new(dao)
}

fn create_input(email: &str, roles: &[&str]) -> CreateUser {
    CreateUser {
        first_name: Some("Jane".to_string()),
        last_name: Some("Roe".to_string()),
        email: Some(email.to_string()),
        password: Some("secret phrase".to_string()),
        date_of_birth: Some("1990-04-02".to_string()),
        gender: Some("female".to_string()),
        roles: Some(roles.iter().map(|r| r.to_string()).collect()),
    }
}

#[tokio::test]
async fn full_crud_round_trip() {
    let repo = repository();

    let created = repo
        .create(create_input("jane@example.com", &["user", "premium"]))
        .await
        .unwrap();
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.roles, Some(vec![Role::User, Role::Premium]));

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);

    let by_email = repo.get_by_email("jane@example.com").await.unwrap();
    assert_eq!(by_email.id, created.id);

    let update = UpdateUser {
        first_name: Some("Janet".to_string()),
        ..UpdateUser::default()
    };
    let updated = repo
        .update(&UserQuery::by_id(created.id), update)
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Janet");

    let removed = repo.delete(&UserQuery::by_id(created.id)).await.unwrap();
    assert!(removed.deleted);

    // The soft-deleted user is gone from every read path.
    let err = repo.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, RosterError::NotFound(_)));
}

#[tokio::test]
async fn get_by_id_on_unknown_user_carries_the_id_in_the_message() {
    let repo = repository();
    let id = UserId::new();

    let err = repo.get_by_id(id).await.unwrap_err();
    assert!(matches!(err, RosterError::NotFound(_)));
    assert!(err.to_string().contains(&id.to_string()));
}

#[tokio::test]
async fn get_by_email_on_unknown_user_carries_the_email_in_the_message() {
    let repo = repository();

    let err = repo.get_by_email("ghost@example.com").await.unwrap_err();
    assert!(matches!(err, RosterError::NotFound(_)));
    assert!(err.to_string().contains("ghost@example.com"));
}

#[tokio::test]
async fn get_roles_returns_the_filtered_role_set() {
    let repo = repository();
    let created = repo
        .create(create_input("jane@example.com", &["premium", "superuser"]))
        .await
        .unwrap();

    // The invalid role was silently dropped at creation time.
    let roles = repo.get_roles(created.id).await.unwrap();
    assert_eq!(roles, vec![Role::Premium]);
}

#[tokio::test]
async fn get_roles_on_missing_user_fails() {
    let repo = repository();
    let err = repo.get_roles(UserId::new()).await.unwrap_err();
    assert!(matches!(err, RosterError::NotFound(_)));
}

#[tokio::test]
async fn get_all_pages_through_the_roster() {
    let repo = repository();
    for i in 0..3 {
        repo.create(create_input(&format!("user{i}@example.com"), &["user"]))
            .await
            .unwrap();
    }

    let page = repo.get_all(PageRequest::new(0, 2)).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.total_count, 3);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn get_all_on_empty_roster_is_not_found() {
    let repo = repository();
    let err = repo.get_all(PageRequest::first()).await.unwrap_err();
    assert!(matches!(err, RosterError::NotFound(_)));
}

#[tokio::test]
async fn update_on_missing_user_is_not_updated() {
    let repo = repository();
    let update = UpdateUser {
        first_name: Some("Janet".to_string()),
        ..UpdateUser::default()
    };
    let err = repo
        .update(&UserQuery::by_id(UserId::new()), update)
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::NotUpdated));
}

#[tokio::test]
async fn delete_on_missing_user_is_not_deleted() {
    let repo = repository();
    let err = repo
        .delete(&UserQuery::by_id(UserId::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::NotDeleted));
}

#[tokio::test]
async fn update_with_no_fields_surfaces_the_transform_failure() {
    let repo = repository();
    let created = repo
        .create(create_input("jane@example.com", &["user"]))
        .await
        .unwrap();

    let err = repo
        .update(&UserQuery::by_id(created.id), UpdateUser::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::NoFieldsProvided));
}
