mod common;

use account_service::domain::user::models::User;
use account_service::domain::user::models::UserId;
use account_service::domain::user::ports::UserRepository;
use account_service::outbound::repositories::PostgresUserRepository;
use account_service::user::errors::UserError;
use chrono::SubsecRound;
use chrono::Utc;
use common::db::TestDb;

fn user(email: &str) -> User {
    // Postgres keeps microseconds
    let now = Utc::now().trunc_subsecs(6);
    User {
        id: UserId::new(),
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password_hash: "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        profile_image: String::new(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[tokio::test]
async fn test_create_and_find_by_email() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());

    let created = repo.create(user("a@b.com")).await.unwrap();
    assert_eq!(created.email, "a@b.com");
    assert!(created.deleted_at.is_none());

    let found = repo.find_by_email("a@b.com", false).await.unwrap();
    assert_eq!(found, Some(created));
    assert!(repo.find_by_email("x@b.com", false).await.unwrap().is_none());

    db.teardown().await;
}

#[tokio::test]
async fn test_create_duplicate_email() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    repo.create(user("a@b.com")).await.unwrap();

    let result = repo.create(user("a@b.com")).await;
    assert!(matches!(result, Err(UserError::AlreadyRegistered(email)) if email == "a@b.com"));

    db.teardown().await;
}

#[tokio::test]
async fn test_deactivate_hides_user_from_default_lookups() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    repo.create(user("a@b.com")).await.unwrap();
    repo.create(user("c@d.com")).await.unwrap();

    repo.deactivate("a@b.com").await.unwrap();

    assert!(repo.find_by_email("a@b.com", false).await.unwrap().is_none());
    let hidden = repo
        .find_by_email("a@b.com", true)
        .await
        .unwrap()
        .expect("Deactivated user should still be stored");
    assert!(hidden.is_deactivated());

    let active = repo.list_all(false).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email, "c@d.com");
    assert_eq!(repo.list_all(true).await.unwrap().len(), 2);

    db.teardown().await;
}

#[tokio::test]
async fn test_deactivate_twice_is_not_found() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    repo.create(user("a@b.com")).await.unwrap();
    repo.deactivate("a@b.com").await.unwrap();

    let result = repo.deactivate("a@b.com").await;
    assert!(matches!(result, Err(UserError::NotFound(_))));

    let result = repo.deactivate("nobody@b.com").await;
    assert!(matches!(result, Err(UserError::NotFound(_))));

    db.teardown().await;
}

#[tokio::test]
async fn test_deactivated_email_stays_reserved() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    repo.create(user("a@b.com")).await.unwrap();
    repo.deactivate("a@b.com").await.unwrap();

    let result = repo.create(user("a@b.com")).await;
    assert!(matches!(result, Err(UserError::AlreadyRegistered(_))));

    db.teardown().await;
}

#[tokio::test]
async fn test_delete_removes_deactivated_user() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    repo.create(user("a@b.com")).await.unwrap();
    repo.deactivate("a@b.com").await.unwrap();

    repo.delete("a@b.com").await.unwrap();

    assert!(repo.find_by_email("a@b.com", true).await.unwrap().is_none());
    assert!(matches!(
        repo.delete("a@b.com").await,
        Err(UserError::NotFound(_))
    ));

    // The email is free again
    repo.create(user("a@b.com")).await.unwrap();

    db.teardown().await;
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    let created = repo.create(user("a@b.com")).await.unwrap();

    let mut changed = created.clone();
    changed.first_name = String::new();
    changed.profile_image = "https://img.example.com/a.png".to_string();
    changed.updated_at = created.updated_at + chrono::Duration::seconds(5);

    let updated = repo.update(changed).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "");
    assert_eq!(updated.last_name, "Lovelace");
    assert_eq!(updated.profile_image, "https://img.example.com/a.png");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    db.teardown().await;
}

#[tokio::test]
async fn test_update_deactivated_user_is_not_found() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    let created = repo.create(user("a@b.com")).await.unwrap();
    repo.deactivate("a@b.com").await.unwrap();

    let mut changed = created.clone();
    changed.first_name = "Grace".to_string();

    let result = repo.update(changed).await;
    assert!(matches!(result, Err(UserError::NotFound(_))));

    db.teardown().await;
}

#[tokio::test]
async fn test_update_to_taken_email() {
    let Some(db) = TestDb::from_env().await else {
        return;
    };
    let repo = PostgresUserRepository::new(db.pool.clone());
    repo.create(user("a@b.com")).await.unwrap();
    let mut other = repo.create(user("c@d.com")).await.unwrap();

    other.email = "a@b.com".to_string();
    let result = repo.update(other).await;
    assert!(matches!(result, Err(UserError::AlreadyRegistered(_))));

    db.teardown().await;
}
