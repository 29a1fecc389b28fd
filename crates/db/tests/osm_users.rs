//! Integration tests for the `osm_users` repository.

use assert_matches::assert_matches;
use fair_db::models::osm_user::{CreateOsmUser, UpdateOsmUser};
use fair_db::repositories::OsmUserRepo;
use fair_db::{sqlstate, NOT_NULL_VIOLATION, UNIQUE_VIOLATION};
use sqlx::PgPool;
use validator::Validate;

fn new_user(username: &str, osm_id: i64) -> CreateOsmUser {
    CreateOsmUser {
        username: Some(username.to_string()),
        password: Some("test_password".to_string()),
        osm_id: Some(osm_id),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user(pool: PgPool) {
    let user = OsmUserRepo::create(&pool, &new_user("test_user", 12345))
        .await
        .unwrap();

    assert_eq!(user.username, "test_user");
    assert_eq!(user.osm_id, 12345);
    assert_eq!(user.password, "test_password");
    assert!(user.is_active);
    assert_eq!(user.to_string(), "test_user");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_oauth_user_gets_unusable_password(pool: PgPool) {
    let input = CreateOsmUser {
        password: None,
        ..new_user("oauth_user", 777)
    };
    let user = OsmUserRepo::create(&pool, &input).await.unwrap();
    assert_eq!(user.password, "!");
    assert_eq!(user.email, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_username_rejected(pool: PgPool) {
    let input = CreateOsmUser {
        username: None,
        ..new_user("unused", 12345)
    };
    assert!(input.validate().is_err());

    let err = OsmUserRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(sqlstate(&err).as_deref(), Some(NOT_NULL_VIOLATION));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_osm_id_rejected(pool: PgPool) {
    let input = CreateOsmUser {
        osm_id: None,
        ..new_user("test_user", 0)
    };
    assert!(input.validate().is_err());

    let err = OsmUserRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(sqlstate(&err).as_deref(), Some(NOT_NULL_VIOLATION));
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_rejected(pool: PgPool) {
    OsmUserRepo::create(&pool, &new_user("test_user", 12345))
        .await
        .unwrap();
    let err = OsmUserRepo::create(&pool, &new_user("test_user", 54321))
        .await
        .unwrap_err();
    assert_matches!(sqlstate(&err).as_deref(), Some(UNIQUE_VIOLATION));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_osm_id_rejected(pool: PgPool) {
    OsmUserRepo::create(&pool, &new_user("first", 12345))
        .await
        .unwrap();
    let err = OsmUserRepo::create(&pool, &new_user("second", 12345))
        .await
        .unwrap_err();
    assert_matches!(sqlstate(&err).as_deref(), Some(UNIQUE_VIOLATION));
}

// ---------------------------------------------------------------------------
// Lookup and update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_osm_id_and_username(pool: PgPool) {
    let created = OsmUserRepo::create(&pool, &new_user("mapper", 42))
        .await
        .unwrap();

    let by_osm = OsmUserRepo::find_by_osm_id(&pool, 42).await.unwrap().unwrap();
    assert_eq!(by_osm.id, created.id);

    let by_name = OsmUserRepo::find_by_username(&pool, "mapper")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_name.id, created.id);

    assert!(OsmUserRepo::find_by_osm_id(&pool, 43).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_username_changes_display(pool: PgPool) {
    let user = OsmUserRepo::create(&pool, &new_user("test_user", 12345))
        .await
        .unwrap();
    sqlx::query("SELECT pg_sleep(0.02)").execute(&pool).await.unwrap();

    let updated = OsmUserRepo::update(
        &pool,
        user.id,
        &UpdateOsmUser {
            username: Some("different_user".into()),
            osm_id: Some(54321),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.to_string(), "different_user");
    assert_eq!(updated.osm_id, 54321);
    assert!(updated.last_modified > user.last_modified);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_user_returns_none(pool: PgPool) {
    let result = OsmUserRepo::update(&pool, 999_999, &UpdateOsmUser::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_paginates(pool: PgPool) {
    for i in 0..3 {
        OsmUserRepo::create(&pool, &new_user(&format!("user{i}"), i))
            .await
            .unwrap();
    }

    let page = OsmUserRepo::list(&pool, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    let rest = OsmUserRepo::list(&pool, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].username, "user2");
}
