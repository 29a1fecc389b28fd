//! Tests for `AppError` -> HTTP response mapping.
//!
//! Domain errors are built directly; database errors come from real
//! constraint violations so the SQLSTATE classification is exercised.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use fair_api::error::AppError;
use fair_core::error::CoreError;
use fair_db::models::dataset::CreateDataset;
use fair_db::models::osm_user::CreateOsmUser;
use fair_db::repositories::{DatasetRepo, OsmUserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use validator::Validate;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn new_user(username: &str, osm_id: i64) -> CreateOsmUser {
    CreateOsmUser {
        username: Some(username.to_string()),
        osm_id: Some(osm_id),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Dataset",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Dataset with id 42 not found");
}

#[tokio::test]
async fn validation_errors_return_400_naming_fields() {
    let input = CreateOsmUser::default();
    let err: AppError = input.validate().unwrap_err().into();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("osm_id"), "{message}");
    assert!(message.contains("username"), "{message}");
}

// ---------------------------------------------------------------------------
// Database errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unclassified_database_error_returns_500_and_sanitizes_message() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    OsmUserRepo::create(&pool, &new_user("test_user", 12345))
        .await
        .unwrap();
    let err = OsmUserRepo::create(&pool, &new_user("test_user", 54321))
        .await
        .unwrap_err();

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("uq_osm_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_column_returns_400_naming_it(pool: PgPool) {
    let input = CreateOsmUser {
        username: None,
        ..new_user("unused", 1)
    };
    let err = OsmUserRepo::create(&pool, &input).await.unwrap_err();

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required field: username");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_reference_returns_400(pool: PgPool) {
    let input = CreateDataset {
        name: "Orphan".into(),
        created_by: Some(999_999),
        source_imagery: None,
        status: None,
    };
    let err = DatasetRepo::create(&pool, &input).await.unwrap_err();

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Referenced row does not exist"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn check_violation_returns_400(pool: PgPool) {
    let user = OsmUserRepo::create(&pool, &new_user("test_user", 12345))
        .await
        .unwrap();
    let err = sqlx::query("INSERT INTO datasets (name, created_by, status) VALUES ('x', $1, 5)")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap_err();

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("datasets_status_check"));
}
