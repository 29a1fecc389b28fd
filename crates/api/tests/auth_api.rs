//! Integration tests for the OSM login URL endpoint.

mod common;

use std::collections::HashMap;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;
use url::Url;

const LOGIN_PATH: &str = "/api/v1/auth/login/";

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_url_returns_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, LOGIN_PATH).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type {content_type}"
    );

    let json = body_json(response).await;
    assert!(json.get("login_url").is_some(), "body was {json}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_url_points_at_configured_osm_client(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, LOGIN_PATH).await).await;

    let url = Url::parse(json["login_url"].as_str().unwrap()).unwrap();
    assert_eq!(url.host_str(), Some("www.openstreetmap.org"));
    assert_eq!(url.path(), "/oauth2/authorize");

    let params: HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "test-client");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["scope"], "read_prefs");
    assert!(!params["state"].is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_url_state_differs_per_request(pool: PgPool) {
    let first = body_json(get(common::build_test_app(pool.clone()), LOGIN_PATH).await).await;
    let second = body_json(get(common::build_test_app(pool), LOGIN_PATH).await).await;

    assert_ne!(first["login_url"], second["login_url"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_without_trailing_slash_is_not_routed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/login").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
