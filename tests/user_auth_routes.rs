use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use jsonwebtoken::{DecodingKey, Validation};
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

async fn spawn_app(tag: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "quill-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let pool = quill::db::connect(&database_url)
        .await
        .expect("failed to open test database");

    let cfg = quill::config::Config::default();
    let state = quill::router::QuillState::new(pool, Arc::from(cfg.jwt_secret.as_str()));
    (quill::router::quill_router(state), temp_path)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .expect("failed to build request")
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

#[tokio::test]
async fn duplicate_username_returns_conflict_with_single_row() {
    let (app, db) = spawn_app("dup-user").await;

    let (status, body) = send(
        &app,
        json_request("POST", "/newuser", r#"{"username":"alice","password":"pw"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Successfully created a new user: alice");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/newuser",
            r#"{"username":"alice","password":"other"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, b"User already exists!");

    let (status, body) = send(
        &app,
        Request::builder()
            .method("GET")
            .uri("/users")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let users: Value = serde_json::from_slice(&body).unwrap();
    let users = users.as_array().expect("users body was not an array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "alice");
    // the listing still carries the cleartext password field
    assert_eq!(users[0]["password"], "pw");

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn login_token_decodes_to_the_user_id() {
    let (app, db) = spawn_app("login-ok").await;

    send(
        &app,
        json_request("POST", "/newuser", r#"{"username":"bob","password":"s3cret"}"#),
    )
    .await;

    let (status, body) = send(
        &app,
        json_request("POST", "/login", r#"{"username":"bob","password":"s3cret"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["message"], "Successfully logged in!");
    let token = v["access_token"].as_str().expect("missing access_token");

    let (_, body) = send(
        &app,
        Request::builder()
            .method("GET")
            .uri("/users")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let users: Value = serde_json::from_slice(&body).unwrap();
    let expected_id = users[0]["id"].as_i64().expect("user id missing");

    let secret = quill::config::Config::default().jwt_secret;
    let data = jsonwebtoken::decode::<quill::auth::Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .expect("token failed to decode");
    assert_eq!(data.claims.sub, expected_id);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn login_failure_is_generic_for_both_causes() {
    let (app, db) = spawn_app("login-fail").await;

    send(
        &app,
        json_request("POST", "/newuser", r#"{"username":"carol","password":"right"}"#),
    )
    .await;

    let (status, wrong_pw_body) = send(
        &app,
        json_request("POST", "/login", r#"{"username":"carol","password":"wrong"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, unknown_user_body) = send(
        &app,
        json_request("POST", "/login", r#"{"username":"nobody","password":"wrong"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // identical bodies: the response never reveals whether the username exists
    assert_eq!(wrong_pw_body, unknown_user_body);
    let v: Value = serde_json::from_slice(&wrong_pw_body).unwrap();
    assert_eq!(v["message"], "Username or Password is incorrect.");

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn stale_token_for_deleted_user_is_rejected() {
    let (app, db) = spawn_app("stale-token").await;

    // a token signed for a user id that was never created
    let secret = quill::config::Config::default().jwt_secret;
    let ghost = quill::db::models::User {
        id: 424242,
        username: "ghost".to_string(),
        password: "pw".to_string(),
    };
    let token = quill::auth::issue_token(&secret, &ghost).expect("failed to sign token");

    let (status, _) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/create")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(r#"{"title":"A","content":"B"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let _ = fs::remove_file(&db);
}
