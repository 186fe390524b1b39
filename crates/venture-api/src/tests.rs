//! Router tests: requests go through [`crate::app`] against an in-memory
//! `SqliteStore`.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use venture_store_sqlite::SqliteStore;

use crate::{
  ApiConfig, AppState, app,
  guard::TOKEN_HEADER,
  token::{DEFAULT_TTL_SECS, TokenService},
};

const SECRET: &str = "test-secret";

async fn make_state() -> AppState<SqliteStore> {
  AppState {
    store:  Arc::new(SqliteStore::open_in_memory().await.unwrap()),
    tokens: Arc::new(TokenService::new(SECRET, DEFAULT_TTL_SECS)),
    config: Arc::new(ApiConfig::new(4).unwrap()),
  }
}

async fn send(
  state: &AppState<SqliteStore>,
  method: &str,
  uri: &str,
  token: Option<&str>,
  body: Option<Value>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  if let Some(token) = token {
    builder = builder.header(TOKEN_HEADER, token);
  }
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  app(state.clone()).oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn register(state: &AppState<SqliteStore>, first: &str, email: &str) -> String {
  let resp = send(
    state,
    "POST",
    "/api/users",
    None,
    Some(json!({
      "first_name": first,
      "last_name": "Lovelace",
      "email": email,
      "password": "password123",
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  json_body(resp).await["token"].as_str().unwrap().to_owned()
}

async fn create_profile(state: &AppState<SqliteStore>, token: &str) -> Value {
  let resp = send(
    state,
    "POST",
    "/api/profile",
    Some(token),
    Some(json!({ "status": "Founder", "skills": "rust, sales" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  json_body(resp).await
}

async fn create_post(state: &AppState<SqliteStore>, token: &str, text: &str) -> Value {
  let resp = send(state, "POST", "/api/posts", Some(token), Some(json!({ "text": text }))).await;
  assert_eq!(resp.status(), StatusCode::OK);
  json_body(resp).await
}

// ── Liveness ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn root_reports_running() {
  let state = make_state().await;
  let resp = send(&state, "GET", "/", None, None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  assert_eq!(&bytes[..], b"API Running");
}

// ── Registration & session ──────────────────────────────────────────────────

#[tokio::test]
async fn register_login_and_fetch_current_user() {
  let state = make_state().await;
  let token = register(&state, " Ada ", "ada@example.com").await;

  let resp = send(&state, "GET", "/api/auth", Some(&token), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let me = json_body(resp).await;
  assert_eq!(me["first_name"], "Ada");
  assert_eq!(me["email"], "ada@example.com");
  assert!(me["avatar"].as_str().unwrap().starts_with("https://www.gravatar.com/avatar/"));
  assert!(me.get("password_hash").is_none());
  assert!(me.get("password").is_none());

  let resp = send(
    &state,
    "POST",
    "/api/auth",
    None,
    Some(json!({ "email": "ada@example.com", "password": "password123" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let login_token = json_body(resp).await["token"].as_str().unwrap().to_owned();

  let resp = send(&state, "GET", "/api/auth", Some(&login_token), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn bearer_header_is_accepted() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;

  let req = Request::builder()
    .uri("/api/auth")
    .header(header::AUTHORIZATION, format!("Bearer {token}"))
    .body(Body::empty())
    .unwrap();
  let resp = app(state.clone()).oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
  let state = make_state().await;
  register(&state, "Ada", "ada@example.com").await;

  let resp = send(
    &state,
    "POST",
    "/api/users",
    None,
    Some(json!({
      "first_name": "Other",
      "last_name": "Person",
      "email": "ADA@example.com",
      "password": "password123",
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "errors": [{ "msg": "User already exists" }] }));
}

#[tokio::test]
async fn registration_reports_every_invalid_field() {
  let state = make_state().await;
  let resp = send(
    &state,
    "POST",
    "/api/users",
    None,
    Some(json!({ "first_name": "", "email": "nope", "password": "short" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body = json_body(resp).await;
  let fields: Vec<_> = body["errors"]
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["field"].as_str().unwrap().to_owned())
    .collect();
  assert_eq!(fields, ["first_name", "last_name", "email", "password"]);
  assert_eq!(body["errors"][3]["msg"], "Please enter a password with 8 or more characters");
}

#[tokio::test]
async fn bad_password_and_unknown_email_look_the_same() {
  let state = make_state().await;
  register(&state, "Ada", "ada@example.com").await;

  let wrong_password = send(
    &state,
    "POST",
    "/api/auth",
    None,
    Some(json!({ "email": "ada@example.com", "password": "not-the-password" })),
  )
  .await;
  let unknown_email = send(
    &state,
    "POST",
    "/api/auth",
    None,
    Some(json!({ "email": "nobody@example.com", "password": "password123" })),
  )
  .await;

  assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
  assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
  let a = json_body(wrong_password).await;
  let b = json_body(unknown_email).await;
  assert_eq!(a, json!({ "errors": [{ "msg": "Invalid credentials" }] }));
  assert_eq!(a, b);
}

#[tokio::test]
async fn unknown_email_still_checks_a_password_hash() {
  let mut state = make_state().await;
  // A fallback bcrypt cannot parse surfaces as a 500, which shows the
  // unknown-email path reaches the verifier instead of returning early.
  state.config = Arc::new(ApiConfig {
    bcrypt_cost:   4,
    fallback_hash: "not-a-bcrypt-hash".into(),
  });

  let resp = send(
    &state,
    "POST",
    "/api/auth",
    None,
    Some(json!({ "email": "nobody@example.com", "password": "password123" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn non_object_body_is_a_bad_request() {
  let state = make_state().await;
  let resp = send(&state, "POST", "/api/auth", None, Some(json!(["a", "b"]))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Guard ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_token_is_denied() {
  let state = make_state().await;
  let resp = send(&state, "GET", "/api/auth", None, None).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(json_body(resp).await, json!({ "msg": "No token, authorization denied" }));
}

#[tokio::test]
async fn foreign_token_is_denied() {
  let state = make_state().await;
  let other = TokenService::new("another-secret", DEFAULT_TTL_SECS);
  let token = other.issue(uuid::Uuid::new_v4()).unwrap();

  let resp = send(&state, "GET", "/api/posts", Some(&token), None).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(json_body(resp).await, json!({ "msg": "Token is not valid" }));
}

#[tokio::test]
async fn current_user_of_deleted_account_is_not_found() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;

  let resp = send(&state, "DELETE", "/api/profile", Some(&token), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(json_body(resp).await, json!({ "msg": "User deleted" }));

  let resp = send(&state, "GET", "/api/auth", Some(&token), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Profiles ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn deleted_account_cannot_recreate_a_profile() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  send(&state, "DELETE", "/api/profile", Some(&token), None).await;

  let resp = send(
    &state,
    "POST",
    "/api/profile",
    Some(&token),
    Some(json!({ "status": "Founder", "skills": "rust" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(resp).await, json!({ "msg": "User not found" }));
}

#[tokio::test]
async fn me_without_profile_is_not_found() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  let resp = send(&state, "GET", "/api/profile/me", Some(&token), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(resp).await, json!({ "msg": "There is no profile for this user" }));
}

#[tokio::test]
async fn profile_requires_status_and_skills() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  let resp = send(&state, "POST", "/api/profile", Some(&token), Some(json!({}))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    json_body(resp).await,
    json!({ "errors": [
      { "field": "status", "msg": "Status is required" },
      { "field": "skills", "msg": "Skills is required" },
    ]}),
  );
}

#[tokio::test]
async fn profile_upsert_twice_keeps_one_document() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;

  let first = create_profile(&state, &token).await;
  assert_eq!(first["skills"], json!(["rust", "sales"]));

  let resp = send(
    &state,
    "POST",
    "/api/profile",
    Some(&token),
    Some(json!({
      "status": "CTO",
      "skills": ["go"],
      "company": "Acme",
      "twitter": "https://twitter.com/ada",
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let second = json_body(resp).await;
  assert_eq!(second["id"], first["id"]);
  assert_eq!(second["status"], "CTO");
  assert_eq!(second["skills"], json!(["go"]));
  assert_eq!(second["company"], "Acme");
  assert_eq!(second["social"]["twitter"], "https://twitter.com/ada");

  let resp = send(&state, "GET", "/api/profile", None, None).await;
  let all = json_body(resp).await;
  assert_eq!(all.as_array().unwrap().len(), 1);
  assert_eq!(all[0]["status"], "CTO");
  assert_eq!(all[0]["user"]["first_name"], "Ada");
}

#[tokio::test]
async fn profile_by_user_id() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  let profile = create_profile(&state, &token).await;
  let user_id = profile["user_id"].as_str().unwrap();

  let resp = send(&state, "GET", &format!("/api/profile/user/{user_id}"), None, None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let view = json_body(resp).await;
  assert_eq!(view["user"]["id"], user_id);
  assert_eq!(view["status"], "Founder");

  for missing in [uuid::Uuid::new_v4().to_string(), "not-an-id".to_owned()] {
    let resp = send(&state, "GET", &format!("/api/profile/user/{missing}"), None, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "msg": "Profile not found" }));
  }
}

#[tokio::test]
async fn deleting_account_removes_profile() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  create_profile(&state, &token).await;

  send(&state, "DELETE", "/api/profile", Some(&token), None).await;

  let resp = send(&state, "GET", "/api/profile", None, None).await;
  assert_eq!(json_body(resp).await, json!([]));
}

#[tokio::test]
async fn experience_is_added_newest_first_and_removed_by_id() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  create_profile(&state, &token).await;

  for title in ["Engineer", "Founder"] {
    let resp = send(
      &state,
      "PUT",
      "/api/profile/experience",
      Some(&token),
      Some(json!({
        "title": title,
        "company": "Acme",
        "from": "2019-01-01",
        "to": "2020-06-30",
      })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  let resp = send(&state, "GET", "/api/profile/me", Some(&token), None).await;
  let profile = json_body(resp).await;
  let experience = profile["experience"].as_array().unwrap();
  assert_eq!(experience.len(), 2);
  assert_eq!(experience[0]["title"], "Founder");
  assert_eq!(experience[1]["title"], "Engineer");
  assert_eq!(experience[0]["current"], false);

  let founder_id = experience[0]["id"].as_str().unwrap();
  let resp = send(
    &state,
    "DELETE",
    &format!("/api/profile/experience/{founder_id}"),
    Some(&token),
    None,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let profile = json_body(resp).await;
  let experience = profile["experience"].as_array().unwrap();
  assert_eq!(experience.len(), 1);
  assert_eq!(experience[0]["title"], "Engineer");

  // Unknown ids leave the list alone.
  let resp = send(&state, "DELETE", "/api/profile/experience/nope", Some(&token), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(json_body(resp).await["experience"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn experience_rejects_bad_dates() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  create_profile(&state, &token).await;

  let resp = send(
    &state,
    "PUT",
    "/api/profile/experience",
    Some(&token),
    Some(json!({ "title": "Engineer", "company": "Acme", "from": "last spring", "to": "2020-06-30" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "errors": [{ "field": "from", "msg": "Invalid date" }] }));
}

#[tokio::test]
async fn experience_without_profile_is_not_found() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  let resp = send(
    &state,
    "PUT",
    "/api/profile/experience",
    Some(&token),
    Some(json!({ "title": "Engineer", "company": "Acme", "from": "2019-01-01", "to": "2020-01-01" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn education_is_added_newest_first_and_removed_by_id() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  create_profile(&state, &token).await;

  let missing_field = send(
    &state,
    "PUT",
    "/api/profile/education",
    Some(&token),
    Some(json!({ "school": "MIT", "degree": "BSc", "from": "2010-09-01", "to": "2014-06-01" })),
  )
  .await;
  assert_eq!(missing_field.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    json_body(missing_field).await["errors"][0]["msg"],
    "Field of study is required",
  );

  for school in ["MIT", "Stanford"] {
    let resp = send(
      &state,
      "PUT",
      "/api/profile/education",
      Some(&token),
      Some(json!({
        "school": school,
        "degree": "BSc",
        "fieldofstudy": "Mathematics",
        "from": "2010-09-01",
        "to": "2014-06-01T00:00:00Z",
        "current": true,
      })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  let resp = send(&state, "GET", "/api/profile/me", Some(&token), None).await;
  let profile = json_body(resp).await;
  let education = profile["education"].as_array().unwrap();
  assert_eq!(education[0]["school"], "Stanford");
  assert_eq!(education[1]["school"], "MIT");
  assert_eq!(education[1]["to"], "2014-06-01");

  let mit_id = education[1]["id"].as_str().unwrap();
  let resp = send(
    &state,
    "DELETE",
    &format!("/api/profile/education/{mit_id}"),
    Some(&token),
    None,
  )
  .await;
  let profile = json_body(resp).await;
  let education = profile["education"].as_array().unwrap();
  assert_eq!(education.len(), 1);
  assert_eq!(education[0]["school"], "Stanford");
}

// ── Posts ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn posts_snapshot_author_and_list_newest_first() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;

  let first = create_post(&state, &token, "first").await;
  assert_eq!(first["first_name"], "Ada");
  assert_eq!(first["last_name"], "Lovelace");
  assert_eq!(first["likes"], json!([]));
  create_post(&state, &token, "second").await;

  let resp = send(&state, "GET", "/api/posts", Some(&token), None).await;
  let posts = json_body(resp).await;
  let texts: Vec<_> = posts.as_array().unwrap().iter().map(|p| p["text"].clone()).collect();
  assert_eq!(texts, [json!("second"), json!("first")]);

  let id = first["id"].as_str().unwrap();
  let resp = send(&state, "GET", &format!("/api/posts/{id}"), Some(&token), None).await;
  assert_eq!(json_body(resp).await["text"], "first");
}

#[tokio::test]
async fn post_text_is_required() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  let resp = send(&state, "POST", "/api/posts", Some(&token), Some(json!({ "text": "" }))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "errors": [{ "field": "text", "msg": "Text is required" }] }));
}

#[tokio::test]
async fn missing_post_is_not_found() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  for id in [uuid::Uuid::new_v4().to_string(), "123".to_owned()] {
    let resp = send(&state, "GET", &format!("/api/posts/{id}"), Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "msg": "Post not found" }));
  }
}

#[tokio::test]
async fn only_the_author_deletes_a_post() {
  let state = make_state().await;
  let ada = register(&state, "Ada", "ada@example.com").await;
  let grace = register(&state, "Grace", "grace@example.com").await;
  let post = create_post(&state, &ada, "mine").await;
  let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

  let resp = send(&state, "DELETE", &uri, Some(&grace), None).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(json_body(resp).await, json!({ "msg": "User not authorized" }));

  let resp = send(&state, "DELETE", &uri, Some(&ada), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(json_body(resp).await, json!({ "msg": "Post deleted" }));

  let resp = send(&state, "GET", &uri, Some(&ada), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn like_and_unlike_are_not_repeatable() {
  let state = make_state().await;
  let ada = register(&state, "Ada", "ada@example.com").await;
  let grace = register(&state, "Grace", "grace@example.com").await;
  let post = create_post(&state, &ada, "hello").await;
  let id = post["id"].as_str().unwrap();
  let like = format!("/api/posts/{id}/like");
  let unlike = format!("/api/posts/{id}/unlike");

  let resp = send(&state, "PUT", &like, Some(&ada), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let resp = send(&state, "PUT", &like, Some(&grace), None).await;
  let likes = json_body(resp).await;
  assert_eq!(likes.as_array().unwrap().len(), 2);

  let resp = send(&state, "PUT", &like, Some(&ada), None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "msg": "Post already liked" }));

  let resp = send(&state, "PUT", &unlike, Some(&ada), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let likes = json_body(resp).await;
  assert_eq!(likes.as_array().unwrap().len(), 1);

  let resp = send(&state, "PUT", &unlike, Some(&ada), None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "msg": "Post has not yet been liked" }));
}

#[tokio::test]
async fn comments_are_added_and_removed_by_their_author() {
  let state = make_state().await;
  let ada = register(&state, "Ada", "ada@example.com").await;
  let grace = register(&state, "Grace", "grace@example.com").await;
  let post = create_post(&state, &ada, "hello").await;
  let id = post["id"].as_str().unwrap();
  let uri = format!("/api/posts/{id}/comment");

  send(&state, "POST", &uri, Some(&ada), Some(json!({ "text": "first" }))).await;
  let resp = send(&state, "POST", &uri, Some(&grace), Some(json!({ "text": "second" }))).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let comments = json_body(resp).await;
  assert_eq!(comments[0]["text"], "second");
  assert_eq!(comments[0]["first_name"], "Grace");
  assert_eq!(comments[1]["text"], "first");

  let grace_comment = comments[0]["id"].as_str().unwrap();
  let resp = send(&state, "DELETE", &format!("{uri}/{grace_comment}"), Some(&ada), None).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

  let resp = send(&state, "DELETE", &format!("{uri}/{grace_comment}"), Some(&grace), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let comments = json_body(resp).await;
  assert_eq!(comments.as_array().unwrap().len(), 1);
  assert_eq!(comments[0]["text"], "first");

  let resp = send(&state, "DELETE", &format!("{uri}/{grace_comment}"), Some(&grace), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(resp).await, json!({ "msg": "Comment does not exist" }));
}

#[tokio::test]
async fn comment_on_missing_post_is_not_found() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  let uri = format!("/api/posts/{}/comment", uuid::Uuid::new_v4());
  let resp = send(&state, "POST", &uri, Some(&token), Some(json!({ "text": "hi" }))).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn uncomment_on_missing_post_is_not_found() {
  let state = make_state().await;
  let token = register(&state, "Ada", "ada@example.com").await;
  let uri = format!(
    "/api/posts/{}/comment/{}",
    uuid::Uuid::new_v4(),
    uuid::Uuid::new_v4(),
  );
  let resp = send(&state, "DELETE", &uri, Some(&token), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(resp).await, json!({ "msg": "Post not found" }));
}
