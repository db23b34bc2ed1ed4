//! Router tests

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::{build_router, AppOptions, AppState};
use crate::infrastructure::adapters::generator::{
    OpenRouterClient, OpenRouterClientConfig, TemplateGenerator,
};
use crate::infrastructure::memory::InMemorySessionManager;
use crate::infrastructure::persistence::sqlite::{
    create_pool, ensure_admin, run_migrations, AdminAccount, DatabaseConfig,
    SqliteReportRepository, SqliteUserRepository,
};

async fn app() -> Router {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    ensure_admin(
        &pool,
        &AdminAccount {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: "admin@localhost".to_string(),
        },
    )
    .await
    .unwrap();

    // 未配置密钥，生成总是走模板回退
    let primary = OpenRouterClient::new(OpenRouterClientConfig::default()).unwrap();

    let state = AppState::new(
        Arc::new(InMemorySessionManager::new(3600)),
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteReportRepository::new(pool)),
        Arc::new(primary),
        Arc::new(TemplateGenerator::new()),
        AppOptions::default(),
    );

    build_router(Arc::new(state), None)
}

fn post_json(uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> Value {
    let (status, _, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

/// 注册并登录，返回 Cookie 头
async fn login_as(app: &Router, username: &str, password: &str) -> String {
    send_json(
        app,
        post_json(
            "/api/register",
            json!({"username": username, "password": password}),
            None,
        ),
    )
    .await;
    login(app, username, password).await
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let (_, headers, body) = send(
        app,
        post_json(
            "/api/login",
            json!({"username": username, "password": password}),
            None,
        ),
    )
    .await;
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["errno"], 0, "login failed: {}", value);

    let set_cookie = headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_ping() {
    let app = app().await;
    let value = send_json(&app, get("/api/ping", None)).await;
    assert_eq!(value["errno"], 0);
    assert_eq!(value["data"]["status"], "ok");
}

#[tokio::test]
async fn test_register_login_me_logout() {
    let app = app().await;

    let anonymous = send_json(&app, get("/api/me", None)).await;
    assert!(anonymous["data"]["user"].is_null());

    let cookie = login_as(&app, "aru", "secret").await;
    assert!(cookie.starts_with("session="));

    let me = send_json(&app, get("/api/me", Some(&cookie))).await;
    assert_eq!(me["data"]["user"]["username"], "aru");
    assert_eq!(me["data"]["user"]["is_admin"], false);

    let out = send_json(&app, post_json("/api/logout", json!({}), Some(&cookie))).await;
    assert_eq!(out["errno"], 0);

    let after = send_json(&app, get("/api/me", Some(&cookie))).await;
    assert!(after["data"]["user"].is_null());
}

#[tokio::test]
async fn test_register_errors() {
    let app = app().await;

    let missing = send_json(&app, post_json("/api/register", json!({"username": "x"}), None)).await;
    assert_eq!(missing["errno"], 400);

    login_as(&app, "dup", "p").await;
    let dup = send_json(
        &app,
        post_json("/api/register", json!({"username": "dup", "password": "q"}), None),
    )
    .await;
    assert_eq!(dup["errno"], 409);

    let bad_login = send_json(
        &app,
        post_json("/api/login", json!({"username": "dup", "password": "wrong"}), None),
    )
    .await;
    assert_eq!(bad_login["errno"], 401);
}

#[tokio::test]
async fn test_generate_uses_fallback() {
    let app = app().await;
    let value = send_json(
        &app,
        post_json(
            "/api/generate",
            json!({"prompt": "Rust", "type": "presentation", "language": "english", "word_count": 20}),
            None,
        ),
    )
    .await;

    assert_eq!(value["errno"], 0);
    assert_eq!(value["data"]["source"], "fallback");
    assert!(value["data"]["text"]
        .as_str()
        .unwrap()
        .starts_with("PRESENTATION: RUST"));
    // 结果只出现在 data 中
    assert!(value.get("text").is_none());
    assert!(value.get("success").is_none());

    let empty = send_json(&app, post_json("/api/generate", json!({"prompt": " "}), None)).await;
    assert_eq!(empty["errno"], 400);
}

#[tokio::test]
async fn test_save_list_download_reports() {
    let app = app().await;

    let anonymous = send_json(
        &app,
        post_json("/api/save_report", json!({"content": "x"}), None),
    )
    .await;
    assert_eq!(anonymous["errno"], 401);

    let empty_list = send_json(&app, get("/api/get_reports", None)).await;
    assert_eq!(empty_list["data"]["reports"], json!([]));

    let cookie = login_as(&app, "dana", "pw").await;
    let saved = send_json(
        &app,
        post_json(
            "/api/save_report",
            json!({"title": "AI", "content": "SLIDE 1\n• point", "type": "presentation", "word_count": 300}),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(saved["errno"], 0);
    let id = saved["data"]["report_id"].as_i64().unwrap();

    let list = send_json(&app, get("/api/get_reports", Some(&cookie))).await;
    assert_eq!(list["data"]["reports"][0]["id"], id);
    assert_eq!(list["data"]["reports"][0]["type"], "presentation");
    assert_eq!(list["data"]["reports"][0]["language"], "kazakh");

    let (status, headers, body) = send(
        &app,
        get(&format!("/api/download_report/{}/docx", id), Some(&cookie)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let disposition = headers
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(disposition.contains(&format!("_{}.docx", id)));
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Презентация: AI\n\nSLIDE 1\n• point"
    );

    let pdf = send_json(
        &app,
        get(&format!("/api/download_report/{}/pdf", id), Some(&cookie)),
    )
    .await;
    assert_eq!(pdf["errno"], 404);

    // 其他用户看不到
    let other = login_as(&app, "other", "pw").await;
    let foreign = send_json(
        &app,
        get(&format!("/api/download_report/{}/txt", id), Some(&other)),
    )
    .await;
    assert_eq!(foreign["errno"], 404);
}

#[tokio::test]
async fn test_admin_routes() {
    let app = app().await;

    let anonymous = send_json(&app, get("/api/admin/stats", None)).await;
    assert_eq!(anonymous["errno"], 403);

    let user = login_as(&app, "plain", "pw").await;
    let forbidden = send_json(&app, get("/api/admin/users", Some(&user))).await;
    assert_eq!(forbidden["errno"], 403);

    let admin = login(&app, "admin", "admin123").await;
    let stats = send_json(&app, get("/api/admin/stats", Some(&admin))).await;
    assert_eq!(stats["data"]["user_count"], 2);
    assert_eq!(stats["data"]["last_user"], "plain");

    let users = send_json(&app, get("/api/admin/users", Some(&admin))).await;
    assert_eq!(users["data"]["users"].as_array().unwrap().len(), 2);

    let reports = send_json(&app, get("/api/admin/reports", Some(&admin))).await;
    assert_eq!(reports["data"]["reports"], json!([]));
}

#[tokio::test]
async fn test_exports() {
    let app = app().await;

    let (_, headers, body) = send(
        &app,
        post_json("/api/save_txt", json!({"text": "мәтін"}), None),
    )
    .await;
    assert_eq!(body, "мәтін".as_bytes());
    assert!(headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .starts_with("text/plain"));

    let (_, _, body) = send(
        &app,
        post_json("/api/save_docx", json!({"text": "body", "type": "referat"}), None),
    )
    .await;
    assert_eq!(body, "Реферат\n\nbody".as_bytes());

    let form = Request::builder()
        .method("POST")
        .uri("/api/save_presentation_pdf")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("content=text&title=My+deck"))
        .unwrap();
    let (_, headers, body) = send(&app, form).await;
    assert_eq!(body, "Презентация: My deck\n\ntext".as_bytes());
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
}

#[tokio::test]
async fn test_view_presentation() {
    let app = app().await;
    let form = Request::builder()
        .method("POST")
        .uri("/api/view_presentation")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("content=SLIDE+1%0A%E2%80%A2+first+point&title=Deck"))
        .unwrap();

    let (status, headers, body) = send(&app, form).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .starts_with("text/html"));

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<title>Презентация: Deck</title>"));
    assert!(html.contains("<li>first point</li>"));
}
