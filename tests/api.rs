use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use blog::{
    app::build_app,
    articles::NewArticle,
    config::{AppConfig, Locale},
    state::AppState,
    users::NewUser,
};
use serde_json::Value;
use time::macros::datetime;
use tower::ServiceExt;

async fn app_with_john(config: AppConfig) -> Router {
    let state = AppState::in_memory(config);
    let john = state
        .users
        .insert(NewUser::new("johnDoe", "John", "Doe"))
        .await
        .unwrap();
    state
        .articles
        .insert(
            NewArticle::new("Lorem", "Lorem", "dolor sit amet", john.id)
                .added_at(datetime!(2024-01-01 9:00 UTC)),
        )
        .await
        .unwrap();
    state
        .articles
        .insert(
            NewArticle::new("Ipsum", "Ipsum", "consectetur", john.id)
                .added_at(datetime!(2024-02-01 9:00 UTC)),
        )
        .await
        .unwrap();
    build_app(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let res = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn article_by_slug_returns_article_with_author() {
    let app = app_with_john(AppConfig::default()).await;

    let (status, body) = get(&app, "/api/article/Lorem").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Lorem");
    assert_eq!(body["slug"], "Lorem");
    assert_eq!(body["content"], "dolor sit amet");
    assert_eq!(body["addedAt"], "2024-01-01T09:00:00Z");
    assert_eq!(body["author"]["login"], "johnDoe");
    assert_eq!(body["author"]["firstname"], "John");
    assert_eq!(body["author"]["lastname"], "Doe");
}

#[tokio::test]
async fn missing_article_is_404() {
    let app = app_with_john(AppConfig::default()).await;

    let (status, body) = get(&app, "/api/article/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Article does not exist");
}

#[tokio::test]
async fn article_list_is_newest_first() {
    let app = app_with_john(AppConfig::default()).await;

    let (status, body) = get(&app, "/api/article/").await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["Ipsum", "Lorem"]);

    let (_, without_slash) = get(&app, "/api/article").await;
    assert_eq!(without_slash, body);
}

#[tokio::test]
async fn user_by_login_and_missing_user() {
    let app = app_with_john(AppConfig::default()).await;

    let (status, body) = get(&app, "/api/user/johnDoe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["login"], "johnDoe");
    assert_eq!(body["firstname"], "John");

    let (status, body) = get(&app, "/api/user/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User does not exist");
}

#[tokio::test]
async fn user_list_contains_every_user() {
    let app = app_with_john(AppConfig::default()).await;

    let (status, body) = get(&app, "/api/user/").await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["login"], "johnDoe");
}

#[tokio::test]
async fn empty_collections_are_200() {
    let app = build_app(AppState::in_memory(AppConfig::default()));

    let (status, body) = get(&app, "/api/article/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));

    let (status, body) = get(&app, "/api/user/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let app = app_with_john(AppConfig::default()).await;

    let first = get(&app, "/api/article/").await;
    let second = get(&app, "/api/article/").await;
    assert_eq!(first, second);

    let first = get(&app, "/api/user/johnDoe").await;
    let second = get(&app, "/api/user/johnDoe").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn korean_locale_messages() {
    let config = AppConfig {
        locale: Locale::Ko,
        ..AppConfig::default()
    };
    let app = app_with_john(config).await;

    let (status, body) = get(&app, "/api/article/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Article 이 존재하지 않습니다.");

    let (_, body) = get(&app, "/api/user/missing").await;
    assert_eq!(body["error"]["message"], "User 가 존재하지 않습니다.");
}

#[tokio::test]
async fn health_is_ok() {
    let app = build_app(AppState::in_memory(AppConfig::default()));
    let res = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}
