//! Router tests: 完整的中间件栈 + 内存 SQLite / 故障仓储

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

use super::server::{build_router, ServerConfig};
use super::state::AppState;
use crate::application::ports::{
    ArticleRecord, ArticleRepositoryPort, RepositoryError, TagRecord, TagRepositoryPort,
};
use crate::auth::{AppCredentials, TokenService};
use crate::domain::{ArticleFilter, NewArticle, NewTag, Pagination, TagChanges, TagFilter};
use crate::infrastructure::adapters::{FileImageStorage, ImageStorageConfig};
use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
use crate::infrastructure::persistence::{SqliteArticleRepository, SqliteTagRepository};

const APP_KEY: &str = "test-app";
const APP_SECRET: &str = "test-app-secret";
const JWT_SECRET: &str = "router-test-secret";
const ISSUER: &str = "inkpad";
const FORM: &str = "application/x-www-form-urlencoded";

struct TestApp {
    router: Router,
    tokens: Arc<TokenService>,
    _images: TempDir,
}

impl TestApp {
    async fn sqlite() -> Self {
        Self::sqlite_with(&ServerConfig::default()).await
    }

    async fn sqlite_with(server: &ServerConfig) -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Self::build(
            Arc::new(SqliteArticleRepository::new(pool.clone())),
            Arc::new(SqliteTagRepository::new(pool)),
            server,
        )
    }

    fn with_repos(
        articles: Arc<dyn ArticleRepositoryPort>,
        tags: Arc<dyn TagRepositoryPort>,
    ) -> Self {
        Self::build(articles, tags, &ServerConfig::default())
    }

    fn build(
        articles: Arc<dyn ArticleRepositoryPort>,
        tags: Arc<dyn TagRepositoryPort>,
        server: &ServerConfig,
    ) -> Self {
        let images = TempDir::new().unwrap();
        let storage = FileImageStorage::new(ImageStorageConfig {
            runtime_root: images.path().to_path_buf(),
            save_path: "upload/images/".to_string(),
            prefix_url: "http://img.test".to_string(),
            max_size: 1024,
            allow_exts: vec![".jpg".to_string(), ".png".to_string()],
        });
        let image_dir = storage.image_dir();

        let state = AppState::new(
            articles,
            tags,
            Arc::new(storage),
            image_dir,
            TokenService::new(JWT_SECRET, ISSUER, Duration::hours(3)),
            AppCredentials::new(APP_KEY, APP_SECRET),
            2,
        );
        let tokens = state.tokens.clone();
        let router = build_router(Arc::new(state), server);

        Self {
            router,
            tokens,
            _images: images,
        }
    }

    fn token(&self) -> String {
        self.tokens.issue(APP_KEY).unwrap()
    }

    async fn raw(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.raw(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// 带有效 Token 的请求；form 不为空时作为 urlencoded 请求体
    async fn call(&self, method: &str, uri: &str, form: Option<&str>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token()));
        let request = match form {
            Some(form) => builder
                .header(header::CONTENT_TYPE, FORM)
                .body(Body::from(form.to_string())),
            None => builder.body(Body::empty()),
        };
        self.send(request.unwrap()).await
    }

    async fn call_with_token(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, token)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================================
// 故障仓储：每次调用都失败，并记录调用次数
// ============================================================================

#[derive(Default)]
struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RepositoryError::DatabaseError(
            "disk I/O error at /var/lib/inkpad.db".to_string(),
        ))
    }
}

#[async_trait]
impl TagRepositoryPort for FailingStore {
    async fn exists_by_id(&self, _id: i64) -> Result<bool, RepositoryError> {
        self.fail()
    }

    async fn exists_by_name(&self, _name: &str) -> Result<bool, RepositoryError> {
        self.fail()
    }

    async fn count(&self, _filter: &TagFilter) -> Result<i64, RepositoryError> {
        self.fail()
    }

    async fn list(
        &self,
        _filter: &TagFilter,
        _page: Pagination,
    ) -> Result<Vec<TagRecord>, RepositoryError> {
        self.fail()
    }

    async fn insert(&self, _tag: &NewTag, _now: DateTime<Utc>) -> Result<i64, RepositoryError> {
        self.fail()
    }

    async fn update(
        &self,
        _id: i64,
        _changes: &TagChanges,
        _now: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
        self.fail()
    }
}

#[async_trait]
impl ArticleRepositoryPort for FailingStore {
    async fn exists_by_id(&self, _id: i64) -> Result<bool, RepositoryError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<ArticleRecord>, RepositoryError> {
        self.fail()
    }

    async fn count(&self, _filter: &ArticleFilter) -> Result<i64, RepositoryError> {
        self.fail()
    }

    async fn list(
        &self,
        _filter: &ArticleFilter,
        _page: Pagination,
    ) -> Result<Vec<ArticleRecord>, RepositoryError> {
        self.fail()
    }

    async fn insert(
        &self,
        _article: &NewArticle,
        _now: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        self.fail()
    }
}

fn failing_app() -> (TestApp, Arc<FailingStore>) {
    let store = Arc::new(FailingStore::default());
    let app = TestApp::with_repos(store.clone(), store.clone());
    (app, store)
}

const ARTICLE_FORM: &str = "tag_id=1&title=Hello&desc=intro&content=body&created_by=alice\
&cover_image_url=http%3A%2F%2Fimg.test%2Fcover.png";

// ============================================================================
// Ping / Auth
// ============================================================================

#[tokio::test]
async fn test_ping_is_public() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.send(get("/ping")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["msg"], "ok");
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_auth_issues_verifiable_token() {
    let app = TestApp::sqlite().await;
    let uri = format!("/auth?app_key={}&app_secret={}", APP_KEY, APP_SECRET);
    let (status, body) = app.send(get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    let token = body["data"]["token"].as_str().unwrap();
    assert_eq!(app.tokens.verify(token).unwrap(), APP_KEY);
}

#[tokio::test]
async fn test_auth_accepts_form_body() {
    let app = TestApp::sqlite().await;
    let request = Request::builder()
        .method("POST")
        .uri("/auth")
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(format!(
            "app_key={}&app_secret={}",
            APP_KEY, APP_SECRET
        )))
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_auth_rejects_wrong_secret() {
    let app = TestApp::sqlite().await;
    let uri = format!("/auth?app_key={}&app_secret=nope", APP_KEY);
    let (status, body) = app.send(get(&uri)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 20004);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_auth_requires_both_fields() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.send(get("/auth?app_key=only-key")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["msg"], "请求参数错误");
}

// ============================================================================
// 鉴权中间件
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_invalid_params() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.send(get("/api/v1/tags")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_garbage_token_is_auth_error() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.call_with_token("/api/v1/tags", "not-a-token").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 20004);
}

#[tokio::test]
async fn test_foreign_signature_is_check_fail() {
    let app = TestApp::sqlite().await;
    let foreign = TokenService::new("another-secret", ISSUER, Duration::hours(3))
        .issue(APP_KEY)
        .unwrap();
    let (status, body) = app.call_with_token("/api/v1/tags", &foreign).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 20001);
}

#[tokio::test]
async fn test_expired_token_is_timeout() {
    let app = TestApp::sqlite().await;
    let expired = app
        .tokens
        .issue_at(APP_KEY, Utc::now() - Duration::hours(4))
        .unwrap();
    let (status, body) = app
        .call_with_token("/api/v1/tags", &format!("Bearer {}", expired))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 20002);
    assert_eq!(body["msg"], "Token已超时");
}

#[tokio::test]
async fn test_token_in_query_is_accepted() {
    let app = TestApp::sqlite().await;
    let uri = format!("/api/v1/tags?token={}", app.token());
    let (status, body) = app.send(get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
}

#[tokio::test]
async fn test_bearer_without_token_falls_back_to_query() {
    let app = TestApp::sqlite().await;
    let request = Request::builder()
        .uri(format!("/api/v1/tags?token={}", app.token()))
        .header(header::AUTHORIZATION, "Bearer ")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
}

// ============================================================================
// 标签
// ============================================================================

#[tokio::test]
async fn test_tag_lifecycle() {
    let app = TestApp::sqlite().await;

    let (status, body) = app
        .call("POST", "/api/v1/tags", Some("name=rust&created_by=alice"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert!(body["data"].is_null());

    let (status, body) = app
        .call("POST", "/api/v1/tags", Some("name=rust&created_by=bob"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 10001);

    let (_, body) = app.call("GET", "/api/v1/tags", None).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["lists"][0]["name"], "rust");
    assert_eq!(body["data"]["lists"][0]["state"], 0);

    let (status, body) = app
        .call("PUT", "/api/v1/tags/1", Some("name=go&modified_by=bob&state=1"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);

    let (_, body) = app.call("GET", "/api/v1/tags?state=1", None).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["lists"][0]["name"], "go");
    assert_eq!(body["data"]["lists"][0]["modified_by"], "bob");

    let (status, body) = app.call("DELETE", "/api/v1/tags/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);

    let (status, body) = app.call("DELETE", "/api/v1/tags/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 10003);
}

#[tokio::test]
async fn test_rename_onto_existing_tag() {
    let app = TestApp::sqlite().await;
    app.call("POST", "/api/v1/tags", Some("name=a&created_by=alice")).await;
    app.call("POST", "/api/v1/tags", Some("name=b&created_by=alice")).await;

    let (status, body) = app
        .call("PUT", "/api/v1/tags/2", Some("name=a&modified_by=bob"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 10001);
    assert_eq!(body["msg"], "已存在该标签名称");

    let (_, body) = app.call("GET", "/api/v1/tags", None).await;
    assert_eq!(body["data"]["total"], 2);
}

#[tokio::test]
async fn test_edit_missing_tag() {
    let app = TestApp::sqlite().await;
    let (status, body) = app
        .call("PUT", "/api/v1/tags/42", Some("name=go&modified_by=bob"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 10003);
    assert_eq!(body["msg"], "该标签不存在");
}

#[tokio::test]
async fn test_add_tag_validation() {
    let app = TestApp::sqlite().await;
    let (status, body) = app
        .call("POST", "/api/v1/tags", Some("name=rust&state=7"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_add_tag_empty_state_is_default() {
    let app = TestApp::sqlite().await;
    let (status, body) = app
        .call("POST", "/api/v1/tags", Some("name=rust&created_by=alice&state="))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);

    let (_, body) = app.call("GET", "/api/v1/tags?state=0", None).await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn test_tag_pagination_is_one_based() {
    let app = TestApp::sqlite().await;
    for name in ["a", "b", "c"] {
        let form = format!("name={}&created_by=alice", name);
        app.call("POST", "/api/v1/tags", Some(&form)).await;
    }

    let (_, first) = app.call("GET", "/api/v1/tags?page=1", None).await;
    let (_, second) = app.call("GET", "/api/v1/tags?page=2", None).await;
    let (_, beyond) = app.call("GET", "/api/v1/tags?page=9", None).await;

    assert_eq!(first["data"]["total"], 3);
    assert_eq!(first["data"]["lists"].as_array().unwrap().len(), 2);
    assert_eq!(first["data"]["lists"][0]["name"], "a");
    assert_eq!(second["data"]["lists"].as_array().unwrap().len(), 1);
    assert_eq!(second["data"]["lists"][0]["name"], "c");
    assert!(beyond["data"]["lists"].as_array().unwrap().is_empty());
}

// ============================================================================
// 文章
// ============================================================================

#[tokio::test]
async fn test_add_article_requires_existing_tag() {
    let app = TestApp::sqlite().await;

    let (status, body) = app.call("POST", "/api/v1/articles", Some(ARTICLE_FORM)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 10003);
    assert_eq!(body["data"], serde_json::json!({}));

    let (_, body) = app.call("GET", "/api/v1/articles", None).await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn test_article_create_and_read() {
    let app = TestApp::sqlite().await;
    app.call("POST", "/api/v1/tags", Some("name=rust&created_by=alice"))
        .await;

    let (status, body) = app.call("POST", "/api/v1/articles", Some(ARTICLE_FORM)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"], serde_json::json!({}));

    let (status, body) = app.call("GET", "/api/v1/articles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["title"], "Hello");
    assert_eq!(body["data"]["desc"], "intro");
    assert_eq!(body["data"]["cover_image_url"], "http://img.test/cover.png");
    assert_eq!(body["data"]["state"], 0);
    assert_eq!(body["data"]["tag"]["name"], "rust");

    let (_, body) = app.call("GET", "/api/v1/articles?tag_id=1", None).await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn test_add_article_invalid_returns_empty_object() {
    let app = TestApp::sqlite().await;
    let (status, body) = app
        .call("POST", "/api/v1/articles", Some("tag_id=0&title=x"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 400);
    assert_eq!(body["data"], serde_json::json!({}));
}

#[tokio::test]
async fn test_get_missing_article() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.call("GET", "/api/v1/articles/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 10011);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_bad_article_ids_are_invalid_params() {
    let app = TestApp::sqlite().await;
    for uri in ["/api/v1/articles/0", "/api/v1/articles/-3", "/api/v1/articles/abc"] {
        let (status, body) = app.call("GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["code"], 400, "{}", uri);
    }
}

#[tokio::test]
async fn test_bad_article_filter() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.call("GET", "/api/v1/articles?state=3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

// ============================================================================
// 存储故障
// ============================================================================

#[tokio::test]
async fn test_non_positive_ids_never_reach_the_store() {
    let (app, store) = failing_app();

    app.call("GET", "/api/v1/articles/0", None).await;
    app.call("DELETE", "/api/v1/tags/-1", None).await;
    app.call("PUT", "/api/v1/tags/0", Some("name=go&modified_by=bob"))
        .await;
    app.call("POST", "/api/v1/articles", Some("tag_id=0")).await;

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_store_faults_map_to_codes() {
    let (app, _store) = failing_app();

    let cases: [(&str, &str, Option<&str>, StatusCode, i64); 7] = [
        ("GET", "/api/v1/tags", None, StatusCode::INTERNAL_SERVER_ERROR, 10005),
        (
            "POST",
            "/api/v1/tags",
            Some("name=rust&created_by=alice"),
            StatusCode::INTERNAL_SERVER_ERROR,
            10002,
        ),
        (
            "PUT",
            "/api/v1/tags/1",
            Some("name=go&modified_by=bob"),
            StatusCode::INTERNAL_SERVER_ERROR,
            10002,
        ),
        ("DELETE", "/api/v1/tags/1", None, StatusCode::INTERNAL_SERVER_ERROR, 10002),
        ("GET", "/api/v1/articles", None, StatusCode::INTERNAL_SERVER_ERROR, 10016),
        ("GET", "/api/v1/articles/1", None, StatusCode::OK, 10012),
        ("POST", "/api/v1/articles", Some(ARTICLE_FORM), StatusCode::OK, 10002),
    ];

    for (method, uri, form, expected_status, expected_code) in cases {
        let (status, body) = app.call(method, uri, form).await;
        assert_eq!(status, expected_status, "{} {}", method, uri);
        assert_eq!(body["code"], expected_code, "{} {}", method, uri);
        assert!(
            !body.to_string().contains("disk I/O"),
            "internal detail leaked for {} {}",
            method,
            uri
        );
    }
}

// ============================================================================
// 上传
// ============================================================================

const BOUNDARY: &str = "inkpad-test-boundary";

fn multipart(field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file}\"\r\n\
Content-Type: application/octet-stream\r\n\r\n",
        b = BOUNDARY,
        field = field,
        file = file_name
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_upload_saves_and_serves_image() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.send(multipart("image", "cover.PNG", b"fake-png")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);

    let name = FileImageStorage::image_name("cover.PNG");
    assert_eq!(
        body["data"]["image_url"],
        format!("http://img.test/upload/images/{}", name)
    );
    assert_eq!(
        body["data"]["image_save_url"],
        format!("upload/images/{}", name)
    );

    let (status, bytes) = app.raw(get(&format!("/upload/images/{}", name))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"fake-png");
}

#[tokio::test]
async fn test_upload_rejects_bad_format() {
    let app = TestApp::sqlite().await;

    let (status, body) = app.send(multipart("image", "cover.gif", b"gif")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 30003);

    let too_big = vec![0u8; 2048];
    let (status, body) = app.send(multipart("image", "cover.jpg", &too_big)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 30003);
}

#[tokio::test]
async fn test_upload_over_body_limit_is_bad_format() {
    let server = ServerConfig::default().with_body_limit(1024 + 64 * 1024);
    let app = TestApp::sqlite_with(&server).await;

    let huge = vec![0u8; 200 * 1024];
    let (status, body) = app.send(multipart("image", "cover.jpg", &huge)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 30003);
}

#[tokio::test]
async fn test_upload_without_image_part() {
    let app = TestApp::sqlite().await;
    let (status, body) = app.send(multipart("file", "cover.png", b"x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_upload_requires_multipart() {
    let app = TestApp::sqlite().await;
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    assert_eq!(body["msg"], "fail");
}
