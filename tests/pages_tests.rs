use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use catalog_app::modules;
use catalog_kernel::ModuleRegistry;
use catalog_store::HttpBookStore;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(server: &MockServer) -> Router {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, Arc::new(HttpBookStore::new(server.uri())));
    catalog_http::build_router(&registry)
}

async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post_form(app: Router, uri: &str, form: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn books_json() -> serde_json::Value {
    json!([
        {"id": 3, "title": "Kindred", "author": "Octavia E. Butler", "publication_year": 1979},
        {"id": 4, "title": "Dawn", "author": "Octavia E. Butler", "isbn": "0446603775"}
    ])
}

// ── collection ──────────────────────────────────────────────────

#[tokio::test]
async fn test_collection_lists_books() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json()))
        .mount(&server)
        .await;

    let (status, body) = get_page(app(&server), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2 books in your library"));
    assert!(body.contains("Kindred"));
    assert!(body.contains("<strong>Published:</strong> 1979"));
    assert!(body.contains("<strong>ISBN:</strong> 0446603775"));
}

#[tokio::test]
async fn test_collection_failure_offers_retry_that_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let (_, body) = get_page(app(&server), "/").await;
    assert!(body.contains("Failed to load books"));
    assert!(body.contains("<a href=\"/\" class=\"btn btn-primary\">🔄 Try Again</a>"));

    // Following the retry link activates the list again.
    let (_, body) = get_page(app(&server), "/").await;
    assert!(body.contains("Failed to load books"));
}

#[tokio::test]
async fn test_slow_store_still_renders_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(books_json())
                .set_delay(Duration::from_millis(1500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_page(app(&server), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2 books in your library"));
}

#[tokio::test]
async fn test_slow_store_failure_renders_error_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(503).set_delay(Duration::from_millis(1500)))
        .mount(&server)
        .await;

    let (status, body) = get_page(app(&server), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Failed to load books"));
    assert!(body.contains("🔄 Try Again"));
}

#[tokio::test]
async fn test_slow_create_completes_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/books"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": 9, "title": "Dawn", "author": "Octavia E. Butler"}))
                .set_delay(Duration::from_millis(1500)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, _) = post_form(
        app(&server),
        "/add",
        "title=Dawn&author=Octavia+E.+Butler&publication_year=&isbn=",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
}

// ── add ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_blank_title_is_rejected_without_store_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_form(app(&server), "/add", "title=++&author=Butler&publication_year=&isbn=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Title and author are required"));
    assert!(body.contains("value=\"Butler\""));
}

#[tokio::test]
async fn test_valid_add_omits_blank_isbn_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/books"))
        .and(body_json(json!({"title": "Kindred", "author": "Octavia E. Butler", "publication_year": 1979})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12, "title": "Kindred", "author": "Octavia E. Butler", "publication_year": 1979
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "title=+Kindred+&author=Octavia+E.+Butler&publication_year=1979&isbn=+++",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_failed_add_stays_on_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = post_form(app(&server), "/add", "title=Dawn&author=Butler").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Failed to create book"));
    assert!(body.contains("value=\"Dawn\""));
}

// ── edit ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_book_edit_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Book not found"})))
        .mount(&server)
        .await;

    let (_, body) = get_page(app(&server), "/edit/7").await;
    assert!(body.contains("Failed to load book details."));
    assert!(body.contains("Back to Library"));
    assert!(!body.contains("<form"));
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let server = MockServer::start().await;
    let (status, _) = get_page(app(&server), "/edit/seven").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_form_is_prefilled_and_submits_update() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "title": "Kindred", "author": "Octavia E. Butler", "publication_year": 1979
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/books/3"))
        .and(body_json(json!({"title": "Kindred (25th ed.)", "author": "Octavia E. Butler", "publication_year": 2004})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "title": "Kindred (25th ed.)", "author": "Octavia E. Butler", "publication_year": 2004
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_, body) = get_page(app(&server), "/edit/3").await;
    assert!(body.contains("value=\"Kindred\""));
    assert!(body.contains("value=\"1979\""));

    let response = app(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/edit/3")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "title=Kindred+%2825th+ed.%29&author=Octavia+E.+Butler&publication_year=2004&isbn=",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// ── delete ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_asks_for_confirmation_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (_, body) = get_page(app(&server), "/delete/4").await;
    assert!(body.contains("Are you sure you want to delete this book?"));
    assert!(body.contains("action=\"/delete/4\""));
}

#[tokio::test]
async fn test_confirmed_delete_drops_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/books/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (_, body) = post_form(app(&server), "/delete/4", "").await;
    assert!(body.contains("1 book in your library"));
    assert!(body.contains("Kindred"));
    assert!(!body.contains("Dawn"));
}

#[tokio::test]
async fn test_failed_delete_shows_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_json()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/books/4"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_, body) = post_form(app(&server), "/delete/4", "").await;
    assert!(body.contains("Failed to delete book"));
}
