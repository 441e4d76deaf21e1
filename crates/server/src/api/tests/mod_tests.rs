use super::*;
use axum::{body, body::Body, http::Request};
use std::{fs, path::Path};
use tower::ServiceExt;

const DATA: &str = r#"[{"model":"a","scenario":"x","throughput_tokens_per_sec":1.0,"requests_per_sec":2.0}]"#;

fn test_app(root: &Path, with_static: bool) -> Router {
    build_router(Arc::new(AppState {
        data_file: root.join("data.json"),
        static_dir: with_static.then(|| root.to_path_buf()),
    }))
}

async fn get_path(app: Router, path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::get(path).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn healthz_reports_ok() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, _, body) = get_path(test_app(dir.path(), false), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn serves_data_file_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("data.json"), DATA).expect("write");

    let (status, content_type, body) = get_path(test_app(dir.path(), false), "/data.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, DATA.as_bytes());
}

#[tokio::test]
async fn missing_data_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, _, body) = get_path(test_app(dir.path(), false), "/data.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let err: ApiError = serde_json::from_slice(&body).expect("error json");
    assert!(matches!(err.code, ErrorCode::NotFound));
}

#[tokio::test]
async fn static_dir_serves_page_assets() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), "<table></table>").expect("write");

    let (status, _, body) = get_path(test_app(dir.path(), true), "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<table></table>");

    let (status, _, _) = get_path(test_app(dir.path(), false), "/index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
