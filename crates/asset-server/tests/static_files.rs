//! Static file serving against a temporary asset directory.

use std::fs;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use asset_server::{build_router, serve, ServerConfig, ServerError};

fn asset_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Welcome to the Home Page!</h1>").unwrap();
    fs::create_dir(dir.path().join("js")).unwrap();
    fs::write(dir.path().join("js").join("bundle.js"), "console.log('form');").unwrap();
    dir
}

fn config_for(dir: &tempfile::TempDir) -> ServerConfig {
    ServerConfig {
        asset_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    }
}

async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
    let response = build_router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_serves_existing_asset() {
    let dir = asset_dir();
    let (status, body) = get(&config_for(&dir), "/js/bundle.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('form');");
}

#[tokio::test]
async fn test_root_serves_index() {
    let dir = asset_dir();
    let (status, body) = get(&config_for(&dir), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to the Home Page!"));
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let dir = asset_dir();
    let (status, _) = get(&config_for(&dir), "/nope.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_no_escape_from_asset_dir() {
    let dir = asset_dir();
    let (status, _) = get(&config_for(&dir), "/../../etc/passwd").await;
    assert_ne!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_serve_rejects_missing_dir() {
    let config = ServerConfig {
        asset_dir: "/definitely/not/here".into(),
        ..ServerConfig::default()
    };
    let result = serve(&config, async {}).await;
    assert!(matches!(result, Err(ServerError::MissingAssets(_))));
}

#[tokio::test]
async fn test_serve_stops_on_shutdown() {
    let dir = asset_dir();
    let config = ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        ..config_for(&dir)
    };
    let result = tokio::time::timeout(Duration::from_secs(5), serve(&config, async {})).await;
    assert!(matches!(result, Ok(Ok(()))));
}
