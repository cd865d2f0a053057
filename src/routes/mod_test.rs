use std::path::Path;

use super::*;
use crate::config::ServerConfig;
use crate::routes::pages::XHTML_CONTENT_TYPE;

const PAGE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:p="/2011/02/19/bash_c_ui/params">
<head>
<title>shell</title>
<p:bash_c_params>
<p:bash_c_cgi_bin_url value="http://example/cgi-bin/x"/>
<p:bash_c_ui target_id="shell-slot"/>
</p:bash_c_params>
</head>
<body><div id="shell-slot">loading</div></body>
</html>"#;

fn write_htdocs(dir: &Path) {
    std::fs::write(dir.join("index.xhtml"), PAGE).unwrap();
    std::fs::write(dir.join("plain.xhtml"), r#"<html xmlns="http://www.w3.org/1999/xhtml"><head/><body/></html>"#).unwrap();
    std::fs::write(dir.join("broken.xhtml"), "<html><body></html>").unwrap();
    std::fs::write(dir.join("style.css"), "body { margin: 0 }").unwrap();
}

/// Serve `htdocs` on an ephemeral port and return the base URL.
async fn spawn_server(htdocs: &Path, prerender: bool) -> String {
    let config = ServerConfig { port: 0, htdocs_dir: htdocs.to_path_buf(), prerender };
    let app = app(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path(), true).await;
    let body = reqwest::get(format!("{base}/healthz")).await.unwrap().text().await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["prerender"], true);
}

#[tokio::test]
async fn index_is_prerendered() {
    let dir = tempfile::tempdir().unwrap();
    write_htdocs(dir.path());
    let base = spawn_server(dir.path(), true).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").and_then(|v| v.to_str().ok()).map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some(XHTML_CONTENT_TYPE));
    let body = resp.text().await.unwrap();
    assert!(body.contains("bash -c &lt;...&gt; # Web Shell"));
    assert!(!body.contains("loading"));
}

#[tokio::test]
async fn escaped_page_name_is_prerendered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("my page.xhtml"), PAGE).unwrap();
    let base = spawn_server(dir.path(), true).await;

    let body = reqwest::get(format!("{base}/my%20page.xhtml")).await.unwrap().text().await.unwrap();
    assert!(body.contains("bash -c &lt;...&gt; # Web Shell"));
    assert!(!body.contains("loading"));
}

#[tokio::test]
async fn prerender_disabled_serves_page_as_is() {
    let dir = tempfile::tempdir().unwrap();
    write_htdocs(dir.path());
    let base = spawn_server(dir.path(), false).await;

    let body = reqwest::get(format!("{base}/index.xhtml")).await.unwrap().text().await.unwrap();
    assert_eq!(body, PAGE);
}

#[tokio::test]
async fn unconfigured_and_broken_pages_fall_through() {
    let dir = tempfile::tempdir().unwrap();
    write_htdocs(dir.path());
    let base = spawn_server(dir.path(), true).await;

    let plain = reqwest::get(format!("{base}/plain.xhtml")).await.unwrap();
    assert_eq!(plain.status(), 200);
    assert_eq!(
        plain.text().await.unwrap(),
        r#"<html xmlns="http://www.w3.org/1999/xhtml"><head/><body/></html>"#
    );

    let broken = reqwest::get(format!("{base}/broken.xhtml")).await.unwrap();
    assert_eq!(broken.status(), 200);
    assert_eq!(broken.text().await.unwrap(), "<html><body></html>");
}

#[tokio::test]
async fn static_files_and_missing_pages() {
    let dir = tempfile::tempdir().unwrap();
    write_htdocs(dir.path());
    let base = spawn_server(dir.path(), true).await;

    let css = reqwest::get(format!("{base}/style.css")).await.unwrap();
    assert_eq!(css.status(), 200);
    assert_eq!(css.text().await.unwrap(), "body { margin: 0 }");

    let missing = reqwest::get(format!("{base}/missing.xhtml")).await.unwrap();
    assert_eq!(missing.status(), 404);
}
