//! API binding integration tests
//!
//! Wire-shape handling and error normalization, exercised through the
//! crate's public surface without a live backend.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use chrono::{DateTime, Utc};

use shortlink_console::api::{ApiClient, ShortLink, ShortenRequest, extract_error_message};
use shortlink_console::config::Config;
use shortlink_console::insights;

fn fixed_now() -> DateTime<Utc> {
    "2026-08-29T12:00:00Z".parse().unwrap()
}

#[test]
fn test_error_message_prefers_backend_body() {
    let body = r#"{"error": "Custom code already exists"}"#;
    assert_eq!(
        extract_error_message(body, "Failed to shorten URL"),
        "Custom code already exists"
    );
}

#[test]
fn test_error_message_falls_back_per_operation() {
    for default in [
        "Failed to shorten URL",
        "Failed to fetch stats",
        "Failed to fetch URLs",
        "Failed to delete URL",
    ] {
        assert_eq!(extract_error_message("", default), default);
        assert_eq!(extract_error_message("<html>502</html>", default), default);
    }
}

#[test]
fn test_shorten_request_wire_shape() {
    let without_code = ShortenRequest {
        url: "https://example.com/long/path".to_string(),
        custom_code: None,
    };
    let json = serde_json::to_string(&without_code).unwrap();
    assert!(!json.contains("custom_code"));

    let with_code = ShortenRequest {
        url: "https://example.com/long/path".to_string(),
        custom_code: Some("docs".to_string()),
    };
    let json = serde_json::to_string(&with_code).unwrap();
    assert!(json.contains(r#""custom_code":"docs""#));
}

#[test]
fn test_stats_snapshot_feeds_insights() {
    // A backend stats payload rendered end to end through the derived
    // metrics, with a pinned clock.
    let stats: ShortLink = serde_json::from_str(
        r#"{
            "short_code": "docs",
            "original_url": "https://example.com/documentation",
            "clicks": 10,
            "created_at": "2026-08-26T12:00:00Z",
            "last_accessed": "2026-08-29T09:30:00Z"
        }"#,
    )
    .unwrap();

    let now = fixed_now();
    assert_eq!(insights::age(stats.created_at, now), "3 days");
    assert_eq!(
        insights::daily_average(stats.created_at, stats.clicks, now),
        "3.3 clicks/day"
    );
    assert_eq!(insights::activity(stats.clicks), "active");
}

#[test]
fn test_unclicked_snapshot_reads_as_unused() {
    let stats: ShortLink = serde_json::from_str(
        r#"{
            "short_code": "fresh",
            "original_url": "https://example.com",
            "clicks": 0,
            "created_at": "2026-08-29T11:58:00Z"
        }"#,
    )
    .unwrap();

    assert!(stats.last_accessed.is_none());
    assert_eq!(insights::activity(stats.clicks), "unused");
    assert_eq!(insights::age(stats.created_at, fixed_now()), "2 minutes");
}

#[test]
fn test_short_url_reconstruction_from_configured_origin() {
    let mut config = Config::default();
    config.api.base_url = "https://sho.rt/api".to_string();

    assert_eq!(config.short_url_for("docs"), "https://sho.rt/docs");

    // The reconstructed URL never carries the API prefix.
    assert!(!config.short_url_for("docs").contains("/api/"));
}

/// Serve canned `/urls` responses in request order, one connection each.
fn canned_list_server(bodies: Vec<&'static str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/api", listener.local_addr().unwrap());

    thread::spawn(move || {
        for body in bodies {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                head.extend_from_slice(&buf[..n]);
                if n == 0 || head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    base
}

#[tokio::test]
async fn test_list_all_pages_until_exhausted() {
    // Two full-page fetches plus the short page that ends the walk.
    let base = canned_list_server(vec![
        r#"{"urls":[
            {"short_code":"a","original_url":"https://example.com/a","clicks":0,"created_at":"2026-01-01T00:00:00Z"},
            {"short_code":"b","original_url":"https://example.com/b","clicks":1,"created_at":"2026-01-02T00:00:00Z"}
        ]}"#,
        r#"{"urls":[
            {"short_code":"c","original_url":"https://example.com/c","clicks":2,"created_at":"2026-01-03T00:00:00Z"}
        ]}"#,
    ]);

    let client = ApiClient::new(base);
    let links = client.list_all(2).await.unwrap();

    let codes: Vec<&str> = links.iter().map(|l| l.short_code.as_str()).collect();
    assert_eq!(codes, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_list_all_with_empty_backend() {
    let base = canned_list_server(vec![r#"{"urls":null}"#]);
    let client = ApiClient::new(base);
    assert!(client.list_all(50).await.unwrap().is_empty());
}
