//! Wire types for the shortener REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened link as the backend reports it.
///
/// The backend owns every field; the client only reads these and requests
/// deletion. `last_accessed` is null until the first redirect is served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    /// Omitted entirely when the server should pick the code. The backend
    /// treats an empty string as a literal (invalid) custom code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,
    /// Absolute URL as the backend rendered it. Informational only: the
    /// display URL is reconstructed client-side from the configured origin,
    /// which also papers over backend double-slash quirks.
    #[serde(default)]
    pub short_url: String,
    #[serde(default)]
    pub original_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    /// The backend serializes an empty result as `"urls": null`.
    #[serde(default)]
    pub urls: Option<Vec<ShortLink>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_request_omits_absent_custom_code() {
        let req = ShortenRequest {
            url: "https://example.com".to_string(),
            custom_code: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com"}"#);
        assert!(!json.contains("custom_code"));
    }

    #[test]
    fn shorten_request_keeps_present_custom_code() {
        let req = ShortenRequest {
            url: "https://example.com".to_string(),
            custom_code: Some("my-link".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""custom_code":"my-link""#));
    }

    #[test]
    fn short_link_tolerates_null_last_accessed() {
        let link: ShortLink = serde_json::from_str(
            r#"{
                "short_code": "abc123",
                "original_url": "https://example.com/page",
                "clicks": 0,
                "created_at": "2026-01-02T03:04:05Z",
                "last_accessed": null
            }"#,
        )
        .unwrap();
        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.clicks, 0);
        assert!(link.last_accessed.is_none());
    }

    #[test]
    fn short_link_tolerates_missing_last_accessed() {
        // Go's `omitempty` drops the field entirely.
        let link: ShortLink = serde_json::from_str(
            r#"{
                "short_code": "abc123",
                "original_url": "https://example.com/page",
                "clicks": 7,
                "created_at": "2026-01-02T03:04:05Z"
            }"#,
        )
        .unwrap();
        assert!(link.last_accessed.is_none());
        assert_eq!(link.clicks, 7);
    }

    #[test]
    fn list_response_null_urls_is_empty() {
        let resp: ListResponse = serde_json::from_str(r#"{"urls": null}"#).unwrap();
        assert!(resp.urls.unwrap_or_default().is_empty());

        let resp: ListResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(resp.urls.unwrap_or_default().is_empty());
    }
}
