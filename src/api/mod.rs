//! HTTP client for the shortener REST API
//!
//! One method per backend capability, every call a single best-effort round
//! trip. Non-2xx responses collapse into [`ConsoleError::Api`] carrying the
//! backend's `{"error": ...}` message when one is present, else a default per
//! operation. Transport failures become [`ConsoleError::Network`]. No retries,
//! no caching, no request timeout.

mod types;

pub use types::{ErrorBody, ListResponse, ShortLink, ShortenRequest, ShortenResponse};

use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use tracing::debug;

use crate::errors::ConsoleError;

// One connection pool for the whole process; Client is an Arc handle.
static HTTP: Lazy<Client> = Lazy::new(Client::new);

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: HTTP.clone(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /shorten
    pub async fn shorten(
        &self,
        url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortenResponse, ConsoleError> {
        let request = ShortenRequest {
            url: url.to_string(),
            // Empty input means "server picks": the field must be absent.
            custom_code: custom_code
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
        };

        let endpoint = format!("{}/shorten", self.base_url);
        debug!(%endpoint, "POST shorten");
        let resp = self.http.post(&endpoint).json(&request).send().await?;
        if !resp.status().is_success() {
            return Err(read_api_error(resp, "Failed to shorten URL").await);
        }
        Ok(resp.json::<ShortenResponse>().await?)
    }

    /// GET /stats/{code}
    pub async fn stats(&self, code: &str) -> Result<ShortLink, ConsoleError> {
        let endpoint = format!("{}/stats/{}", self.base_url, code);
        debug!(%endpoint, "GET stats");
        let resp = self.http.get(&endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(read_api_error(resp, "Failed to fetch stats").await);
        }
        Ok(resp.json::<ShortLink>().await?)
    }

    /// GET /urls?limit=&offset=
    ///
    /// Pagination parameters are forwarded verbatim; a `null` urls array from
    /// the backend is an empty page, not an error.
    pub async fn list(&self, limit: usize, offset: usize) -> Result<Vec<ShortLink>, ConsoleError> {
        let endpoint = format!("{}/urls?limit={}&offset={}", self.base_url, limit, offset);
        debug!(%endpoint, "GET urls");
        let resp = self.http.get(&endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(read_api_error(resp, "Failed to fetch URLs").await);
        }
        let body = resp.json::<ListResponse>().await?;
        Ok(body.urls.unwrap_or_default())
    }

    /// Walk `GET /urls` page by page until a short page signals the end.
    ///
    /// Used where a complete view of the backend is required, such as
    /// reconciling the advisory list. A code missing from one page may still
    /// live on a later one.
    pub async fn list_all(&self, page_size: usize) -> Result<Vec<ShortLink>, ConsoleError> {
        let page_size = page_size.max(1);
        let mut all = Vec::new();
        let mut offset = 0;
        loop {
            let page = self.list(page_size, offset).await?;
            let exhausted = page.len() < page_size;
            offset += page.len();
            all.extend(page);
            if exhausted {
                return Ok(all);
            }
        }
    }

    /// DELETE /urls/{code}
    pub async fn delete(&self, code: &str) -> Result<(), ConsoleError> {
        let endpoint = format!("{}/urls/{}", self.base_url, code);
        debug!(%endpoint, "DELETE url");
        let resp = self.http.delete(&endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(read_api_error(resp, "Failed to delete URL").await);
        }
        Ok(())
    }

    /// GET /health — liveness probe for the footer indicator. Never fails:
    /// any transport error just reads as "down".
    pub async fn check_health(&self) -> bool {
        let endpoint = format!("{}/health", self.base_url);
        match self.http.get(&endpoint).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(err) => {
                debug!("Health check failed: {}", err);
                false
            }
        }
    }
}

async fn read_api_error(resp: Response, default: &str) -> ConsoleError {
    let body = resp.text().await.unwrap_or_default();
    ConsoleError::api(extract_error_message(&body, default))
}

/// Pull the `error` field out of a backend failure body, falling back to the
/// operation default when the body is empty or not the expected shape.
pub fn extract_error_message(body: &str, default: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_structured_error() {
        let msg = extract_error_message(
            r#"{"error": "Custom code already exists"}"#,
            "Failed to shorten URL",
        );
        assert_eq!(msg, "Custom code already exists");
    }

    #[test]
    fn falls_back_on_empty_body() {
        let msg = extract_error_message("", "Failed to delete URL");
        assert_eq!(msg, "Failed to delete URL");
    }

    #[test]
    fn falls_back_on_unstructured_body() {
        let msg = extract_error_message("502 Bad Gateway", "Failed to fetch stats");
        assert_eq!(msg, "Failed to fetch stats");

        let msg = extract_error_message(r#"{"message": "nope"}"#, "Failed to fetch stats");
        assert_eq!(msg, "Failed to fetch stats");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
