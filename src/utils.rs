//! Input validation helpers

use url::Url;

use crate::errors::ConsoleError;

/// Longest custom code the form accepts.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 128;

/// Validate a destination URL before sending it to the backend.
///
/// Only http/https is accepted; anything else (javascript:, data:, file:,
/// relative paths) is rejected client-side rather than bounced off the API.
pub fn validate_target_url(input: &str) -> Result<(), ConsoleError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConsoleError::validation("URL cannot be empty"));
    }

    let parsed = Url::parse(input)
        .map_err(|e| ConsoleError::validation(format!("Invalid URL: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConsoleError::validation(format!(
            "Invalid protocol: {}. Only http:// and https:// are allowed",
            scheme
        ))),
    }
}

/// Validate a custom short code: letters, digits, hyphens and underscores,
/// mirroring the `[a-zA-Z0-9-_]+` rule the backend enforces. An empty input
/// is fine — it means the server picks a random code.
pub fn validate_custom_code(input: &str) -> Result<(), ConsoleError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }
    if input.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(ConsoleError::validation(format!(
            "Custom code too long (max {} characters)",
            MAX_CUSTOM_CODE_LENGTH
        )));
    }
    if !input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConsoleError::validation(
            "Custom code may only contain letters, numbers, hyphens, and underscores",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_target_url("https://example.com/a/b?c=d").is_ok());
        assert!(validate_target_url("http://localhost:3000").is_ok());
        assert!(validate_target_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(validate_target_url("").is_err());
        assert!(validate_target_url("   ").is_err());
        assert!(validate_target_url("not a url").is_err());
        assert!(validate_target_url("example.com/path").is_err());
    }

    #[test]
    fn rejects_dangerous_protocols() {
        assert!(validate_target_url("javascript:alert(1)").is_err());
        assert!(validate_target_url("file:///etc/passwd").is_err());
        assert!(validate_target_url("data:text/html,hi").is_err());
    }

    #[test]
    fn custom_code_charset() {
        assert!(validate_custom_code("").is_ok());
        assert!(validate_custom_code("my-custom_Link2").is_ok());
        assert!(validate_custom_code("has space").is_err());
        assert!(validate_custom_code("slash/code").is_err());
        assert!(validate_custom_code(&"x".repeat(MAX_CUSTOM_CODE_LENGTH + 1)).is_err());
    }
}
