//! Target URL validation.

use validator::ValidationError;

/// Returns `true` if `url` starts with `http://` or `https://`.
///
/// This is a scheme prefix check only. Host syntax, reachability and content
/// are not inspected.
pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// `validator` adapter for [`is_valid_url`], used by request DTOs.
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(ValidationError::new("http_url")
            .with_message("URL must start with http:// or https://".into()))
    }
}
