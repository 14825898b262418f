//! API utilities for talking to the campaign backend.
//!
//! Provides helper functions for constructing API and asset URLs.

/// Get the base URL of the backend server
///
/// Constructs the URL from the current window location, using port 8000
/// for the campaign API server.
///
/// # Returns
/// - Server base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn server_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Base URL for versioned API endpoints
pub fn api_base() -> String {
    format!("{}/api/v1", server_base())
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/campaigns?limit=1000&offset=0");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Absolute URL for an uploaded asset.
///
/// Image columns carry absolute URLs, server paths like "/uploads/x.png",
/// or a bare file name from older rows; all three are handled.
pub fn upload_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        return format!("{}{}", server_base(), path);
    }
    format!("{}{}", server_base(), upload_path(path))
}

fn upload_path(file_name: &str) -> String {
    format!("/uploads/{}", urlencoding::encode(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            upload_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_bare_file_names_are_encoded() {
        assert_eq!(upload_path("banner 1.png"), "/uploads/banner%201.png");
        assert_eq!(upload_path("a.png"), "/uploads/a.png");
    }
}
