//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing backend URLs.

/// Join the backend origin and an API path.
///
/// Exactly one slash separates the two parts, whatever the inputs carry.
///
/// # Example
/// ```rust
/// use ecoclean_frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://localhost:5000/", "/api/bookings"), "http://localhost:5000/api/bookings");
/// ```
pub fn join_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Path of a single record under a collection endpoint.
pub fn record_path(endpoint: &str, id: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}
