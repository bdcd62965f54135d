use crate::errors::ApiError;

pub mod application;
pub mod group;
pub mod version;

/// Builds a relative API path with a trailing slash. Every segment is
/// percent-encoded, so an id can never add segments, a query or a fragment.
pub(crate) fn api_path(segments: &[&str]) -> Result<String, ApiError> {
    let mut path = String::new();
    for segment in segments {
        if matches!(segment.trim(), "" | "." | "..") {
            return Err(ApiError::InvalidPathSegment(segment.to_string()));
        }
        path.push_str(&urlencoding::encode(segment));
        path.push('/');
    }
    Ok(path)
}
