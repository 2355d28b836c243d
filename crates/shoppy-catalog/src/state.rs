//! Three-state result of a catalog load.

use serde::Serialize;
use shoppy_data::FetchError;
use thiserror::Error;

/// Why a load failed, in a form views can display.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct LoadError {
    /// HTTP status, when the service answered.
    pub status: Option<u16>,
    /// Human-readable description.
    pub message: String,
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        Self {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

/// Status of data a view is waiting for.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// A request is outstanding.
    Loading,
    /// The latest request succeeded.
    Ready(T),
    /// The latest request failed.
    Failed(LoadError),
}

impl<T> LoadState<T> {
    /// Check if a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded data, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Status label for logs and JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        }
    }
}

impl<T> From<Result<T, FetchError>> for LoadState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => LoadState::Failed(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ok() {
        let state: LoadState<u32> = Ok(3).into();
        assert_eq!(state.ready(), Some(&3));
        assert_eq!(state.label(), "ready");
    }

    #[test]
    fn test_from_http_error_keeps_status() {
        let state: LoadState<u32> = Err(FetchError::HttpError {
            status: 404,
            message: "gone".into(),
        })
        .into();
        let err = state.error().unwrap();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "HTTP 404: gone");
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let state: LoadState<u32> = Err(FetchError::Timeout).into();
        assert_eq!(state.error().unwrap().status, None);
        assert!(!state.is_loading());
    }
}
