use crate::storage::StorageError;
use lambda_http::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while producing a thumbnail. Each variant
/// maps to exactly one HTTP status; the Display string is the
/// caller-visible error message.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Forbidden")]
    Forbidden,

    #[error("Missing image path")]
    MissingPath,

    #[error("Invalid width or height parameter")]
    InvalidDimension,

    #[error("Width and height must be between 1 and 4096")]
    DimensionOutOfRange,

    #[error("Image not found")]
    NotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("Image file too large")]
    PayloadTooLarge,

    #[error("Invalid image format")]
    Decode(#[source] image::ImageError),

    #[error("Internal server error")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ThumbnailError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Forbidden | Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::MissingPath
            | Self::InvalidDimension
            | Self::DimensionOutOfRange
            | Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ThumbnailError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => Self::NotFound,
            StorageError::AccessDenied => Self::AccessDenied,
            other => Self::Internal(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ThumbnailError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ThumbnailError::MissingPath.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ThumbnailError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ThumbnailError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_storage_errors_keep_their_status() {
        assert_eq!(
            ThumbnailError::from(StorageError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ThumbnailError::from(StorageError::AccessDenied).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ThumbnailError::from(StorageError::Request("timeout".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_match_contract() {
        assert_eq!(ThumbnailError::Forbidden.to_string(), "Forbidden");
        assert_eq!(ThumbnailError::MissingPath.to_string(), "Missing image path");
        assert_eq!(
            ThumbnailError::InvalidDimension.to_string(),
            "Invalid width or height parameter"
        );
        assert_eq!(
            ThumbnailError::DimensionOutOfRange.to_string(),
            "Width and height must be between 1 and 4096"
        );
        assert_eq!(ThumbnailError::PayloadTooLarge.to_string(), "Image file too large");
    }
}
