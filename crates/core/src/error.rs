use thiserror::Error;
use unl_api::ApiError;

#[derive(Error, Debug)]
pub enum UnlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed link {link:?}: {reason}")]
    MalformedLink { link: String, reason: String },
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown node: {0}")]
    UnknownNode(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<UnlError> for ApiError {
    fn from(err: UnlError) -> Self {
        match err {
            UnlError::Api(inner) => inner,
            UnlError::UnknownNode(what) => ApiError::NotFound(what),
            UnlError::MalformedLink { .. } | UnlError::UnknownRole(_) => {
                ApiError::InvalidArgument(err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, UnlError>;
