use axum::http::StatusCode;
use thiserror::Error;

/// Erros devolvidos ao chamador. Conjunto fechado de quatro tipos.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeleteError {
    #[error("the function must be called by an authenticated user")]
    Unauthenticated,
    #[error("parameter 'publicId' is required and must be a string")]
    InvalidArgument,
    #[error("failed to delete media asset, provider status: {status}")]
    Internal { status: String },
    #[error("error while communicating with the media provider")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    InvalidArgument,
    Internal,
    Unknown,
}

impl ErrorKind {
    pub fn as_code(&self) -> &'static str {
        match self {
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::Internal | ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl DeleteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeleteError::Unauthenticated => ErrorKind::Unauthenticated,
            DeleteError::InvalidArgument => ErrorKind::InvalidArgument,
            DeleteError::Internal { .. } => ErrorKind::Internal,
            DeleteError::Unknown => ErrorKind::Unknown,
        }
    }
}

/// Falhas dentro do cliente do provedor de mídia.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider answered {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid CLOUDINARY_URL: {0}")]
    InvalidCloudinaryUrl(String),
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
    #[error("invalid configuration value: {0}")]
    Invalid(&'static str),
}
