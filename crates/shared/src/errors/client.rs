use crate::errors::api::ApiError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response with status {status}: {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status attached to the error, when a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Transport(err) => err.status(),
            ClientError::Decode { status, .. } => Some(*status),
            ClientError::Api(api) => StatusCode::from_u16(api.status).ok(),
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::Config(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::Api(api) => api.is_not_found(),
            other => other.status() == Some(StatusCode::NOT_FOUND),
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiErrorEntry;

    #[test]
    fn api_error_reports_status_and_not_found() {
        let err = ClientError::from(ApiError {
            status: 404,
            errors: vec![ApiErrorEntry {
                status: 404,
                message: "missing".into(),
                details: None,
            }],
        });

        assert!(err.is_api());
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn unexpected_status_is_not_an_api_error() {
        let err = ClientError::UnexpectedStatus {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        };

        assert!(!err.is_api());
        assert!(err.is_not_found());
    }

    #[test]
    fn config_error_has_no_status() {
        let err = ClientError::Config("bad url".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Configuration error: bad url");
    }
}
