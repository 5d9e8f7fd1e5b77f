use thiserror::Error;

use crate::shared::http::ApiError;

/// Why a login attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Rejected by the backend, or answered without a token.
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("authentication service unreachable: {0}")]
    Network(String),
    #[error("authentication service failed with status {0}")]
    Server(u16),
    #[error("malformed authentication response: {0}")]
    MalformedResponse(String),
    /// A newer login (or a logout) started while this one was in flight.
    #[error("login superseded by a newer attempt")]
    Superseded,
}

impl LoginError {
    /// Message shown on the login screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginError::InvalidCredentials => "Invalid username or password.",
            LoginError::Network(_) => "Cannot reach the server. Check your connection and try again.",
            LoginError::Server(_) | LoginError::MalformedResponse(_) => {
                "The server could not complete the login. Please try again later."
            }
            LoginError::Superseded => "Another login attempt replaced this one.",
        }
    }
}

impl From<ApiError> for LoginError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized | ApiError::Status(400) | ApiError::Status(403) => {
                LoginError::InvalidCredentials
            }
            ApiError::Status(status) => LoginError::Server(status),
            ApiError::Network(e) => LoginError::Network(e),
            ApiError::Decode(e) | ApiError::Encode(e) => LoginError::MalformedResponse(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_mapping() {
        assert_eq!(LoginError::from(ApiError::Unauthorized), LoginError::InvalidCredentials);
        assert_eq!(LoginError::from(ApiError::Status(403)), LoginError::InvalidCredentials);
        assert_eq!(LoginError::from(ApiError::Status(502)), LoginError::Server(502));
        assert!(matches!(
            LoginError::from(ApiError::Network("offline".into())),
            LoginError::Network(_)
        ));
        assert!(matches!(
            LoginError::from(ApiError::Decode("eof".into())),
            LoginError::MalformedResponse(_)
        ));
    }
}
