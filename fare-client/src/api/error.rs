//! Fare service error types.

/// Errors that can occur when talking to the fare service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl ApiError {
    /// The message shown to the user when a fare calculation fails.
    ///
    /// Error-status responses surface the server's message (or the generic
    /// status line synthesized when the body carried none). Transport and
    /// decode failures collapse to a retry prompt rather than exposing
    /// internals.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Http(_) | ApiError::Json { .. } => {
                "Failed to calculate fare. Please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ApiError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");
    }

    #[test]
    fn api_error_user_message_passes_server_message_through() {
        let err = ApiError::Api {
            status: 400,
            message: "Invalid bus type".into(),
        };
        assert_eq!(err.user_message(), "Invalid bus type");
    }

    #[test]
    fn json_error_user_message_is_generic() {
        let err = ApiError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.user_message(), "Failed to calculate fare. Please try again.");
    }
}
