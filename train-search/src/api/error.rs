//! Trains API error types.

/// Errors from the trains API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The API answered but reported `success: false`
    #[error("API reported failure: {message}")]
    Unsuccessful { message: String },

    /// Mock data could not be loaded
    #[error("mock data error: {message}")]
    Mock { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ApiError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = ApiError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = ApiError::Unsuccessful {
            message: "Invalid station".into(),
        };
        assert_eq!(err.to_string(), "API reported failure: Invalid station");
    }
}
