use thiserror::Error;

/// Failures reported by the exchange adapter.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Exchange answered with an error status.
    #[error("APIError(code={}): {message}", .code.unwrap_or(0))]
    Api {
        /// HTTP status code
        status: u16,
        /// Binance error code, if the body could be decoded
        code: Option<i64>,
        message: String,
    },

    /// Request could not be built or delivered.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response body could not be understood.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Everything that ends the run with exit code 1.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("Activity log error: {0}")]
    Log(#[from] std::io::Error),
}

impl OrderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        OrderError::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ExchangeError::Api {
            status: 400,
            code: Some(-1121),
            message: "Invalid symbol.".to_string(),
        };
        assert_eq!(err.to_string(), "APIError(code=-1121): Invalid symbol.");
    }

    #[test]
    fn api_error_without_code() {
        let err = ExchangeError::Api {
            status: 502,
            code: None,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "APIError(code=0): Bad Gateway");
    }

    #[test]
    fn exchange_error_is_transparent() {
        let err: OrderError = ExchangeError::Transport("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn log_error_names_the_activity_log() {
        let err: OrderError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.to_string(), "Activity log error: denied");
    }
}
