//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // API Errors
    // ─────────────────────────────────────────────────────────────
    /// The request was rejected, timed out, or answered with a non-2xx status.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The response body did not match the expected record shape.
    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    /// The detail screen was opened without a launch identifier.
    #[error("No launch identifier was provided to the {screen} screen")]
    NavigationParamMissing { screen: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn malformed(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn navigation_param_missing(screen: impl Into<String>) -> Self {
        Self::NavigationParamMissing {
            screen: screen.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Check if retrying the failed fetch can succeed
    ///
    /// A missing launch id or a bad base URL fails the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Network { .. } | Error::MalformedResponse { .. } | Error::Io(_)
        )
    }

    /// Short label for the error category, used as the error panel title
    pub fn kind_label(&self) -> &'static str {
        match self {
            Error::Network { .. } => "Network error",
            Error::MalformedResponse { .. } | Error::Json(_) => "Unexpected response",
            Error::NavigationParamMissing { .. } => "Missing launch",
            Error::Config { .. } | Error::ConfigInvalid { .. } => "Configuration error",
            _ => "Error",
        }
    }
}

// `LoadState` keeps errors next to the data it renders and the TEA state is
// cloned in tests, so errors need to be cloneable. Foreign sources are
// flattened to their message.
impl Clone for Error {
    fn clone(&self) -> Self {
        match self {
            Error::Io(e) => Error::Io(std::io::Error::new(e.kind(), e.to_string())),
            Error::Json(e) => Error::malformed("json", e.to_string()),
            Error::Terminal { message } => Error::terminal(message.clone()),
            Error::TerminalInit(m) => Error::TerminalInit(m.clone()),
            Error::Network { message } => Error::network(message.clone()),
            Error::MalformedResponse { endpoint, message } => {
                Error::malformed(endpoint.clone(), message.clone())
            }
            Error::NavigationParamMissing { screen } => {
                Error::navigation_param_missing(screen.clone())
            }
            Error::Config { message } => Error::config(message.clone()),
            Error::ConfigInvalid { message } => Error::config_invalid(message.clone()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = Error::malformed("/v4/launches/abc", "missing field `cores`");
        assert_eq!(
            err.to_string(),
            "Malformed response from /v4/launches/abc: missing field `cores`"
        );
    }

    #[test]
    fn test_navigation_param_missing_mentions_screen() {
        let err = Error::navigation_param_missing("Launch Details");
        assert!(err.to_string().contains("Launch Details"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(Error::network("timeout").is_retryable());
        assert!(Error::malformed("/v4/launchpads", "not an array").is_retryable());
    }

    #[test]
    fn test_deterministic_errors_are_not_retryable() {
        assert!(!Error::navigation_param_missing("Second").is_retryable());
        assert!(!Error::config_invalid("bad url").is_retryable());
        assert!(!Error::TerminalInit("no tty".into()).is_retryable());
    }

    #[test]
    fn test_context_passes_error_through() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("Failed to open log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let result: Result<()> = Err(Error::network("offline"));
        let err = result
            .with_context(|| format!("GET {}", "/v4/launchpads"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Network error: offline");
    }

    #[test]
    fn test_clone_preserves_message() {
        let err = Error::malformed("/v4/launchpads", "expected array");
        assert_eq!(err.clone().to_string(), err.to_string());

        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(io.clone().to_string().contains("disk"));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Error::network("x").kind_label(), "Network error");
        assert_eq!(Error::malformed("a", "b").kind_label(), "Unexpected response");
        assert_eq!(
            Error::navigation_param_missing("Second").kind_label(),
            "Missing launch"
        );
    }
}
