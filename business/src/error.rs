use thiserror::Error;

use crate::http::HttpError;

/// Shown when the backend answers with a non-2xx status.
pub const NETWORK_ERROR_MESSAGE: &str = "Network response was not ok";

/// Shown when the payload decodes but carries no header row.
pub const UNPROCESSABLE_MESSAGE: &str = "Unable to process PDF content";

/// Fallback for failures that carry no description of their own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Everything that can go wrong while loading the substances table.
///
/// The `Display` text of each variant is what the error panel shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    NetworkStatus(u16),
    /// The request never produced a response (connection refused, DNS, CORS...).
    #[error("{0}")]
    Transport(String),
    /// The body was not JSON, or not the shape the schema expects.
    #[error("{0}")]
    Decode(String),
    #[error("{}", UNPROCESSABLE_MESSAGE)]
    Unprocessable,
}

impl LoadError {
    /// The single human-readable message stored as the viewer's error state.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_owned()
        } else {
            message
        }
    }
}

impl From<HttpError> for LoadError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_error_panel_text() {
        assert_eq!(
            LoadError::NetworkStatus(500).user_message(),
            "Network response was not ok"
        );
        assert_eq!(
            LoadError::Unprocessable.user_message(),
            "Unable to process PDF content"
        );
    }

    #[test]
    fn transport_and_decode_surface_their_own_description() {
        assert_eq!(
            LoadError::Transport("connection refused".to_owned()).user_message(),
            "connection refused"
        );

        let decode = serde_json::from_str::<serde_json::Value>("not json")
            .map_err(LoadError::from)
            .expect_err("invalid JSON must fail");
        assert!(matches!(decode, LoadError::Decode(_)));
        assert!(decode.user_message().contains("expected ident"));
    }

    #[test]
    fn blank_description_falls_back_to_unknown() {
        assert_eq!(
            LoadError::Transport(String::new()).user_message(),
            UNKNOWN_ERROR_MESSAGE
        );
        assert_eq!(
            LoadError::Decode("  ".to_owned()).user_message(),
            UNKNOWN_ERROR_MESSAGE
        );
    }
}
