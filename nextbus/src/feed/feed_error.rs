use super::FeedCommand;

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("invalid feed client configuration: {0}")]
    ConfigurationError(String),
    #[error("request to {url} failed: {message}")]
    NetworkError {
        url: String,
        /// set when the server answered with a non-success status
        status: Option<u16>,
        message: String,
    },
    #[error("failure decoding {command} response: {source}")]
    DecodeError {
        command: FeedCommand,
        source: serde_json::Error,
    },
    #[error("{command} request rejected by the feed service: {message}")]
    ServiceError {
        command: FeedCommand,
        message: String,
        should_retry: bool,
    },
}

impl FeedError {
    pub fn is_network_error(&self) -> bool {
        matches!(self, FeedError::NetworkError { .. })
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, FeedError::DecodeError { .. })
    }
}
