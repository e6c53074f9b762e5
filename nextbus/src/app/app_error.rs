use crate::feed::FeedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NextbusAppError {
    #[error("failure running feed command: {source}")]
    FeedError {
        #[from]
        source: FeedError,
    },
    #[error("failure encoding output as JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
