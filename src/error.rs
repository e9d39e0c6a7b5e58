use std::io;
use std::time::Duration;

use hyper::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("HTTP transport error: {0}")]
    Hyper(#[from] hyper::Error),
    #[error("unable to build request: {0}")]
    Http(#[from] hyper::http::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("base URL must use http or https")]
    InvalidUrl,
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("unexpected response status: {0}")]
    Status(StatusCode),
    #[error("unable to parse team members: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown timezone '{0}'")]
    Timezone(String),
}
