use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Http: {}", .0)]
    Http(#[from] reqwest::Error),

    #[error("Json: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error("Url: {}", .0)]
    Url(#[from] url::ParseError),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),
}
