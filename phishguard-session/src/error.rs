use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("WebDriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    #[error("Failed to start WebDriver session: {0}")]
    Connect(#[from] fantoccini::error::NewSessionError),

    #[error("No element matches selector: {0}")]
    ElementNotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
