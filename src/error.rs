use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToastError {
    #[error("invalid duration '{0}': expected a number of seconds")]
    InvalidDuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
