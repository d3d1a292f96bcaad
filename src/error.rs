use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitlocError>;

#[derive(Error, Debug)]
pub enum GitlocError {
    #[error("Git error: {0}")]
    Git(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Change summary line before any commit date")]
    SummaryBeforeDate,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
