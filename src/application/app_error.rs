use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Email already exists in waitlist")]
    DuplicateEmail,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    DuplicateEmail,
    StorageError,
    InvalidInput,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
