use thiserror::Error;

use crate::domain::entities::waitlist_entry::DuplicateField;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Already on the waitlist ({0})")]
    Duplicate(DuplicateField),

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    DatabaseError,
    InvalidInput,
    AlreadyOnWaitlist,
    OriginNotAllowed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::AlreadyOnWaitlist => "ALREADY_ON_WAITLIST",
            ErrorCode::OriginNotAllowed => "ORIGIN_NOT_ALLOWED",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
