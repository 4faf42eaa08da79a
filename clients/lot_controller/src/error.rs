use thiserror::Error;

use crate::lot::{ListingStatus, UnknownStatus};

pub type Result<T> = std::result::Result<T, ControllerError>;

/// Failures reported by a ledger authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorityError {
    #[error("lot {0} not found")]
    NotFound(u32),
    #[error("insufficient payment: {0}")]
    InsufficientPayment(String),
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("authority unreachable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),
}

/// Failures reported by a content store.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content store unreachable: {0}")]
    Unavailable(String),
    #[error("no content at {0}")]
    NotFound(String),
    #[error("malformed metadata document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("lot {index} is {status}")]
    InvalidState { index: u32, status: ListingStatus },
    #[error("insufficient payment: {0}")]
    InsufficientPayment(String),
    #[error("rent on lot {index} runs until {return_day}")]
    RentNotExpired { index: u32, return_day: u64 },
    #[error("external service unavailable: {0}")]
    ExternalUnavailable(String),
    #[error("rejected by ledger authority: {0}")]
    Rejected(String),
    #[error("lot {0} not found")]
    NotFound(u32),
}

impl From<AuthorityError> for ControllerError {
    fn from(value: AuthorityError) -> Self {
        match value {
            AuthorityError::NotFound(index) => ControllerError::NotFound(index),
            AuthorityError::InsufficientPayment(reason) => {
                ControllerError::InsufficientPayment(reason)
            }
            AuthorityError::Rejected(reason) => ControllerError::Rejected(reason),
            AuthorityError::Unavailable(reason) => ControllerError::ExternalUnavailable(reason),
            AuthorityError::UnknownStatus(err) => ControllerError::Rejected(err.to_string()),
        }
    }
}

impl From<ContentError> for ControllerError {
    fn from(value: ContentError) -> Self {
        ControllerError::ExternalUnavailable(value.to_string())
    }
}
