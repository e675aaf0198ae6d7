//! The module contains the errors the ledger can throw.
//!
//! The errors are:
//!
//! - [`DuplicateUsername`] thrown when registering an already taken username.
//! - [`EntryNotFound`] thrown when an entry id resolves to nothing.
//! - [`Unauthorized`] thrown when an entry belongs to another user.
//!
//!  [`DuplicateUsername`]: LedgerError::DuplicateUsername
//!  [`EntryNotFound`]: LedgerError::EntryNotFound
//!  [`Unauthorized`]: LedgerError::Unauthorized
use sea_orm::DbErr;
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("username \"{0}\" already taken")]
    DuplicateUsername(String),
    /// Unknown user and wrong password map to this same variant.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("entry \"{0}\" not found")]
    EntryNotFound(String),
    #[error("entry \"{0}\" belongs to another user")]
    Unauthorized(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid kind: {0}")]
    InvalidKind(String),
    #[error("password hash error: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateUsername(a), Self::DuplicateUsername(b)) => a == b,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::EntryNotFound(a), Self::EntryNotFound(b)) => a == b,
            (Self::Unauthorized(a), Self::Unauthorized(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::PasswordHash(a), Self::PasswordHash(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
