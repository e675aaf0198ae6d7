use axum::{Json, http::StatusCode, response::IntoResponse};
use ledger::LedgerError;

use serde::Serialize;
pub use server::{ServerState, app, run, run_with_listener, spawn_with_listener};

mod dashboard;
mod entries;
mod server;
mod session;
mod user;

pub mod types {
    pub mod user {
        pub use api_types::user::{LoginUser, RegisterUser, Session};
    }

    pub mod entry {
        pub use api_types::EntryKind;
        pub use api_types::entry::{EntryListResponse, EntryNew, EntryView};
    }

    pub mod dashboard {
        pub use api_types::dashboard::DashboardResponse;
    }

    pub use api_types::Notice;
}

pub enum ServerError {
    Ledger(LedgerError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::DuplicateUsername(_) => StatusCode::CONFLICT,
        LedgerError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        LedgerError::EntryNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::Unauthorized(_) => StatusCode::FORBIDDEN,
        LedgerError::InvalidAmount(_) | LedgerError::InvalidDate(_) | LedgerError::InvalidKind(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        LedgerError::PasswordHash(_) | LedgerError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_ledger_error(err: LedgerError) -> String {
    match err {
        LedgerError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        LedgerError::PasswordHash(hash_err) => {
            tracing::error!("password hash error: {hash_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Ledger(err) => (status_for_ledger_error(&err), message_for_ledger_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}
