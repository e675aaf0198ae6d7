//! Entries API endpoints
use api_types::{
    EntryKind as ApiKind, Notice,
    entry::{EntryListResponse, EntryNew, EntryView},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};
use ledger::{Entry, EntryDraft, EntryKind};

fn map_kind(kind: ApiKind) -> EntryKind {
    match kind {
        ApiKind::Income => EntryKind::Income,
        ApiKind::Expense => EntryKind::Expense,
    }
}

fn view_kind(kind: EntryKind) -> ApiKind {
    match kind {
        EntryKind::Income => ApiKind::Income,
        EntryKind::Expense => ApiKind::Expense,
    }
}

pub(crate) fn entry_view(entry: Entry) -> EntryView {
    EntryView {
        id: entry.id,
        title: entry.title,
        amount_cents: entry.amount.cents(),
        category: entry.category,
        kind: view_kind(entry.kind),
        date: entry.date,
    }
}

/// Validate the raw payload into a draft. Malformed amounts and dates come
/// back as 422s, never as process faults.
fn parse_draft(payload: EntryNew) -> Result<EntryDraft, ServerError> {
    Ok(EntryDraft {
        title: payload.title,
        amount: payload.amount.parse()?,
        category: payload.category,
        kind: map_kind(payload.kind),
        date: ledger::parse_date(&payload.date)?,
    })
}

pub async fn add(
    Extension(user): Extension<ledger::User>,
    State(state): State<ServerState>,
    Json(payload): Json<EntryNew>,
) -> Result<(StatusCode, Json<Notice>), ServerError> {
    let draft = parse_draft(payload)?;
    let kind = draft.kind;

    state.ledger.add_entry(&user.username, draft).await?;

    let message = match kind {
        EntryKind::Income => "Income added successfully!",
        EntryKind::Expense => "Expense added successfully!",
    };
    Ok((
        StatusCode::CREATED,
        Json(Notice {
            message: message.to_string(),
        }),
    ))
}

/// All of the user's entries, newest date first.
pub async fn view(
    Extension(user): Extension<ledger::User>,
    State(state): State<ServerState>,
) -> Result<Json<EntryListResponse>, ServerError> {
    let entries = state.ledger.entries_by_date_desc(&user.username).await?;

    Ok(Json(EntryListResponse {
        entries: entries.into_iter().map(entry_view).collect(),
    }))
}

/// Single entry for the edit form. 404 for unknown ids, 403 for entries
/// owned by someone else.
pub async fn edit_get(
    Extension(user): Extension<ledger::User>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryView>, ServerError> {
    let entry = state.ledger.entry(id, &user.username).await?;
    Ok(Json(entry_view(entry)))
}

pub async fn edit_post(
    Extension(user): Extension<ledger::User>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryNew>,
) -> Result<Json<Notice>, ServerError> {
    let draft = parse_draft(payload)?;
    state.ledger.update_entry(id, &user.username, draft).await?;

    Ok(Json(Notice {
        message: "Entry updated successfully!".to_string(),
    }))
}

pub async fn delete(
    Extension(user): Extension<ledger::User>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notice>, ServerError> {
    state.ledger.delete_entry(id, &user.username).await?;

    Ok(Json(Notice {
        message: "Entry deleted successfully!".to_string(),
    }))
}
