//! Dashboard API endpoint

use api_types::dashboard::DashboardResponse;
use axum::{Extension, Json, extract::State};

use crate::{ServerError, entries::entry_view, server::ServerState};

/// Handle requests for the user's dashboard: every entry plus totals and the
/// per-category expense breakdown, as parallel label/value sequences.
pub async fn get_dashboard(
    Extension(user): Extension<ledger::User>,
    State(state): State<ServerState>,
) -> Result<Json<DashboardResponse>, ServerError> {
    let (entries, summary) = state.ledger.dashboard(&user.username).await?;

    let (category_labels, category_values) = summary
        .categories
        .into_iter()
        .map(|c| (c.label, c.total.cents()))
        .unzip();

    Ok(Json(DashboardResponse {
        entries: entries.into_iter().map(entry_view).collect(),
        total_income_cents: summary.total_income.cents(),
        total_expense_cents: summary.total_expense.cents(),
        net_balance_cents: summary.net_balance.cents(),
        category_labels,
        category_values,
    }))
}
