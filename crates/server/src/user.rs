//! Account API endpoints: register, login, logout.

use api_types::{
    Notice,
    user::{LoginUser, RegisterUser, Session},
};
use axum::{Json, extract::State, http::StatusCode};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{ServerError, server::ServerState};

/// Create an account. 409 when the username is already taken.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterUser>,
) -> Result<(StatusCode, Json<Notice>), ServerError> {
    state
        .ledger
        .register(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Notice {
            message: "Account created! You can now log in.".to_string(),
        }),
    ))
}

/// Authenticate and open a session. The response token authenticates every
/// protected route until logout.
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginUser>,
) -> Result<Json<Session>, ServerError> {
    let user = state
        .ledger
        .authenticate(&payload.username, &payload.password)
        .await?;

    let token = state.sessions.issue(&user.username).await;
    Ok(Json(Session { token }))
}

/// Close the current session; the token stops resolving immediately.
pub async fn logout(
    auth_header: TypedHeader<Authorization<Bearer>>,
    State(state): State<ServerState>,
) -> Result<Json<Notice>, ServerError> {
    state.sessions.revoke(auth_header.token()).await;

    Ok(Json(Notice {
        message: "Logged out.".to_string(),
    }))
}
