use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use std::sync::Arc;

use crate::{dashboard, entries, session::Sessions, user};
use ledger::Ledger;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
    pub sessions: Sessions,
}

/// Resolves the bearer token to a user and stashes it in the request
/// extensions. Requests without a live session stop here with 401.
async fn auth(
    auth_header: Option<TypedHeader<Authorization<Bearer>>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(auth_header) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    let Some(username) = state.sessions.resolve(auth_header.token()).await else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    request.extensions_mut().insert(ledger::User { username });
    Ok(next.run(request).await)
}

fn router(state: ServerState) -> Router {
    let protected = Router::new()
        .route("/logout", get(user::logout))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/add", post(entries::add))
        .route("/view", get(entries::view))
        .route("/delete/{id}", get(entries::delete))
        .route("/edit/{id}", get(entries::edit_get).post(entries::edit_post))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route("/register", post(user::register))
        .route("/login", post(user::login))
        .merge(protected)
        .with_state(state)
}

pub async fn run(ledger: Ledger) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(ledger, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        ledger: Arc::new(ledger),
        sessions: Sessions::default(),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

/// Build the application router with fresh state, without binding a
/// listener. Integration tests drive this directly with `tower::Service`.
pub fn app(ledger: Ledger) -> Router {
    router(ServerState {
        ledger: Arc::new(ledger),
        sessions: Sessions::default(),
    })
}
