//! In-process session store.
//!
//! Login issues an opaque bearer token bound to a username; logout revokes
//! it. Tokens live only as long as the process.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct Sessions {
    tokens: Arc<RwLock<HashMap<String, String>>>,
}

impl Sessions {
    /// Issue a fresh token for `username`.
    pub async fn issue(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .await
            .insert(token.clone(), username.to_string());
        token
    }

    /// Resolve a token to its username, if the session is live.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.read().await.get(token).cloned()
    }

    /// Drop a session. Revoking an unknown token is a no-op.
    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issue_resolve_revoke() {
        let sessions = Sessions::default();

        let token = sessions.issue("alice").await;
        assert_eq!(sessions.resolve(&token).await.as_deref(), Some("alice"));

        sessions.revoke(&token).await;
        assert_eq!(sessions.resolve(&token).await, None);
    }

    #[tokio::test]
    async fn tokens_are_unique_per_login() {
        let sessions = Sessions::default();
        let a = sessions.issue("alice").await;
        let b = sessions.issue("alice").await;
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let sessions = Sessions::default();
        assert_eq!(sessions.resolve("nope").await, None);
    }
}
