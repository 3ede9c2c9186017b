// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session context: current user and token pair.
//!
//! The session is created once by [`crate::App`] and shared by reference
//! with every view-model. It owns the only code paths that mutate tokens:
//! - `login` installs a fresh pair
//! - `refresh_access_token` rotates or clears it
//! - `logout` always returns to the logged-out state
//! - `authorized` retries a rejected call once after a refresh

use crate::error::{ClientError, Result};
use crate::models::User;
use crate::services::{ApiGateway, AuthApi};
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Persisted key for the access token.
pub const TOKEN_KEY: &str = "token";
/// Persisted key for the serialized user.
pub const USER_KEY: &str = "user";

/// Key-value storage for values that outlive the process.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, used by default and in tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: DashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    LoggedOut,
    LoggedIn,
}

/// Snapshot of the session's data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl SessionState {
    /// Logged in means an access token is held; a user always accompanies it.
    pub fn status(&self) -> SessionStatus {
        if self.access_token.is_some() && self.user.is_some() {
            SessionStatus::LoggedIn
        } else {
            SessionStatus::LoggedOut
        }
    }
}

/// Shared session object.
pub struct Session {
    gateway: ApiGateway,
    auth: AuthApi,
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
    /// Serializes refreshes so concurrent 401s rotate the token only once.
    refresh_lock: Mutex<()>,
}

impl Session {
    pub fn new(gateway: ApiGateway, store: Arc<dyn TokenStore>) -> Self {
        Self {
            auth: AuthApi::new(gateway.clone()),
            gateway,
            store,
            state: RwLock::new(SessionState::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn auth_api(&self) -> &AuthApi {
        &self.auth
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn status(&self) -> SessionStatus {
        self.state.read().await.status()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.status().await == SessionStatus::LoggedIn
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.state.read().await.access_token.clone()
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.state.read().await.refresh_token.clone()
    }

    /// Log in. Returns true only when the backend issued both tokens.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let response = match self.auth.login(email, password).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Login request failed");
                return false;
            }
        };

        let Some((access, refresh)) = response.token_pair() else {
            tracing::info!("Login rejected: response carried no token pair");
            return false;
        };

        let user = response.user.clone().unwrap_or_else(|| User {
            email: email.trim().to_string(),
            ..User::default()
        });

        {
            let mut state = self.state.write().await;
            *state = SessionState {
                user: Some(user.clone()),
                access_token: Some(access.to_string()),
                refresh_token: Some(refresh.to_string()),
            };
        }

        self.gateway.set_auth_token(Some(access));
        self.persist(access, &user);
        tracing::info!(user_id = %user.id, "Logged in");
        true
    }

    /// Rotate the access token.
    ///
    /// Without a refresh token this returns false and makes no request. A
    /// failed refresh clears both tokens.
    pub async fn refresh_access_token(&self) -> bool {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Refresh body; caller holds `refresh_lock`.
    async fn refresh_locked(&self) -> bool {
        let Some(refresh_token) = self.refresh_token().await else {
            return false;
        };

        let rotated = match self.auth.refresh(&refresh_token).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Token refresh failed, clearing tokens");
                self.clear_tokens().await;
                return false;
            }
        };

        let Some(access) = rotated.access_token.filter(|t| !t.is_empty()) else {
            tracing::warn!("Refresh response had no access token, clearing tokens");
            self.clear_tokens().await;
            return false;
        };

        let user = {
            let mut state = self.state.write().await;
            state.access_token = Some(access.clone());
            if let Some(new_refresh) = rotated.refresh_token.filter(|t| !t.is_empty()) {
                state.refresh_token = Some(new_refresh);
            }
            state.user.clone()
        };

        self.gateway.set_auth_token(Some(&access));
        if let Some(user) = user {
            self.persist(&access, &user);
        }
        tracing::info!("Access token refreshed");
        true
    }

    /// Log out. Always ends logged out, even if the backend call fails.
    pub async fn logout(&self) {
        let (access, refresh) = {
            let state = self.state.read().await;
            (state.access_token.clone(), state.refresh_token.clone())
        };

        if let Some(access) = access {
            if let Err(e) = self.auth.logout(&access, refresh.as_deref()).await {
                tracing::warn!(error = %e, "Logout error");
            }
        }

        *self.state.write().await = SessionState::default();
        self.gateway.set_auth_token(None);
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        tracing::info!("Logged out");
    }

    /// Reload a persisted access token and user from the store.
    ///
    /// The refresh token is never persisted, so a restored session cannot
    /// refresh. Its first rejected call ends the session.
    pub async fn restore(&self) -> bool {
        let (Some(token), Some(raw_user)) = (self.store.get(TOKEN_KEY), self.store.get(USER_KEY))
        else {
            return false;
        };

        let user: User = match serde_json::from_str(&raw_user) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable persisted user");
                self.store.remove(TOKEN_KEY);
                self.store.remove(USER_KEY);
                return false;
            }
        };

        *self.state.write().await = SessionState {
            user: Some(user),
            access_token: Some(token.clone()),
            refresh_token: None,
        };
        self.gateway.set_auth_token(Some(&token));
        true
    }

    /// Run an authenticated call with the current access token.
    ///
    /// If the backend answers 401, refresh once and retry once with the new
    /// token. Without a session the call is not made.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> Result<T>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let token = self
            .access_token()
            .await
            .ok_or(ClientError::NotAuthenticated)?;

        match call(token.clone()).await {
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Access token rejected, attempting refresh");
                let fresh = self.refresh_after_rejection(&token).await?;
                call(fresh).await
            }
            other => other,
        }
    }

    /// New access token after `rejected` failed, refreshing at most once.
    ///
    /// If no new token can be had, the rejected one is dead: tokens are
    /// cleared so the session reads as logged out.
    async fn refresh_after_rejection(&self, rejected: &str) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;

        // Another task may have refreshed while we were waiting.
        match self.access_token().await {
            Some(current) if current != rejected => return Ok(current),
            None => return Err(ClientError::Unauthorized),
            Some(_) => {}
        }

        if !self.refresh_locked().await {
            tracing::warn!("Rejected token could not be refreshed, ending session");
            self.clear_tokens().await;
            return Err(ClientError::Unauthorized);
        }
        self.access_token().await.ok_or(ClientError::Unauthorized)
    }

    async fn clear_tokens(&self) {
        {
            let mut state = self.state.write().await;
            state.access_token = None;
            state.refresh_token = None;
        }
        self.gateway.set_auth_token(None);
        self.store.remove(TOKEN_KEY);
    }

    fn persist(&self, access: &str, user: &User) {
        self.store.set(TOKEN_KEY, access);
        match serde_json::to_string(user) {
            Ok(raw) => self.store.set(USER_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "Failed to persist user"),
        }
    }
}
