// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth endpoint fetchers.
//!
//! Each method performs exactly one request. Session bookkeeping lives in
//! [`crate::services::session`]; this layer only talks to the backend.

use crate::error::Result;
use crate::models::auth::RefreshTokenBody;
use crate::models::{
    LoginRequest, LoginResponse, RefreshResponse, RegisterForm, RegisterRequest,
    UserProfileLookup,
};
use crate::services::gateway::{ApiGateway, Auth};
use validator::Validate;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REFRESH_PATH: &str = "/api/auth/refresh-token";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const USER_PROFILE_PATH: &str = "/api/mobile/user-profile";

/// Auth API client.
#[derive(Clone)]
pub struct AuthApi {
    gateway: ApiGateway,
}

impl AuthApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Exchange credentials for an access/refresh token pair. Sent without
    /// an `Authorization` header.
    ///
    /// A rejected login may still answer 2xx with no tokens; callers check
    /// [`LoginResponse::token_pair`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        tracing::info!(email = %body.email, "Logging in");
        self.gateway.post_json(LOGIN_PATH, &body, Auth::None).await
    }

    /// Rotate the access token. The rejected access token is not sent.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse> {
        let body = RefreshTokenBody {
            refresh_token: refresh_token.to_string(),
        };
        self.gateway.post_json(REFRESH_PATH, &body, Auth::None).await
    }

    /// Invalidate the session server-side.
    pub async fn logout(&self, access_token: &str, refresh_token: Option<&str>) -> Result<()> {
        let body = RefreshTokenBody {
            refresh_token: refresh_token.unwrap_or_default().to_string(),
        };
        self.gateway
            .post_unit(LOGOUT_PATH, &body, Auth::Bearer(access_token))
            .await
    }

    /// Validate the sign-up form and create a parent account.
    pub async fn register(&self, form: &RegisterForm) -> Result<serde_json::Value> {
        form.validate()?;
        let body = RegisterRequest::from(form);
        tracing::info!(email = %body.email, "Registering parent account");
        self.gateway.post_json(REGISTER_PATH, &body, Auth::Shared).await
    }

    /// Look up an existing school record by email before registration.
    pub async fn user_profile_by_email(&self, email: &str) -> Result<UserProfileLookup> {
        let query = [("email", email.trim().to_string())];
        self.gateway
            .get_json(USER_PROFILE_PATH, &query, Auth::Shared)
            .await
    }
}
