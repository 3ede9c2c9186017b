// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared HTTP client for every backend call.
//!
//! Holds the base URL and a default `Authorization` slot that the session
//! overwrites on login and clears on logout. Every request names its
//! [`Auth`] mode: no header, the shared slot, or an explicit bearer token.

use crate::config::Config;
use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Which `Authorization` header a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth<'a> {
    /// No header, even when the shared slot holds a token
    None,
    /// Whatever the shared slot holds, if anything
    Shared,
    Bearer(&'a str),
}

/// Configured HTTP client plus the bearer-token slot.
#[derive(Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
    auth_token: Arc<RwLock<Option<String>>>,
}

impl ApiGateway {
    /// Build the shared client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Internal(anyhow::anyhow!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the default bearer token. Last caller wins.
    pub fn set_auth_token(&self, token: Option<&str>) {
        let mut slot = self
            .auth_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = token.filter(|t| !t.is_empty()).map(str::to_string);
        tracing::debug!(present = slot.is_some(), "Default auth token updated");
    }

    /// Token currently installed in the default slot.
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, auth: Auth<'_>) -> Option<String> {
        match auth {
            Auth::None => None,
            Auth::Shared => self.auth_token(),
            Auth::Bearer(token) => Some(token.to_string()),
        }
    }

    fn request(&self, method: Method, path: &str, auth: Auth<'_>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.bearer(auth) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: Auth<'_>,
    ) -> Result<T> {
        let response = self
            .request(Method::GET, path, auth)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check_response_json(path, response).await
    }

    /// POST a JSON body and parse a JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: Auth<'_>,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, path, auth)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check_response_json(path, response).await
    }

    /// POST a JSON body, ignoring whatever the backend answers.
    pub async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Auth<'_>,
    ) -> Result<()> {
        let response = self
            .request(Method::POST, path, auth)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check_response(path, response).await
    }
}

/// Check response status and return error if not successful.
async fn check_response(path: &str, response: reqwest::Response) -> Result<()> {
    if response.status().is_success() {
        return Ok(());
    }
    Err(status_error(path, response).await)
}

/// Check response and parse JSON body.
async fn check_response_json<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T> {
    if !response.status().is_success() {
        return Err(status_error(path, response).await);
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!(path, error = %e, "Unexpected response shape");
        ClientError::Decode(e.to_string())
    })
}

async fn status_error(path: &str, response: reqwest::Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::UNAUTHORIZED {
        tracing::debug!(path, "Backend rejected bearer token (401)");
        return ClientError::Unauthorized;
    }

    tracing::warn!(path, status = %status, "Backend request failed");
    ClientError::Http { status, body }
}
