// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! EduTrack Mobile: client core for the EduTrack parent app
//!
//! This crate provides the typed backend client, the session that owns the
//! tokens, and the per-screen view-models the UI renders.

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;
pub mod viewmodels;

use config::Config;
use error::Result;
use navigation::{Navigator, Route};
use services::{ApiGateway, MobileApi, Session, TokenStore};
use std::sync::Arc;
use viewmodels::settings::SettingsViewModel;
use viewmodels::ScreenContext;

/// Application root. Built once at startup; owns the session and routing.
pub struct App {
    pub config: Config,
    pub gateway: ApiGateway,
    pub session: Arc<Session>,
    pub mobile: MobileApi,
    pub navigator: Navigator,
    /// App-wide preferences, language, and theme override
    pub settings: SettingsViewModel,
}

impl App {
    pub fn new(config: Config, store: Arc<dyn TokenStore>) -> Result<Self> {
        let gateway = ApiGateway::new(&config)?;
        let session = Arc::new(Session::new(gateway.clone(), store));
        let mobile = MobileApi::new(gateway.clone());

        Ok(Self {
            config,
            gateway,
            session,
            mobile,
            navigator: Navigator::default(),
            settings: SettingsViewModel::default(),
        })
    }

    pub fn screen_context(&self) -> ScreenContext {
        ScreenContext::new(self.session.clone(), self.mobile.clone())
    }

    /// Restore a persisted session and pick the first screen.
    pub async fn start(&mut self) -> Route {
        let root = if self.session.restore().await {
            Route::Dashboard
        } else {
            Route::Login
        };
        self.navigator.reset(root);
        tracing::info!(route = %root, "App started");
        root
    }

    /// Log in and land on the dashboard. Failed logins stay put.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        if !self.session.login(email, password).await {
            return false;
        }
        self.navigator.replace(Route::Dashboard, true);
        true
    }

    /// End the session and return to the login screen.
    pub async fn logout(&mut self) {
        self.session.logout().await;
        self.navigator.reset(Route::Login);
    }

    /// Navigate to `route`. The logout route ends the session.
    pub async fn navigate(&mut self, route: Route) -> Route {
        if route == Route::Logout {
            self.logout().await;
            return self.navigator.current();
        }
        let logged_in = self.session.is_logged_in().await;
        self.navigator.push(route, logged_in)
    }
}
