// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-screen state: fetched data, filter and search selection, and the
//! derived list each screen renders.
//!
//! Screens with a backend endpoint fetch through [`ScreenContext::fetch`],
//! which routes the call through the session so a rejected token is
//! refreshed once. Screens without an endpoint are seeded from
//! [`samples`] or caller-supplied records.

pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod calendar;
pub mod chats;
pub mod child_profile;
pub mod dashboard;
pub mod edit_profile;
pub mod fees;
pub mod filter;
pub mod lifecycle;
pub mod list;
pub mod notifications;
pub mod onboarding;
pub mod results;
pub mod samples;
pub mod settings;
pub mod timetable;

pub use filter::{Filterable, FilterTab, Searchable, ALL};
pub use lifecycle::{run_guarded, Loadable, ViewGuard, ViewScope};
pub use list::{ListView, ListViewModel};

use crate::error::Result;
use crate::services::{MobileApi, Session};
use std::future::Future;
use std::sync::Arc;

/// What every fetched screen needs from the application root.
#[derive(Clone)]
pub struct ScreenContext {
    pub session: Arc<Session>,
    pub mobile: MobileApi,
}

impl ScreenContext {
    pub fn new(session: Arc<Session>, mobile: MobileApi) -> Self {
        Self { session, mobile }
    }

    /// Run a fetcher with the session's access token.
    ///
    /// Fails with `NotAuthenticated` when logged out. The fetcher may be
    /// called twice if the first attempt is rejected and a refresh succeeds.
    pub async fn fetch<T, F, Fut>(&self, call: F) -> Result<T>
    where
        F: Fn(MobileApi, String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.session
            .authorized(|token| call(self.mobile.clone(), token))
            .await
    }
}
