// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View lifetime tracking and load state.
//!
//! A [`ViewScope`] lives as long as the screen is mounted. Fetches started
//! for the screen hold a [`ViewGuard`]; a response that arrives after the
//! scope is unmounted or dropped is discarded instead of applied.

use crate::error::{load_failure_message, Result};
use std::future::Future;
use tokio::sync::watch;

/// Load state of a screen's data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Fixed user-facing message
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Idle | Loadable::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Settle a fetch result. Any error becomes "Failed to load {resource}".
    pub fn from_result(result: Result<T>, resource: &str) -> Self {
        match result {
            Ok(data) => Loadable::Loaded(data),
            Err(e) => {
                tracing::warn!(resource, error = %e, "Fetch failed");
                Loadable::Failed(load_failure_message(resource))
            }
        }
    }
}

/// Owned by a mounted screen. Unmounting cancels its guards.
pub struct ViewScope {
    mounted: watch::Sender<bool>,
}

impl ViewScope {
    pub fn mount() -> Self {
        let (mounted, _) = watch::channel(true);
        Self { mounted }
    }

    pub fn guard(&self) -> ViewGuard {
        ViewGuard {
            mounted: self.mounted.subscribe(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        *self.mounted.borrow()
    }

    pub fn unmount(&self) {
        self.mounted.send_replace(false);
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.mounted.send_replace(false);
    }
}

/// Handed to fetches started by a screen.
#[derive(Clone)]
pub struct ViewGuard {
    mounted: watch::Receiver<bool>,
}

impl ViewGuard {
    /// True while the owning scope is mounted and alive.
    pub fn is_alive(&self) -> bool {
        self.mounted.has_changed().is_ok() && *self.mounted.borrow()
    }

    /// Resolves once the owning scope unmounts or is dropped.
    pub async fn cancelled(&self) {
        let mut rx = self.mounted.clone();
        // wait_for returns Err once the sender is gone
        let _ = rx.wait_for(|mounted| !*mounted).await;
    }
}

/// Await `fut`, returning `None` if the view unmounted first.
pub async fn run_guarded<F: Future>(guard: &ViewGuard, fut: F) -> Option<F::Output> {
    tokio::select! {
        out = fut => guard.is_alive().then_some(out),
        _ = guard.cancelled() => None,
    }
}

/// Fetch into `state`. Returns false, leaving `state` as `Loading`, if the
/// view unmounted before the response arrived.
pub async fn load_into<T, F>(
    state: &mut Loadable<T>,
    guard: &ViewGuard,
    resource: &str,
    fetch: F,
) -> bool
where
    F: Future<Output = Result<T>>,
{
    *state = Loadable::Loading;
    match run_guarded(guard, fetch).await {
        Some(result) => {
            *state = Loadable::from_result(result, resource);
            true
        }
        None => {
            tracing::debug!(resource, "View unmounted during fetch");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_guarded_result_applied_while_mounted() {
        let scope = ViewScope::mount();
        let out = run_guarded(&scope.guard(), async { 7 }).await;
        assert_eq!(out, Some(7));
    }

    #[tokio::test]
    async fn test_late_result_dropped_after_unmount() {
        let scope = ViewScope::mount();
        let guard = scope.guard();

        let slow = tokio::spawn(async move {
            run_guarded(&guard, async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                "late"
            })
            .await
        });

        scope.unmount();
        assert_eq!(slow.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_drop_cancels_guard() {
        let scope = ViewScope::mount();
        let guard = scope.guard();
        assert!(guard.is_alive());

        drop(scope);
        assert!(!guard.is_alive());
        assert_eq!(run_guarded(&guard, async { 1 }).await, None);
    }

    #[tokio::test]
    async fn test_load_into_failure_uses_fixed_message() {
        let scope = ViewScope::mount();
        let mut state: Loadable<u8> = Loadable::Idle;
        let applied = load_into(&mut state, &scope.guard(), "profile", async {
            Err(crate::error::ClientError::Network("connection refused".to_string()))
        })
        .await;
        assert!(applied);
        assert_eq!(state.error(), Some("Failed to load profile"));
    }

    #[tokio::test]
    async fn test_load_into_after_unmount_leaves_loading() {
        let scope = ViewScope::mount();
        let guard = scope.guard();
        scope.unmount();

        let mut state: Loadable<u8> = Loadable::Idle;
        assert!(!load_into(&mut state, &guard, "profile", async { Ok(5) }).await);
        assert_eq!(state, Loadable::Loading);
    }

    #[test]
    fn test_loadable_accessors() {
        let idle: Loadable<u8> = Loadable::default();
        assert!(idle.is_loading());

        let loaded = Loadable::Loaded(3u8);
        assert_eq!(loaded.data(), Some(&3));
        assert!(loaded.error().is_none());

        let failed: Loadable<u8> = Loadable::Failed("Failed to load x".to_string());
        assert_eq!(failed.error(), Some("Failed to load x"));
        assert!(!failed.is_loading());
    }
}
