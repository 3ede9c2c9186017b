// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic list screen state: data, filter tab, search box.

use super::filter::{filter_tabs, visible, FilterTab, Filterable, ALL};
use super::lifecycle::{run_guarded, Loadable, ViewGuard};
use crate::error::Result;
use std::future::Future;

/// What a list screen should draw.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Error(&'a str),
    /// Loaded, but nothing survived the filter and search
    Empty(&'a str),
    Items(Vec<&'a T>),
}

impl<'a, T> ListView<'a, T> {
    /// `Items`, or `Empty(message)` when nothing is left to show.
    pub fn from_items(items: Vec<&'a T>, empty_message: &'a str) -> Self {
        if items.is_empty() {
            ListView::Empty(empty_message)
        } else {
            ListView::Items(items)
        }
    }

    pub fn items(&self) -> &[&'a T] {
        match self {
            ListView::Items(items) => items,
            _ => &[],
        }
    }
}

/// State behind one list screen.
#[derive(Debug, Clone)]
pub struct ListViewModel<T> {
    state: Loadable<Vec<T>>,
    selected_filter: String,
    search_query: String,
    /// Noun used in "Failed to load ..."
    resource: &'static str,
    empty_message: &'static str,
}

impl<T: Filterable> ListViewModel<T> {
    /// A list that will be fetched on mount.
    pub fn new(resource: &'static str, empty_message: &'static str) -> Self {
        Self {
            state: Loadable::Idle,
            selected_filter: ALL.to_string(),
            search_query: String::new(),
            resource,
            empty_message,
        }
    }

    /// A list backed by records already in memory.
    pub fn seeded(items: Vec<T>, resource: &'static str, empty_message: &'static str) -> Self {
        Self {
            state: Loadable::Loaded(items),
            ..Self::new(resource, empty_message)
        }
    }

    pub fn state(&self) -> &Loadable<Vec<T>> {
        &self.state
    }

    pub fn selected_filter(&self) -> &str {
        &self.selected_filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn select_filter(&mut self, key: &str) {
        self.selected_filter = key.to_string();
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Every loaded record, ignoring filter and search.
    pub fn items(&self) -> &[T] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Loaded records for local-only edits. Nothing is written back.
    pub fn items_mut(&mut self) -> Option<&mut Vec<T>> {
        self.state.data_mut()
    }

    pub fn begin_load(&mut self) {
        self.state = Loadable::Loading;
    }

    /// Apply a fetch result unless the view was unmounted.
    pub fn apply(&mut self, guard: &ViewGuard, result: Result<Vec<T>>) -> bool {
        if !guard.is_alive() {
            tracing::debug!(resource = self.resource, "Dropping result for unmounted view");
            return false;
        }
        self.state = Loadable::from_result(result, self.resource);
        true
    }

    /// Fetch on mount. Returns false if the view unmounted before the
    /// response arrived, in which case state is left untouched.
    pub async fn mount<F>(&mut self, guard: &ViewGuard, fetch: F) -> bool
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        self.begin_load();
        match run_guarded(guard, fetch).await {
            Some(result) => self.apply(guard, result),
            None => {
                tracing::debug!(resource = self.resource, "View unmounted during fetch");
                false
            }
        }
    }

    /// Visible records for the current filter and search.
    pub fn visible(&self) -> Vec<&T> {
        visible(self.items(), &self.selected_filter, &self.search_query)
    }

    /// Loading, then error, then empty, then items.
    pub fn render(&self) -> ListView<'_, T> {
        match &self.state {
            Loadable::Idle | Loadable::Loading => ListView::Loading,
            Loadable::Failed(msg) => ListView::Error(msg),
            Loadable::Loaded(_) => ListView::from_items(self.visible(), self.empty_message),
        }
    }

    pub fn tabs(&self, tabs: &[(&'static str, &'static str)]) -> Vec<FilterTab> {
        filter_tabs(self.items(), tabs)
    }
}
