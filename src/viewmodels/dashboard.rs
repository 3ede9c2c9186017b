// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Parent dashboard: greeting plus the selected child's summary card.

use super::lifecycle::{load_into, Loadable, ViewGuard};
use super::ScreenContext;
use crate::models::{HomeScreen, StudentSummary};

pub const NO_STUDENT: &str = "No student found";
pub const NO_CLASS: &str = "No class found";

#[derive(Debug, Clone, Default)]
pub struct DashboardViewModel {
    parent_id: Option<String>,
    state: Loadable<HomeScreen>,
    selected_child: Option<String>,
}

impl DashboardViewModel {
    /// Dashboard for the logged-in parent. The backend infers the parent
    /// from the token when no ID is given.
    pub fn new(parent_id: Option<&str>) -> Self {
        Self {
            parent_id: parent_id.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &Loadable<HomeScreen> {
        &self.state
    }

    pub async fn load(&mut self, ctx: &ScreenContext, guard: &ViewGuard) -> bool {
        let parent_id = self.parent_id.clone();
        let fetch = ctx.fetch(|api, token| {
            let parent_id = parent_id.clone();
            async move { api.home_screen(&token, parent_id.as_deref()).await }
        });

        let applied = load_into(&mut self.state, guard, "home data", fetch).await;
        if applied {
            self.reconcile_selection();
        }
        applied
    }

    /// Keep the selection if the child is still listed, else pick the first.
    fn reconcile_selection(&mut self) {
        let Some(home) = self.state.data() else {
            return;
        };
        let still_listed = self
            .selected_child
            .as_deref()
            .is_some_and(|id| home.children.iter().any(|c| c.id == id));
        if !still_listed {
            self.selected_child = home.first_child().map(|c| c.id.clone());
        }
    }

    pub fn parent_first_name(&self) -> &str {
        self.state
            .data()
            .map(HomeScreen::parent_first_name)
            .unwrap_or("Parent")
    }

    pub fn children(&self) -> &[StudentSummary] {
        self.state
            .data()
            .map(|home| home.children.as_slice())
            .unwrap_or(&[])
    }

    /// Switch the summary card to another child. Unknown IDs are rejected.
    pub fn select_child(&mut self, id: &str) -> bool {
        if self.children().iter().any(|c| c.id == id) {
            self.selected_child = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected_child(&self) -> Option<&StudentSummary> {
        let id = self.selected_child.as_deref()?;
        self.children().iter().find(|c| c.id == id)
    }

    pub fn student_name(&self) -> &str {
        self.selected_child()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(NO_STUDENT)
    }

    pub fn student_class(&self) -> &str {
        self.selected_child()
            .and_then(|c| c.class.as_deref())
            .filter(|class| !class.is_empty())
            .unwrap_or(NO_CLASS)
    }
}
