// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen routes and a stack navigator with an auth guard.

use std::fmt;

/// Every screen in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Login,
    SignUp,
    ChildDetails,
    Onboarding,
    Dashboard,
    Attendance,
    Assignments,
    Announcements,
    Calendar,
    Chat,
    ChildProfile,
    EditProfile,
    FeeStatus,
    Payment,
    Help,
    Logout,
    Notifications,
    Profile,
    Results,
    Settings,
    TimeTable,
}

impl Route {
    pub const ALL: [Route; 22] = [
        Route::Index,
        Route::Login,
        Route::SignUp,
        Route::ChildDetails,
        Route::Onboarding,
        Route::Dashboard,
        Route::Attendance,
        Route::Assignments,
        Route::Announcements,
        Route::Calendar,
        Route::Chat,
        Route::ChildProfile,
        Route::EditProfile,
        Route::FeeStatus,
        Route::Payment,
        Route::Help,
        Route::Logout,
        Route::Notifications,
        Route::Profile,
        Route::Results,
        Route::Settings,
        Route::TimeTable,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Login => "/login",
            Route::SignUp => "/signUp",
            Route::ChildDetails => "/ChildDetails",
            Route::Onboarding => "/Onboarding",
            Route::Dashboard => "/Dashboard",
            Route::Attendance => "/Attendance",
            Route::Assignments => "/Assignments",
            Route::Announcements => "/Announcements",
            Route::Calendar => "/Calendar",
            Route::Chat => "/Chat",
            Route::ChildProfile => "/ChildProfile",
            Route::EditProfile => "/EditProfile",
            Route::FeeStatus => "/FeeStatus",
            Route::Payment => "/Payment",
            Route::Help => "/Help",
            Route::Logout => "/Logout",
            Route::Notifications => "/Notifications",
            Route::Profile => "/Profile",
            Route::Results => "/Results",
            Route::Settings => "/Settings",
            Route::TimeTable => "/TimeTable",
        }
    }

    /// Route for a path. Exact match only.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Screens reachable before logging in.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Route::Index
                | Route::Login
                | Route::SignUp
                | Route::ChildDetails
                | Route::Onboarding
                | Route::Help
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Stack of visited routes. The root is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Index)
    }
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Index)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route`, or `Login` if it is protected and there is no session.
    /// Returns the route actually shown.
    pub fn push(&mut self, route: Route, logged_in: bool) -> Route {
        let target = guard(route, logged_in);
        tracing::debug!(requested = %route, shown = %target, "Navigate push");
        self.stack.push(target);
        target
    }

    /// Replace the current route, with the same guard as `push`.
    pub fn replace(&mut self, route: Route, logged_in: bool) -> Route {
        let target = guard(route, logged_in);
        tracing::debug!(requested = %route, shown = %target, "Navigate replace");
        match self.stack.last_mut() {
            Some(top) => *top = target,
            None => self.stack.push(target),
        }
        target
    }

    /// Pop one route. No-op at the root.
    pub fn back(&mut self) -> Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    /// Clear history and start over at `root`, used after logout.
    pub fn reset(&mut self, root: Route) {
        self.stack.clear();
        self.stack.push(root);
    }
}

fn guard(route: Route, logged_in: bool) -> Route {
    if route.requires_auth() && !logged_in {
        Route::Login
    } else {
        route
    }
}
