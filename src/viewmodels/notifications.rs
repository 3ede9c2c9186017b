// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification inbox with read state kept locally.

use super::filter::{FilterTab, Filterable, Searchable, ALL};
use super::list::{ListView, ListViewModel};
use super::samples;
use crate::models::Notification;

/// Filter key that selects unread notifications of any type.
pub const UNREAD: &str = "unread";

pub const TYPE_TABS: &[(&str, &str)] = &[
    (ALL, "All"),
    (UNREAD, "Unread"),
    ("assignment", "Assignments"),
    ("announcement", "Announcements"),
    ("payment", "Payments"),
    ("message", "Messages"),
];

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str(), self.sender.as_str()]
    }
}

impl Filterable for Notification {
    fn discriminator(&self) -> &str {
        &self.kind
    }

    fn matches_filter(&self, key: &str) -> bool {
        match key {
            ALL => true,
            UNREAD => !self.is_read,
            _ => self.kind == key,
        }
    }
}

/// Inbox state. Marking and deleting only touch the local copy.
#[derive(Debug, Clone)]
pub struct NotificationsViewModel {
    list: ListViewModel<Notification>,
}

impl NotificationsViewModel {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            list: ListViewModel::seeded(items, "notifications", "No notifications found."),
        }
    }

    pub fn sample() -> Self {
        Self::new(samples::notifications())
    }

    pub fn list(&self) -> &ListViewModel<Notification> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListViewModel<Notification> {
        &mut self.list
    }

    pub fn render(&self) -> ListView<'_, Notification> {
        self.list.render()
    }

    pub fn tabs(&self) -> Vec<FilterTab> {
        self.list.tabs(TYPE_TABS)
    }

    /// Returns false if no notification has that ID.
    pub fn mark_as_read(&mut self, id: u64) -> bool {
        let Some(items) = self.list.items_mut() else {
            return false;
        };
        match items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        if let Some(items) = self.list.items_mut() {
            items.iter_mut().for_each(|n| n.is_read = true);
        }
    }

    /// Returns false if no notification has that ID.
    pub fn delete(&mut self, id: u64) -> bool {
        let Some(items) = self.list.items_mut() else {
            return false;
        };
        let before = items.len();
        items.retain(|n| n.id != id);
        items.len() != before
    }

    pub fn unread_count(&self) -> usize {
        self.list.items().iter().filter(|n| !n.is_read).count()
    }

    pub fn action_required_count(&self) -> usize {
        self.list
            .items()
            .iter()
            .filter(|n| n.action_required)
            .count()
    }
}
