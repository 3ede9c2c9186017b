// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::filter::{Filterable, Searchable, ALL};
use super::list::ListViewModel;
use super::samples;
use crate::models::ChatThread;

pub const CHAT_TABS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("teacher", "Teachers"),
    ("group", "Groups"),
    ("admin", "Admin"),
];

pub type ChatsViewModel = ListViewModel<ChatThread>;

impl Searchable for ChatThread {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role.as_str()]
    }
}

impl Filterable for ChatThread {
    fn discriminator(&self) -> &str {
        &self.kind
    }
}

pub fn screen(items: Vec<ChatThread>) -> ChatsViewModel {
    ListViewModel::seeded(items, "chats", "No conversations found.")
}

pub fn sample_screen() -> ChatsViewModel {
    screen(samples::chats())
}

/// Unread badge across every conversation.
pub fn total_unread(items: &[ChatThread]) -> u32 {
    items.iter().map(|c| c.unread_count).sum()
}
