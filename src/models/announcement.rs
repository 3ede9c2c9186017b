//! School announcements.

use serde::{Deserialize, Serialize};

/// An announcement card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// "academic", "events", "general", or "health"
    pub category: String,
    /// "high", "medium", or "low"
    pub priority: String,
    pub date: String,
    pub author: String,
    pub read_status: bool,
    pub attachments: Vec<String>,
    pub likes: u32,
    pub comments: u32,
}
