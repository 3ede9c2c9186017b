//! In-app notifications.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    /// "assignment", "announcement", "payment", "message", "results", "event"
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub date: String,
    pub is_read: bool,
    pub action_required: bool,
    pub related_to: String,
    pub sender: String,
}
