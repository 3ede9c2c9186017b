//! Homework assignments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assignment {
    pub id: u64,
    pub title: String,
    pub subject: String,
    pub due_date: String,
    /// "pending", "submitted", or "overdue"
    pub status: String,
    pub priority: String,
    pub description: String,
    /// "Written", "Digital", or "Presentation"
    pub submission_type: String,
    pub marks: u32,
    pub teacher: String,
}
