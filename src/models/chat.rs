//! Chat thread list entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatThread {
    pub id: u64,
    /// Contact or group name
    pub name: String,
    /// "Mathematics Teacher", "Class Discussion", ...
    pub role: String,
    pub last_message: String,
    pub time: String,
    pub unread_count: u32,
    pub online: bool,
    /// "teacher", "group", or "admin"
    #[serde(rename = "type")]
    pub kind: String,
}
