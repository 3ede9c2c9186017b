//! Dashboard summary for a parent.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/mobile/home-screen`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeScreen {
    pub parent: Option<HomeParent>,
    pub children: Vec<StudentSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeParent {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,
    pub name: String,
}

/// A child listed on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentSummary {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,
    pub name: String,
    pub class: Option<String>,
    pub today_attendance: Option<String>,
    pub profile_image_url: Option<String>,
}

impl HomeScreen {
    /// First word of the parent's name, "Parent" when unknown.
    pub fn parent_first_name(&self) -> &str {
        self.parent
            .as_ref()
            .and_then(|p| p.name.split_whitespace().next())
            .unwrap_or("Parent")
    }

    pub fn first_child(&self) -> Option<&StudentSummary> {
        self.children.first()
    }
}
