//! Authenticated user as returned by the login endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record. Known fields are typed; everything else passes through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user ID (numeric IDs are stringified)
    #[serde(default, deserialize_with = "super::string_or_number")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Any other fields the backend sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// First word of the display name, or `fallback` when the name is blank.
    pub fn first_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.split_whitespace().next().unwrap_or(fallback)
    }
}
