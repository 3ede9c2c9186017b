//! Academic calendar events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One event from `GET /api/mobile/academic-calendar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, deserialize_with = "super::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Event date; ISO dates and datetimes are both accepted
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    /// "exam", "holiday", "event", or "assignment"
    #[serde(default, rename = "type")]
    pub event_type: String,
}

impl CalendarEvent {
    /// Parsed calendar date, if `date` starts with YYYY-MM-DD.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        let prefix = self.date.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

/// Optional query parameters for the calendar endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarQuery {
    pub school_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Comma-separated event types
    pub types: Option<String>,
}

impl CalendarQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(school_id) = &self.school_id {
            pairs.push(("schoolId", school_id.clone()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(types) = &self.types {
            pairs.push(("types", types.clone()));
        }
        pairs
    }
}
