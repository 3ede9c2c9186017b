// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Attendance records and the per-period summary shown above the list.

use serde::{Deserialize, Serialize};

/// One attendance entry from `GET /api/mobile/attendance-record`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default, deserialize_with = "super::string_or_number")]
    pub id: String,
    /// Calendar date (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,
    /// Weekday label ("Mon", "Tuesday", ...)
    #[serde(default)]
    pub day: String,
    /// Check-in time
    #[serde(default)]
    pub time: String,
    /// "present", "absent", or "late"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl AttendanceRecord {
    /// Only "present" counts; late and absent days both count against.
    pub fn is_present(&self) -> bool {
        self.status.eq_ignore_ascii_case("present")
    }
}

/// Period the attendance endpoint aggregates over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttendanceFilter {
    #[default]
    Week,
    Month,
    /// A term, optionally pinned to a specific term ID
    Term(Option<String>),
}

impl AttendanceFilter {
    /// Value of the `filterType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceFilter::Week => "WEEK",
            AttendanceFilter::Month => "MONTH",
            AttendanceFilter::Term(_) => "TERM",
        }
    }

    /// Query pairs for the request. `termId` is only sent with TERM.
    pub fn query_pairs(&self, student_id: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("studentId", student_id.to_string()),
            ("filterType", self.as_str().to_string()),
        ];
        if let AttendanceFilter::Term(Some(term_id)) = self {
            pairs.push(("termId", term_id.clone()));
        }
        pairs
    }
}

/// Present/absent totals over a list of records. Every day that is not
/// present counts as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub total_days: usize,
    pub present_days: usize,
    pub absent_days: usize,
    /// Present share, rounded to the nearest whole percent
    pub percentage: u32,
}

impl AttendanceSummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let total_days = records.len();
        let present_days = records.iter().filter(|r| r.is_present()).count();
        let percentage = if total_days == 0 {
            0
        } else {
            ((present_days as f64 / total_days as f64) * 100.0).round() as u32
        };

        Self {
            total_days,
            present_days,
            absent_days: total_days - present_days,
            percentage,
        }
    }
}
