// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly timetable keyed by school day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// School days shown as tabs on the timetable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
        }
    }

    /// School day for a chrono weekday; weekends have none.
    pub fn from_weekday(weekday: chrono::Weekday) -> Option<Self> {
        use chrono::Weekday;
        match weekday {
            Weekday::Mon => Some(DayOfWeek::Monday),
            Weekday::Tue => Some(DayOfWeek::Tuesday),
            Weekday::Wed => Some(DayOfWeek::Wednesday),
            Weekday::Thu => Some(DayOfWeek::Thursday),
            Weekday::Fri => Some(DayOfWeek::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lesson slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

/// `GET /api/mobile/time-table` response: day name → periods.
///
/// Keys are kept as strings so an unexpected day does not fail the whole
/// response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyTimeTable {
    pub days: BTreeMap<String, Vec<Period>>,
}

impl WeeklyTimeTable {
    /// Periods for a day, empty if the day is missing.
    pub fn periods_for(&self, day: DayOfWeek) -> &[Period] {
        self.days
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(day.as_str()))
            .map(|(_, periods)| periods.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_for_missing_day_is_empty() {
        let table: WeeklyTimeTable = serde_json::from_str(
            r#"{"Monday": [{"time": "8:00 - 8:45", "subject": "Mathematics", "teacher": "Mrs. Abena Mensah", "room": "Room 12"}],
                "Saturday": []}"#,
        )
        .unwrap();

        assert_eq!(table.periods_for(DayOfWeek::Monday).len(), 1);
        assert_eq!(table.periods_for(DayOfWeek::Monday)[0].subject, "Mathematics");
        assert!(table.periods_for(DayOfWeek::Friday).is_empty());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_from_weekday() {
        assert_eq!(
            DayOfWeek::from_weekday(chrono::Weekday::Wed),
            Some(DayOfWeek::Wednesday)
        );
        assert_eq!(DayOfWeek::from_weekday(chrono::Weekday::Sun), None);
    }
}
