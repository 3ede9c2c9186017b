// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mobile resource fetchers: one method per `/api/mobile/*` endpoint.

use crate::error::Result;
use crate::models::{
    AttendanceFilter, AttendanceRecord, CalendarEvent, CalendarQuery, ChildProfile, Envelope,
    HomeScreen, OnboardingData, WeeklyTimeTable,
};
use crate::services::gateway::{ApiGateway, Auth};
use chrono::NaiveDate;

pub const CHILD_PROFILE_PATH: &str = "/api/mobile/child-profile";
pub const HOME_SCREEN_PATH: &str = "/api/mobile/home-screen";
pub const ATTENDANCE_PATH: &str = "/api/mobile/attendance-record";
pub const CALENDAR_PATH: &str = "/api/mobile/academic-calendar";
pub const TIME_TABLE_PATH: &str = "/api/mobile/time-table";
pub const ONBOARDING_PATH: &str = "/api/mobile/onboarding";

/// Query for the timetable endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeTableQuery {
    pub student_id: Option<String>,
    /// Anchor date; the backend defaults to today
    pub date: Option<NaiveDate>,
    /// Whole week (true) or just the anchor day
    pub week: bool,
}

impl TimeTableQuery {
    pub fn week_for(student_id: &str) -> Self {
        Self {
            student_id: Some(student_id.to_string()),
            date: None,
            week: true,
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(student_id) = &self.student_id {
            pairs.push(("studentId", student_id.clone()));
        }
        pairs.push(("week", self.week.to_string()));
        if let Some(date) = self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// Mobile API client. Every method requires a bearer token.
#[derive(Clone)]
pub struct MobileApi {
    gateway: ApiGateway,
}

impl MobileApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Child, parent, and teacher bundle for a student.
    pub async fn child_profile(
        &self,
        token: &str,
        student_id: Option<&str>,
    ) -> Result<ChildProfile> {
        let query = optional_pair("studentId", student_id);
        let body: Envelope<ChildProfile> = self
            .gateway
            .get_json(CHILD_PROFILE_PATH, &query, Auth::Bearer(token))
            .await?;
        Ok(body.into_inner())
    }

    /// Dashboard summary for a parent.
    pub async fn home_screen(&self, token: &str, parent_id: Option<&str>) -> Result<HomeScreen> {
        let query = optional_pair("parentId", parent_id);
        let body: Envelope<HomeScreen> = self
            .gateway
            .get_json(HOME_SCREEN_PATH, &query, Auth::Bearer(token))
            .await?;
        Ok(body.into_inner())
    }

    /// Attendance records for a student over a period.
    pub async fn attendance(
        &self,
        token: &str,
        student_id: &str,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>> {
        let query = filter.query_pairs(student_id);
        let body: Envelope<Vec<AttendanceRecord>> = self
            .gateway
            .get_json(ATTENDANCE_PATH, &query, Auth::Bearer(token))
            .await?;
        Ok(body.into_inner())
    }

    /// Academic calendar events.
    pub async fn academic_calendar(
        &self,
        token: &str,
        query: &CalendarQuery,
    ) -> Result<Vec<CalendarEvent>> {
        let body: Envelope<Vec<CalendarEvent>> = self
            .gateway
            .get_json(CALENDAR_PATH, &query.query_pairs(), Auth::Bearer(token))
            .await?;
        Ok(body.into_inner())
    }

    /// Weekly schedule.
    pub async fn time_table(&self, token: &str, query: &TimeTableQuery) -> Result<WeeklyTimeTable> {
        let body: Envelope<WeeklyTimeTable> = self
            .gateway
            .get_json(TIME_TABLE_PATH, &query.query_pairs(), Auth::Bearer(token))
            .await?;
        Ok(body.into_inner())
    }

    /// Onboarding carousel for a user.
    pub async fn onboarding(&self, token: &str, user_id: &str) -> Result<OnboardingData> {
        let query = [("userId", user_id.to_string())];
        let body: Envelope<OnboardingData> = self
            .gateway
            .get_json(ONBOARDING_PATH, &query, Auth::Bearer(token))
            .await?;
        Ok(body.into_inner())
    }
}

fn optional_pair(key: &'static str, value: Option<&str>) -> Vec<(&'static str, String)> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| vec![(key, v.to_string())])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_table_query_pairs() {
        let query = TimeTableQuery {
            student_id: Some("s1".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 6, 2),
            week: true,
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                ("studentId", "s1".to_string()),
                ("week", "true".to_string()),
                ("date", "2025-06-02".to_string()),
            ]
        );
    }

    #[test]
    fn test_optional_pair_skips_empty() {
        assert!(optional_pair("parentId", None).is_empty());
        assert!(optional_pair("parentId", Some("")).is_empty());
        assert_eq!(optional_pair("parentId", Some("p1")).len(), 1);
    }
}
