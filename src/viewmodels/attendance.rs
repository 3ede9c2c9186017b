// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Attendance history for one student, fetched on mount.

use super::filter::{FilterTab, Filterable, Searchable, ALL};
use super::lifecycle::ViewGuard;
use super::list::{ListView, ListViewModel};
use super::ScreenContext;
use crate::models::{AttendanceFilter, AttendanceRecord, AttendanceSummary};

pub const STATUS_TABS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("present", "Present"),
    ("absent", "Absent"),
    ("late", "Late"),
];

impl Searchable for AttendanceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.date.as_str(), self.status.as_str()]
    }
}

impl Filterable for AttendanceRecord {
    fn discriminator(&self) -> &str {
        &self.status
    }

    // The backend is inconsistent about status casing.
    fn matches_filter(&self, key: &str) -> bool {
        key == ALL || self.status.eq_ignore_ascii_case(key)
    }
}

#[derive(Debug, Clone)]
pub struct AttendanceViewModel {
    student_id: String,
    period: AttendanceFilter,
    list: ListViewModel<AttendanceRecord>,
}

impl AttendanceViewModel {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            period: AttendanceFilter::default(),
            list: ListViewModel::new("attendance records", "No attendance records found."),
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn period(&self) -> &AttendanceFilter {
        &self.period
    }

    /// Change the aggregation period. Takes effect on the next load.
    pub fn set_period(&mut self, period: AttendanceFilter) {
        self.period = period;
    }

    pub fn list(&self) -> &ListViewModel<AttendanceRecord> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListViewModel<AttendanceRecord> {
        &mut self.list
    }

    /// Fetch records for the current period.
    pub async fn load(&mut self, ctx: &ScreenContext, guard: &ViewGuard) -> bool {
        let student_id = self.student_id.clone();
        let period = self.period.clone();
        tracing::debug!(student_id = %student_id, period = period.as_str(), "Loading attendance");

        let fetch = ctx.fetch(|api, token| {
            let student_id = student_id.clone();
            let period = period.clone();
            async move { api.attendance(&token, &student_id, &period).await }
        });
        self.list.mount(guard, fetch).await
    }

    pub fn render(&self) -> ListView<'_, AttendanceRecord> {
        self.list.render()
    }

    pub fn tabs(&self) -> Vec<FilterTab> {
        self.list.tabs(STATUS_TABS)
    }

    /// Totals over every loaded record, ignoring filter and search.
    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::from_records(self.list.items())
    }
}
