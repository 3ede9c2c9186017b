// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly timetable with one tab per school day.

use super::filter::{apply_search, Searchable};
use super::lifecycle::{load_into, Loadable, ViewGuard};
use super::list::ListView;
use super::ScreenContext;
use crate::models::{DayOfWeek, Period, WeeklyTimeTable};
use crate::services::TimeTableQuery;

pub const NO_CLASSES: &str = "No classes scheduled.";

impl Searchable for Period {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.subject.as_str(), self.teacher.as_str()]
    }
}

#[derive(Debug, Clone)]
pub struct TimeTableViewModel {
    query: TimeTableQuery,
    state: Loadable<WeeklyTimeTable>,
    selected_day: DayOfWeek,
    search_query: String,
}

impl TimeTableViewModel {
    /// Timetable for a student's current week, opened on Monday.
    pub fn new(student_id: &str) -> Self {
        Self::with_query(TimeTableQuery::week_for(student_id))
    }

    pub fn with_query(query: TimeTableQuery) -> Self {
        Self {
            query,
            state: Loadable::Idle,
            selected_day: DayOfWeek::Monday,
            search_query: String::new(),
        }
    }

    pub fn state(&self) -> &Loadable<WeeklyTimeTable> {
        &self.state
    }

    pub fn selected_day(&self) -> DayOfWeek {
        self.selected_day
    }

    pub fn select_day(&mut self, day: DayOfWeek) {
        self.selected_day = day;
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Day tabs, Monday through Friday.
    pub fn day_tabs(&self) -> &'static [DayOfWeek] {
        &DayOfWeek::ALL
    }

    pub async fn load(&mut self, ctx: &ScreenContext, guard: &ViewGuard) -> bool {
        let query = self.query.clone();
        let fetch = ctx.fetch(|api, token| {
            let query = query.clone();
            async move { api.time_table(&token, &query).await }
        });
        load_into(&mut self.state, guard, "timetable", fetch).await
    }

    /// Periods for the selected day that match the search box.
    pub fn current_schedule(&self) -> Vec<&Period> {
        match self.state.data() {
            Some(table) => apply_search(table.periods_for(self.selected_day), &self.search_query),
            None => Vec::new(),
        }
    }

    /// Loading, then error, then an empty day, then the periods.
    pub fn render(&self) -> ListView<'_, Period> {
        match &self.state {
            Loadable::Idle | Loadable::Loading => ListView::Loading,
            Loadable::Failed(msg) => ListView::Error(msg),
            Loadable::Loaded(_) => ListView::from_items(self.current_schedule(), NO_CLASSES),
        }
    }
}
