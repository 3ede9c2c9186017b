// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Academic calendar: event list plus a month grid.

use super::filter::{FilterTab, Filterable, Searchable, ALL};
use super::lifecycle::ViewGuard;
use super::list::{ListView, ListViewModel};
use super::ScreenContext;
use crate::models::{CalendarEvent, CalendarQuery};
use chrono::{Datelike, Local, Months, NaiveDate};

pub const EVENT_TABS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("exam", "Exams"),
    ("holiday", "Holidays"),
    ("event", "Events"),
    ("assignment", "Assignments"),
];

impl Searchable for CalendarEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

impl Filterable for CalendarEvent {
    fn discriminator(&self) -> &str {
        &self.event_type
    }
}

/// Direction for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Prev,
    Next,
}

#[derive(Debug, Clone)]
pub struct CalendarViewModel {
    query: CalendarQuery,
    /// First day of the displayed month
    month: NaiveDate,
    selected_day: Option<u32>,
    list: ListViewModel<CalendarEvent>,
}

impl CalendarViewModel {
    /// Calendar opened on the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            query: CalendarQuery::default(),
            month: first_of_month(today),
            selected_day: None,
            list: ListViewModel::new("calendar", "No events this month."),
        }
    }

    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Restrict the fetch to a school or event types.
    pub fn with_query(mut self, query: CalendarQuery) -> Self {
        self.query = query;
        self
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn list(&self) -> &ListViewModel<CalendarEvent> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListViewModel<CalendarEvent> {
        &mut self.list
    }

    pub async fn load(&mut self, ctx: &ScreenContext, guard: &ViewGuard) -> bool {
        let query = self.query.clone();
        let fetch = ctx.fetch(|api, token| {
            let query = query.clone();
            async move { api.academic_calendar(&token, &query).await }
        });
        self.list.mount(guard, fetch).await
    }

    pub fn render(&self) -> ListView<'_, CalendarEvent> {
        self.list.render()
    }

    pub fn tabs(&self) -> Vec<FilterTab> {
        self.list.tabs(EVENT_TABS)
    }

    /// Move one month back or forward. Clears the selected day.
    pub fn navigate(&mut self, step: MonthStep) {
        let months = Months::new(1);
        let moved = match step {
            MonthStep::Prev => self.month.checked_sub_months(months),
            MonthStep::Next => self.month.checked_add_months(months),
        };
        if let Some(month) = moved {
            self.month = month;
        }
        self.selected_day = None;
    }

    /// Select a day of the displayed month. Out-of-range days are ignored.
    pub fn select_day(&mut self, day: u32) {
        if self.month.with_day(day).is_some() {
            self.selected_day = Some(day);
        }
    }

    /// Sunday-first grid cells: `None` pads the days before the 1st.
    pub fn month_grid(&self) -> Vec<Option<u32>> {
        let leading = self.month.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![None; leading];
        cells.extend((1..=days_in_month(self.month)).map(Some));
        cells
    }

    /// Visible events falling on a day of the displayed month.
    pub fn events_on(&self, day: u32) -> Vec<&CalendarEvent> {
        let Some(date) = self.month.with_day(day) else {
            return Vec::new();
        };
        self.list
            .visible()
            .into_iter()
            .filter(|event| event.naive_date() == Some(date))
            .collect()
    }

    /// Events on the selected day, empty if nothing is selected.
    pub fn selected_events(&self) -> Vec<&CalendarEvent> {
        self.selected_day
            .map(|day| self.events_on(day))
            .unwrap_or_default()
    }

    /// Visible events in the displayed month, in source order.
    pub fn events_this_month(&self) -> Vec<&CalendarEvent> {
        self.list
            .visible()
            .into_iter()
            .filter(|event| {
                event
                    .naive_date()
                    .is_some_and(|d| d.year() == self.month.year() && d.month() == self.month.month())
            })
            .collect()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
