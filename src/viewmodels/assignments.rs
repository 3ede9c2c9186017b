// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Homework list, filtered by submission status.

use super::filter::{Filterable, Searchable, ALL};
use super::list::ListViewModel;
use super::samples;
use crate::models::Assignment;

pub const STATUS_TABS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("pending", "Pending"),
    ("submitted", "Submitted"),
    ("overdue", "Overdue"),
];

pub type AssignmentsViewModel = ListViewModel<Assignment>;

impl Searchable for Assignment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.subject.as_str(), self.teacher.as_str()]
    }
}

impl Filterable for Assignment {
    fn discriminator(&self) -> &str {
        &self.status
    }
}

pub fn screen(items: Vec<Assignment>) -> AssignmentsViewModel {
    ListViewModel::seeded(items, "assignments", "No assignments found.")
}

pub fn sample_screen() -> AssignmentsViewModel {
    screen(samples::assignments())
}
