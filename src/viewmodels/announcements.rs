// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! School announcements, filtered by category.

use super::filter::{Filterable, Searchable, ALL};
use super::list::ListViewModel;
use super::samples;
use crate::models::Announcement;

pub const CATEGORY_TABS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("academic", "Academic"),
    ("events", "Events"),
    ("general", "General"),
    ("health", "Health"),
];

pub type AnnouncementsViewModel = ListViewModel<Announcement>;

impl Searchable for Announcement {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str(), self.author.as_str()]
    }
}

impl Filterable for Announcement {
    fn discriminator(&self) -> &str {
        &self.category
    }
}

/// Announcements screen over the given records.
pub fn screen(items: Vec<Announcement>) -> AnnouncementsViewModel {
    ListViewModel::seeded(items, "announcements", "No announcements found.")
}

/// Announcements screen over the built-in records.
pub fn sample_screen() -> AnnouncementsViewModel {
    screen(samples::announcements())
}

pub fn unread_count(items: &[Announcement]) -> usize {
    items.iter().filter(|a| !a.read_status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::list::ListView;

    fn announcement(id: u64, category: &str) -> Announcement {
        Announcement {
            id,
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_events_filter_selects_matching_category() {
        let mut vm = screen(vec![announcement(1, "academic"), announcement(2, "events")]);

        vm.select_filter("events");
        let ids: Vec<u64> = vm.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);

        vm.select_filter(ALL);
        let ids: Vec<u64> = vm.visible().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_search_covers_author() {
        let mut vm = sample_screen();
        vm.set_search("library department");
        let titles: Vec<&str> = vm.visible().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["New Library Books Available"]);
    }

    #[test]
    fn test_category_tabs_and_unread() {
        let vm = sample_screen();
        let counts: Vec<usize> = vm.tabs(CATEGORY_TABS).iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![6, 2, 2, 1, 1]);
        assert_eq!(unread_count(vm.items()), 2);
    }

    #[test]
    fn test_no_match_shows_empty_message() {
        let mut vm = sample_screen();
        vm.set_search("zzz");
        assert_eq!(vm.render(), ListView::Empty("No announcements found."));
    }
}
