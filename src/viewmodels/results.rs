// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exam results, one tab per term.

use super::filter::{apply_search, Searchable};
use super::lifecycle::Loadable;
use super::list::ListView;
use super::samples;
use crate::models::{SubjectResult, TermResults};

pub const NO_RESULTS: &str = "No results published for this term.";

pub const TERM_TABS: &[(&str, &str)] = &[
    ("current", "Current Term"),
    ("previous", "Previous Term"),
    ("annual", "Annual"),
];

impl Searchable for SubjectResult {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.teacher.as_str()]
    }
}

#[derive(Debug, Clone)]
pub struct ResultsViewModel {
    state: Loadable<Vec<TermResults>>,
    selected_term: String,
    search_query: String,
}

impl ResultsViewModel {
    pub fn new(terms: Vec<TermResults>) -> Self {
        Self {
            state: Loadable::Loaded(terms),
            selected_term: "current".to_string(),
            search_query: String::new(),
        }
    }

    pub fn sample() -> Self {
        Self::new(samples::term_results())
    }

    pub fn state(&self) -> &Loadable<Vec<TermResults>> {
        &self.state
    }

    pub fn selected_term(&self) -> &str {
        &self.selected_term
    }

    pub fn select_term(&mut self, key: &str) {
        self.selected_term = key.to_string();
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Results for the selected tab, if that term has been published.
    pub fn term(&self) -> Option<&TermResults> {
        self.state
            .data()?
            .iter()
            .find(|t| t.key == self.selected_term)
    }

    pub fn subjects(&self) -> Vec<&SubjectResult> {
        match self.term() {
            Some(term) => apply_search(&term.subjects, &self.search_query),
            None => Vec::new(),
        }
    }

    /// Loading, then error, then an unpublished or filtered-out term, then
    /// the subjects.
    pub fn render(&self) -> ListView<'_, SubjectResult> {
        match &self.state {
            Loadable::Idle | Loadable::Loading => ListView::Loading,
            Loadable::Failed(msg) => ListView::Error(msg),
            Loadable::Loaded(_) => ListView::from_items(self.subjects(), NO_RESULTS),
        }
    }
}

/// English ordinal suffix for a class position.
pub fn position_suffix(position: u32) -> &'static str {
    match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_switch() {
        let mut vm = ResultsViewModel::sample();
        let term = vm.term().unwrap();
        assert_eq!(term.period, "Term 2, 2024");
        assert_eq!(vm.subjects().len(), 6);

        vm.select_term("previous");
        assert_eq!(vm.subjects().len(), 3);

        vm.select_term("annual");
        assert!(vm.term().is_none());
        assert!(vm.subjects().is_empty());
    }

    #[test]
    fn test_search_subjects_by_teacher() {
        let mut vm = ResultsViewModel::sample();
        vm.set_search("coach");
        let names: Vec<&str> = vm.subjects().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Physical Education"]);
    }

    #[test]
    fn test_render_checks_state_before_subjects() {
        let mut vm = ResultsViewModel::sample();
        assert_eq!(vm.render().items().len(), 6);

        vm.select_term("annual");
        assert_eq!(vm.render(), ListView::Empty(NO_RESULTS));

        vm.state = Loadable::Failed("Failed to load results".to_string());
        assert_eq!(vm.render(), ListView::Error("Failed to load results"));

        vm.state = Loadable::Loading;
        assert_eq!(vm.render(), ListView::Loading);
    }

    #[test]
    fn test_position_suffix() {
        assert_eq!(position_suffix(1), "st");
        assert_eq!(position_suffix(2), "nd");
        assert_eq!(position_suffix(3), "rd");
        assert_eq!(position_suffix(4), "th");
        assert_eq!(position_suffix(11), "th");
        assert_eq!(position_suffix(22), "nd");
    }
}
