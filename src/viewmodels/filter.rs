// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure filter and search functions shared by every list screen.
//!
//! Both predicates preserve source order and are independent, so applying
//! them in either order yields the same list.

use serde::Serialize;

/// Sentinel filter key that selects everything.
pub const ALL: &str = "all";

/// A record with free-text fields the search box looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field. Empty matches all.
    fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A record that filter tabs select on.
pub trait Filterable: Searchable {
    /// Field compared against the selected filter key.
    fn discriminator(&self) -> &str;

    /// Override for screens with extra keys such as "unread".
    fn matches_filter(&self, key: &str) -> bool {
        key == ALL || self.discriminator() == key
    }
}

/// Keep records matching the filter key.
pub fn apply_filter<'a, T, I>(items: I, key: &str) -> Vec<&'a T>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| item.matches_filter(key))
        .collect()
}

/// Keep records matching the search query.
pub fn apply_search<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| item.matches_search(query))
        .collect()
}

/// Records passing both the filter and the search.
pub fn visible<'a, T, I>(items: I, key: &str, query: &str) -> Vec<&'a T>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| item.matches_filter(key) && item.matches_search(query))
        .collect()
}

/// A filter tab with its count badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub key: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Number of records each filter key would keep. `"all"` counts everything.
pub fn filter_counts<T: Filterable>(items: &[T], keys: &[&str]) -> Vec<usize> {
    keys.iter()
        .map(|key| items.iter().filter(|item| item.matches_filter(key)).count())
        .collect()
}

/// Build filter tabs with counts over the full (unsearched) list.
pub fn filter_tabs<T: Filterable>(
    items: &[T],
    tabs: &[(&'static str, &'static str)],
) -> Vec<FilterTab> {
    let keys: Vec<&str> = tabs.iter().map(|&(key, _)| key).collect();
    tabs.iter()
        .zip(filter_counts(items, &keys))
        .map(|(&(key, label), count)| FilterTab { key, label, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Note {
        id: u32,
        category: &'static str,
        title: &'static str,
        body: &'static str,
    }

    impl Searchable for Note {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.body]
        }
    }

    impl Filterable for Note {
        fn discriminator(&self) -> &str {
            self.category
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { id: 1, category: "academic", title: "Parent-Teacher Conference", body: "Discuss progress" },
            Note { id: 2, category: "events", title: "Sports Day", body: "Registration open" },
            Note { id: 3, category: "academic", title: "Library Books", body: "New SCIENCE titles" },
            Note { id: 4, category: "events", title: "Science Fair", body: "Submit projects" },
        ]
    }

    fn ids(items: &[&Note]) -> Vec<u32> {
        items.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let list = notes();
        assert_eq!(ids(&apply_filter(&list, "events")), vec![2, 4]);
        assert_eq!(ids(&apply_filter(&list, "academic")), vec![1, 3]);
    }

    #[test]
    fn test_all_is_identity() {
        let list = notes();
        assert_eq!(ids(&apply_filter(&list, ALL)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_key_matches_nothing() {
        let list = notes();
        assert!(apply_filter(&list, "health").is_empty());
        assert!(apply_filter(&list, "Events").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_fields() {
        let list = notes();
        assert_eq!(ids(&apply_search(&list, "science")), vec![3, 4]);
        assert_eq!(ids(&apply_search(&list, "SPORTS")), vec![2]);
        assert!(apply_search(&list, "zebra").is_empty());
    }

    #[test]
    fn test_empty_search_is_identity() {
        let list = notes();
        assert_eq!(ids(&apply_search(&list, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_and_search_commute() {
        let list = notes();
        for key in [ALL, "academic", "events", "health"] {
            for query in ["", "science", "day", "o", "nope"] {
                let a = apply_search(apply_filter(&list, key), query);
                let b = apply_filter(apply_search(&list, query), key);
                let c = visible(&list, key, query);
                assert_eq!(a, b, "key={key} query={query}");
                assert_eq!(a, c, "key={key} query={query}");
            }
        }
    }

    #[test]
    fn test_filter_tabs_count_full_list() {
        let list = notes();
        let tabs = filter_tabs(&list, &[(ALL, "All"), ("academic", "Academic"), ("health", "Health")]);
        let counts: Vec<_> = tabs.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![4, 2, 0]);
        assert_eq!(filter_counts(&list, &[ALL, "events"]), vec![4, 2]);
    }
}
