// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Selection, Vocabulary};

/// Autocomplete candidates for `query`: every [`Vocabulary`] entry that contains `query`
/// as a case insensitive substring, minus the entries already in `selection`, sorted
/// lexicographically. An empty query matches everything.
///
/// This has no state, so the same inputs always produce the same list.
#[must_use]
pub fn search(vocabulary: &Vocabulary, query: &str, selection: &Selection) -> Vec<String> {
    let query = query.to_lowercase();
    let mut acc: Vec<String> = vocabulary
        .iter()
        .filter(|label| !selection.contains(label))
        .filter(|label| label.to_lowercase().contains(&query))
        .cloned()
        .collect();
    acc.sort();
    acc
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn vocabulary() -> Vocabulary { Vocabulary::from(vec!["cat", "dog", "bird"]) }

    #[test_case("do", &["dog"] ; "prefix")]
    #[test_case("DO", &["dog"] ; "upper case query")]
    #[test_case("i", &["bird"] ; "infix")]
    #[test_case("", &["bird", "cat", "dog"] ; "empty query matches all sorted")]
    #[test_case("zebra", &[] ; "no match")]
    fn search_by_substring(query: &str, expected: &[&str]) {
        let it = search(&vocabulary(), query, &Selection::new_empty());
        assert_eq2!(it, expected.iter().map(ToString::to_string).collect::<Vec<_>>());
    }

    #[test]
    fn selected_entries_are_excluded() {
        let selection = Selection::from(vec!["cat"]);
        let it = search(&vocabulary(), "", &selection);
        assert_eq2!(it, vec!["bird".to_string(), "dog".to_string()]);
    }

    #[test]
    fn mixed_case_vocabulary() {
        let vocabulary = Vocabulary::from(vec!["Truck", "truck", "Bus"]);
        let it = search(&vocabulary, "tRu", &Selection::new_empty());
        assert_eq2!(it, vec!["Truck".to_string(), "truck".to_string()]);
    }
}
