// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeSet,
          fmt::{Display, Formatter, Result}};

use serde::{Deserialize, Serialize};

use super::Vocabulary;

/// The committed subset of a [`Vocabulary`] currently included by the filter. It is
/// deduplicated and always iterates in lexicographic order, which is also the order it
/// is exposed to the view and pushed to the external store in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    labels: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    pub fn new_empty() -> Self { Self::default() }

    #[must_use]
    pub fn len(&self) -> usize { self.labels.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool { self.labels.contains(label) }

    /// Returns `true` if the label was not already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    /// Returns `true` if the label was present.
    pub fn remove(&mut self, label: &str) -> bool { self.labels.remove(label) }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, String> {
        self.labels.iter()
    }

    /// Sorted, deduplicated copy of the labels.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> { self.labels.iter().cloned().collect() }

    #[must_use]
    pub fn is_subset_of(&self, vocabulary: &Vocabulary) -> bool {
        self.labels.iter().all(|it| vocabulary.contains(it))
    }

    /// Returns a copy that only keeps the labels present in `vocabulary`.
    #[must_use]
    pub fn pruned_to(&self, vocabulary: &Vocabulary) -> Self {
        self.labels
            .iter()
            .filter(|it| vocabulary.contains(it))
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter { self.labels.iter() }
}

impl From<Vec<&str>> for Selection {
    fn from(labels: Vec<&str>) -> Self { labels.into_iter().collect() }
}

impl From<Vec<String>> for Selection {
    fn from(labels: Vec<String>) -> Self { labels.into_iter().collect() }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}]", self.to_vec().join(", "))
    }
}
