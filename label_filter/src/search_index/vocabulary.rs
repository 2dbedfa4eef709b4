// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashSet,
          fmt::{Display, Formatter, Result}};

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered set of distinct label strings that are valid for one filterable entity. It is
/// owned by the external store and handed to the [`crate::FilterMachine`] read only, and
/// it can be replaced wholesale at any time (eg: when the active dataset changes).
///
/// Insertion order is preserved, duplicates are dropped (first one wins).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    labels: Vec<String>,
    /// Same strings as `labels`, for constant time membership.
    #[serde(skip)]
    index: HashSet<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new_empty() -> Self { Self::default() }

    #[must_use]
    pub fn len(&self) -> usize { self.labels.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Exact, case sensitive membership test. This is the validation policy for commits.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool { self.index.contains(label) }

    pub fn iter(&self) -> std::slice::Iter<'_, String> { self.labels.iter() }

    #[must_use]
    pub fn as_slice(&self) -> &[String] { &self.labels }

    /// Build from an untyped payload.
    ///
    /// - An array yields its string elements (non string elements are skipped).
    /// - Anything else (object, number, null, ...) is malformed input, and is treated as
    ///   an empty vocabulary rather than a fault.
    #[must_use]
    pub fn from_json_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => {
                let skipped = items.iter().filter(|it| !it.is_string()).count();
                if skipped > 0 {
                    tracing::warn!(
                        message = "🏷️ vocabulary has non string entries, skipping them",
                        skipped = skipped
                    );
                }
                items.iter().filter_map(|it| it.as_str()).collect()
            }
            other => {
                tracing::warn!(
                    message = "🏷️ vocabulary is not a list, using an empty one",
                    payload = %other
                );
                Self::new_empty()
            }
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut acc = Self::default();
        for label in iter {
            let label = label.into();
            if acc.index.insert(label.clone()) {
                acc.labels.push(label);
            }
        }
        acc
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter { self.labels.iter() }
}

impl From<Vec<&str>> for Vocabulary {
    fn from(labels: Vec<&str>) -> Self { labels.into_iter().collect() }
}

impl From<Vec<String>> for Vocabulary {
    fn from(labels: Vec<String>) -> Self { labels.into_iter().collect() }
}

/// Lenient: never fails, see [`Vocabulary::from_json_value`].
impl<'de> Deserialize<'de> for Vocabulary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json_value(&value))
    }
}

impl Display for Vocabulary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[{}]", self.labels.join(", "))
    }
}
