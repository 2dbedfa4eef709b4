// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

use crate::{Selection, Vocabulary};

/// The protocol between the [`crate::FilterMachine`] and the view layer. Event names and
/// payload keys are part of the wire format and serialize as:
///
/// ```text
/// {"type":"EDIT"}
/// {"type":"CHANGE","value":"do"}
/// {"type":"COMMIT","value":"dog"}
/// {"type":"REMOVE","value":"dog"}
/// {"type":"SET_CLASSES","classes":["cat","dog"]}
/// {"type":"SET_SELECTED","selected":["dog"]}
/// {"type":"MOUSEENTER_RESULTS"}
/// ```
///
/// A `SET_CLASSES` payload whose `classes` is not a list is read as an empty
/// [`Vocabulary`].
#[derive(
    Clone, Debug, PartialEq, Serialize, Deserialize, AsRefStr, IntoStaticStr, EnumIter,
)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterEvent {
    /// `reading` -> `editing`.
    Edit,
    /// `editing` -> `reading`, when the input is unfocused and the results are not
    /// hovered.
    Blur,
    Change {
        value: String,
    },
    Commit {
        value: String,
    },
    Remove {
        value: String,
    },
    /// User initiated "clear all". Pushed outward like [`FilterEvent::Remove`].
    Clear,
    SetClasses {
        classes: Vocabulary,
    },
    /// Inbound reconciliation from the external store. Never pushed back out.
    SetSelected {
        selected: Selection,
    },
    SetInvert {
        invert: bool,
    },
    FocusInput,
    UnfocusInput,
    #[serde(rename = "MOUSEENTER_RESULTS")]
    #[strum(serialize = "MOUSEENTER_RESULTS")]
    MouseEnterResults,
    #[serde(rename = "MOUSELEAVE_RESULTS")]
    #[strum(serialize = "MOUSELEAVE_RESULTS")]
    MouseLeaveResults,
    NextResult,
    PreviousResult,
}

impl FilterEvent {
    pub fn change(value: impl Into<String>) -> Self {
        Self::Change {
            value: value.into(),
        }
    }

    pub fn commit(value: impl Into<String>) -> Self {
        Self::Commit {
            value: value.into(),
        }
    }

    pub fn remove(value: impl Into<String>) -> Self {
        Self::Remove {
            value: value.into(),
        }
    }

    pub fn set_classes(classes: impl Into<Vocabulary>) -> Self {
        Self::SetClasses {
            classes: classes.into(),
        }
    }

    pub fn set_selected(selected: impl Into<Selection>) -> Self {
        Self::SetSelected {
            selected: selected.into(),
        }
    }

    /// Wire name, eg: `"MOUSEENTER_RESULTS"`.
    #[must_use]
    pub fn name(&self) -> &'static str { self.into() }

    /// Selection changes caused by these events are user actions, and get pushed to the
    /// external store. Everything else (in particular [`FilterEvent::SetSelected`]) is
    /// kept local.
    #[must_use]
    pub fn is_user_selection_edit(&self) -> bool {
        matches!(self, Self::Commit { .. } | Self::Remove { .. } | Self::Clear)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(FilterEvent::Edit, json!({"type": "EDIT"}))]
    #[test_case(FilterEvent::Blur, json!({"type": "BLUR"}))]
    #[test_case(FilterEvent::change("do"), json!({"type": "CHANGE", "value": "do"}))]
    #[test_case(FilterEvent::commit("dog"), json!({"type": "COMMIT", "value": "dog"}))]
    #[test_case(FilterEvent::remove("dog"), json!({"type": "REMOVE", "value": "dog"}))]
    #[test_case(
        FilterEvent::set_classes(vec!["cat", "dog"]),
        json!({"type": "SET_CLASSES", "classes": ["cat", "dog"]})
    )]
    #[test_case(
        FilterEvent::set_selected(vec!["dog", "cat"]),
        json!({"type": "SET_SELECTED", "selected": ["cat", "dog"]})
    )]
    #[test_case(FilterEvent::FocusInput, json!({"type": "FOCUS_INPUT"}))]
    #[test_case(FilterEvent::UnfocusInput, json!({"type": "UNFOCUS_INPUT"}))]
    #[test_case(FilterEvent::MouseEnterResults, json!({"type": "MOUSEENTER_RESULTS"}))]
    #[test_case(FilterEvent::MouseLeaveResults, json!({"type": "MOUSELEAVE_RESULTS"}))]
    fn wire_shape(event: FilterEvent, expected: serde_json::Value) {
        assert_eq2!(serde_json::to_value(&event).unwrap(), expected);
        let parsed: FilterEvent = serde_json::from_value(expected).unwrap();
        assert_eq2!(parsed, event);
    }

    #[test]
    fn name_matches_wire_type() {
        assert_eq2!(FilterEvent::MouseEnterResults.name(), "MOUSEENTER_RESULTS");
        assert_eq2!(FilterEvent::set_classes(vec!["a"]).name(), "SET_CLASSES");
        assert_eq2!(FilterEvent::Edit.as_ref(), "EDIT");
    }

    #[test]
    fn every_event_serializes_its_name_as_type() {
        let mut names = vec![];
        for event in FilterEvent::iter() {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq2!(json["type"], event.name());
            let parsed: FilterEvent = serde_json::from_value(json).unwrap();
            assert_eq2!(parsed, event);
            names.push(event.name());
        }
        assert_eq2!(names.len(), 15);
        names.sort_unstable();
        names.dedup();
        assert_eq2!(names.len(), 15);
    }

    #[test]
    fn set_classes_with_non_list_payload_is_empty() {
        let it: FilterEvent =
            serde_json::from_value(json!({"type": "SET_CLASSES", "classes": {"x": 1}}))
                .unwrap();
        assert_eq2!(it, FilterEvent::SetClasses {
            classes: Vocabulary::new_empty()
        });
    }

    #[test]
    fn only_user_edits_are_pushed() {
        assert!(FilterEvent::commit("a").is_user_selection_edit());
        assert!(FilterEvent::remove("a").is_user_selection_edit());
        assert!(FilterEvent::Clear.is_user_selection_edit());
        assert!(!FilterEvent::set_selected(vec!["a"]).is_user_selection_edit());
    }
}
