// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;
use smallvec::{SmallVec, smallvec};
use strum_macros::Display;

use crate::{Selection, ValidationError, Vocabulary, search};

/// Primary mode of the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FilterMode {
    #[default]
    Reading,
    Editing,
}

/// Input focus region, only active while [`FilterMode::Editing`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum InputFocus {
    #[default]
    Focused,
    Unfocused,
}

/// Results panel hover region, only active while [`FilterMode::Editing`]. Runs in
/// parallel with [`InputFocus`]: clicking a result transiently unfocuses the input, and
/// the panel must not close while the pointer is still over it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ResultsHover {
    Hovering,
    #[default]
    NotHovering,
}

/// Data owned exclusively by the machine.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterContext {
    pub classes: Vocabulary,
    pub input_text: String,
    /// Always equal to [`search`] of `input_text` over `classes`, minus `selected`.
    pub results: Vec<String>,
    pub selected: Selection,
    pub error: Option<ValidationError>,
    /// Index into `results` highlighted with the arrow keys.
    pub current_result: Option<usize>,
    pub invert: bool,
}

impl FilterContext {
    /// Re-derive `results`. The highlight is dropped if the list changed under it.
    pub fn recompute_results(&mut self) {
        let results = search(&self.classes, &self.input_text, &self.selected);
        if results != self.results {
            self.results = results;
            self.current_result = None;
        }
    }

    #[must_use]
    pub fn highlighted_result(&self) -> Option<&str> {
        self.current_result
            .and_then(|index| self.results.get(index))
            .map(String::as_str)
    }
}

/// Composite machine state: one primary mode plus two independent secondary regions.
/// The secondary regions are kept as separate fields (not folded into one flat enum)
/// because `BLUR` is guarded on the conjunction of both.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub mode: FilterMode,
    pub input_focus: InputFocus,
    pub results_hover: ResultsHover,
    pub context: FilterContext,
}

pub type StatePaths = SmallVec<[String; 2]>;

impl FilterState {
    #[must_use]
    pub fn is_editing(&self) -> bool { self.mode == FilterMode::Editing }

    /// The secondary regions, or [`None`] while reading.
    #[must_use]
    pub fn sub_states(&self) -> Option<(InputFocus, ResultsHover)> {
        self.is_editing()
            .then_some((self.input_focus, self.results_hover))
    }

    /// `BLUR` only applies once the user has disengaged from both regions.
    #[must_use]
    pub fn can_blur(&self) -> bool {
        self.is_editing()
            && self.input_focus == InputFocus::Unfocused
            && self.results_hover == ResultsHover::NotHovering
    }

    /// Leaf state paths, eg: `["reading"]` or `["editing.input.focused",
    /// "editing.searchResults.notHovering"]`.
    #[must_use]
    pub fn paths(&self) -> StatePaths {
        match self.mode {
            FilterMode::Reading => smallvec![FilterMode::Reading.to_string()],
            FilterMode::Editing => smallvec![
                format!("{}.input.{}", FilterMode::Editing, self.input_focus),
                format!("{}.searchResults.{}", FilterMode::Editing, self.results_hover),
            ],
        }
    }

    /// Dotted path query, eg: `matches("editing")` or
    /// `matches("editing.searchResults.notHovering")`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.paths().iter().any(|leaf| {
            leaf == path
                || leaf
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}
