// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure transition function for the label filter automaton.
//!
//! [`transition`] takes the current [`FilterState`] and one [`FilterEvent`], and returns
//! a new [`FilterState`] snapshot along with the outbound [`FilterEffect`]s. It never
//! mutates its input, never blocks, and never fails. The only source of non determinism
//! (fresh [`ErrorId`]s for rejected commits) is injected by the caller.
//!
//! | Event                   | Valid in | Effect                                          |
//! |-------------------------|----------|-------------------------------------------------|
//! | `EDIT`                  | reading  | -> editing, clear error & highlight             |
//! | `BLUR`                  | editing  | -> reading if unfocused & not hovering          |
//! | `CHANGE`                | editing  | set text, clear error, recompute results        |
//! | `COMMIT`                | editing  | add to selection if in vocabulary, else error   |
//! | `REMOVE`, `CLEAR`       | any      | shrink selection, push it outward               |
//! | `SET_CLASSES`           | any      | replace vocabulary, prune selection, -> reading |
//! | `SET_SELECTED`          | any      | replace selection, never pushed outward         |
//! | `SET_INVERT`            | any      | set invert flag                                 |
//! | `(UN)FOCUS_INPUT`       | editing  | input region                                    |
//! | `MOUSE(ENTER/LEAVE)_..` | editing  | results hover region                            |
//! | `NEXT/PREVIOUS_RESULT`  | editing  | move highlight through results                  |

use smallvec::SmallVec;

use super::{ErrorId, FilterEvent, FilterMode, FilterState, InputFocus, ResultsHover,
            ValidationError};
use crate::Selection;

/// Outbound side effects requested by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterEffect {
    /// Selection changed because of a user action (`COMMIT`, `REMOVE`, `CLEAR`). The
    /// external store must be updated.
    PushSelection(Selection),
    /// A commit was rejected. The view may use this to trigger transient feedback.
    ValidationFailed(ValidationError),
}

pub type FilterEffects = SmallVec<[FilterEffect; 2]>;

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: FilterState,
    pub effects: FilterEffects,
    /// `false` if the event is not valid in the current state (or its guard failed), in
    /// which case `state` is unchanged.
    pub handled: bool,
}

impl Transition {
    fn ignored(state: &FilterState) -> Self {
        Self {
            state: state.clone(),
            effects: FilterEffects::new(),
            handled: false,
        }
    }

    fn handled(state: FilterState, effects: FilterEffects) -> Self {
        Self {
            state,
            effects,
            handled: true,
        }
    }
}

/// `(mode, input focus, results hover, event) -> (mode', input focus', results hover',
/// effects)`, with the machine context carried along.
pub fn transition(
    state: &FilterState,
    event: &FilterEvent,
    next_error_id: &mut dyn FnMut() -> ErrorId,
) -> Transition {
    let mut next = state.clone();
    let mut effects = FilterEffects::new();

    match (state.mode, event) {
        (FilterMode::Reading, FilterEvent::Edit) => {
            next.mode = FilterMode::Editing;
            next.input_focus = InputFocus::Focused;
            next.results_hover = ResultsHover::NotHovering;
            next.context.error = None;
            next.context.current_result = None;
        }

        (FilterMode::Editing, FilterEvent::Blur) => {
            if !state.can_blur() {
                return Transition::ignored(state);
            }
            next.mode = FilterMode::Reading;
            next.context.input_text.clear();
            next.context.error = None;
            next.context.recompute_results();
            next.context.current_result = None;
        }

        (FilterMode::Editing, FilterEvent::Change { value }) => {
            next.context.input_text.clone_from(value);
            next.context.error = None;
            next.context.recompute_results();
            next.context.current_result = None;
        }

        (FilterMode::Editing, FilterEvent::Commit { value }) => {
            if next.context.classes.contains(value) {
                let added = next.context.selected.insert(value.as_str());
                next.context.input_text.clear();
                next.context.error = None;
                next.context.recompute_results();
                next.context.current_result = None;
                if added {
                    effects.push(FilterEffect::PushSelection(
                        next.context.selected.clone(),
                    ));
                }
            } else {
                let error = ValidationError::does_not_exist(value, next_error_id());
                next.context.error = Some(error.clone());
                effects.push(FilterEffect::ValidationFailed(error));
            }
        }

        (_, FilterEvent::Remove { value }) => {
            if next.context.selected.remove(value) {
                next.context.recompute_results();
                effects.push(FilterEffect::PushSelection(next.context.selected.clone()));
            }
        }

        (_, FilterEvent::Clear) => {
            if !next.context.selected.is_empty() {
                next.context.selected = Selection::new_empty();
                next.context.recompute_results();
                effects.push(FilterEffect::PushSelection(next.context.selected.clone()));
            }
        }

        (_, FilterEvent::SetClasses { classes }) => {
            next.mode = FilterMode::Reading;
            next.context.classes = classes.clone();
            next.context.selected = next.context.selected.pruned_to(classes);
            next.context.recompute_results();
            next.context.current_result = None;
        }

        (_, FilterEvent::SetSelected { selected }) => {
            next.context.selected = selected.pruned_to(&next.context.classes);
            next.context.recompute_results();
        }

        (_, FilterEvent::SetInvert { invert }) => {
            next.context.invert = *invert;
        }

        (FilterMode::Editing, FilterEvent::FocusInput) => {
            next.input_focus = InputFocus::Focused;
        }

        (FilterMode::Editing, FilterEvent::UnfocusInput) => {
            next.input_focus = InputFocus::Unfocused;
        }

        (FilterMode::Editing, FilterEvent::MouseEnterResults) => {
            next.results_hover = ResultsHover::Hovering;
        }

        (FilterMode::Editing, FilterEvent::MouseLeaveResults) => {
            next.results_hover = ResultsHover::NotHovering;
        }

        (FilterMode::Editing, FilterEvent::NextResult) => {
            let Some(last_index) = next.context.results.len().checked_sub(1) else {
                return Transition::ignored(state);
            };
            next.context.current_result = Some(match next.context.current_result {
                None => 0,
                Some(index) => (index + 1).min(last_index),
            });
        }

        (FilterMode::Editing, FilterEvent::PreviousResult) => {
            let Some(index) = next.context.current_result else {
                return Transition::ignored(state);
            };
            next.context.current_result = Some(index.saturating_sub(1));
        }

        // Everything else is not valid in the current mode.
        (
            FilterMode::Reading,
            FilterEvent::Blur
            | FilterEvent::Change { .. }
            | FilterEvent::Commit { .. }
            | FilterEvent::FocusInput
            | FilterEvent::UnfocusInput
            | FilterEvent::MouseEnterResults
            | FilterEvent::MouseLeaveResults
            | FilterEvent::NextResult
            | FilterEvent::PreviousResult,
        )
        | (FilterMode::Editing, FilterEvent::Edit) => {
            return Transition::ignored(state);
        }
    }

    Transition::handled(next, effects)
}
