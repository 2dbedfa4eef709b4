// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use super::{FilterEvent, FilterState};

pub type KeyEvents = SmallVec<[FilterEvent; 3]>;

/// The keys the text input reacts to. Everything else is plain typing, which the view
/// reports as [`FilterEvent::Change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKey {
    Enter,
    Esc,
    Up,
    Down,
}

impl FilterKey {
    /// Translate a key press into the events to send, given the current state.
    ///
    /// - <kbd>Enter</kbd> commits the highlighted result if there is one, or the input
    ///   text otherwise.
    /// - <kbd>Esc</kbd> cancels: it releases both the input focus and the results hover
    ///   regions so that the guarded `BLUR` goes through. Uncommitted text is discarded,
    ///   the selection is untouched.
    /// - <kbd>Up</kbd> / <kbd>Down</kbd> move the highlight through the results.
    #[must_use]
    pub fn to_events(self, state: &FilterState) -> KeyEvents {
        match self {
            FilterKey::Enter => {
                let value = state
                    .context
                    .highlighted_result()
                    .unwrap_or(state.context.input_text.as_str());
                smallvec![FilterEvent::commit(value)]
            }
            FilterKey::Esc => smallvec![
                FilterEvent::UnfocusInput,
                FilterEvent::MouseLeaveResults,
                FilterEvent::Blur,
            ],
            FilterKey::Up => smallvec![FilterEvent::PreviousResult],
            FilterKey::Down => smallvec![FilterEvent::NextResult],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterMachine, assert_eq2};

    fn press(machine: &mut FilterMachine, key: FilterKey) {
        for event in key.to_events(machine.state()) {
            _ = machine.send(event);
        }
    }

    fn machine() -> FilterMachine {
        let mut it = FilterMachine::new();
        _ = it.send(FilterEvent::set_classes(vec!["cat", "dog", "bird"]));
        _ = it.send(FilterEvent::Edit);
        it
    }

    #[test]
    fn enter_commits_input_text() {
        let mut it = machine();
        _ = it.send(FilterEvent::change("dog"));
        press(&mut it, FilterKey::Enter);
        assert_eq2!(it.state().context.selected.to_vec(), vec!["dog".to_string()]);
    }

    #[test]
    fn enter_prefers_highlighted_result() {
        let mut it = machine();
        _ = it.send(FilterEvent::change("i"));
        press(&mut it, FilterKey::Down);
        press(&mut it, FilterKey::Enter);
        assert_eq2!(it.state().context.selected.to_vec(), vec!["bird".to_string()]);
        assert_eq2!(it.state().context.error, None);
    }

    #[test]
    fn esc_cancels_even_while_hovering() {
        let mut it = machine();
        _ = it.send(FilterEvent::commit("cat"));
        _ = it.send(FilterEvent::change("do"));
        _ = it.send(FilterEvent::MouseEnterResults);

        press(&mut it, FilterKey::Esc);

        assert!(it.state().matches("reading"));
        assert_eq2!(it.state().context.input_text, "");
        assert_eq2!(it.state().context.selected.to_vec(), vec!["cat".to_string()]);
    }

    #[test]
    fn up_and_down_map_to_result_navigation() {
        let state = FilterState::default();
        assert_eq2!(FilterKey::Up.to_events(&state).into_vec(), vec![
            FilterEvent::PreviousResult
        ]);
        assert_eq2!(FilterKey::Down.to_events(&state).into_vec(), vec![
            FilterEvent::NextResult
        ]);
    }
}
