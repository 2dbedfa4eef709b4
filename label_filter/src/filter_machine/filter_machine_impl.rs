// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ErrorId, FilterEffects, FilterEvent, FilterState, transition};
use crate::{DEBUG_LABEL_FILTER, call_if_true};

/// Please do not construct this struct directly, and use [`new`](FilterMachine::new)
/// instead.
///
/// Owns the current [`FilterState`] snapshot and feeds events through [`transition`],
/// one at a time, in arrival order. Each call to [`send`](FilterMachine::send)
/// completes the whole transition (data mutated and results recomputed) before it
/// returns, so there is never a partially applied event.
///
/// It holds no handles to the outside world. The effects it returns are carried out by
/// [`crate::ExternalStoreAdapter`].
#[derive(Debug, Clone)]
pub struct FilterMachine {
    state: FilterState,
    error_id_source: fn() -> ErrorId,
}

impl Default for FilterMachine {
    fn default() -> Self { Self::new() }
}

impl FilterMachine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FilterState::default(),
            error_id_source: ErrorId::new_v4,
        }
    }

    /// Swap the [`ErrorId`] generator, eg: for deterministic ids in tests.
    #[must_use]
    pub fn with_error_id_source(mut self, error_id_source: fn() -> ErrorId) -> Self {
        self.error_id_source = error_id_source;
        self
    }

    #[must_use]
    pub fn state(&self) -> &FilterState { &self.state }

    pub fn send(&mut self, event: FilterEvent) -> FilterEffects {
        let it = transition(&self.state, &event, &mut self.error_id_source);

        call_if_true!(DEBUG_LABEL_FILTER, {
            if it.handled {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🏷️ filter transition",
                    event = %event.name(),
                    from = ?self.state.paths(),
                    to = ?it.state.paths(),
                    effects = it.effects.len()
                );
            } else {
                tracing::debug!(
                    message = "🏷️ filter event ignored",
                    event = %event.name(),
                    state = ?self.state.paths()
                );
            }
        });

        self.state = it.state;
        it.effects
    }

    /// Back to a freshly mounted machine (eg: the entry being filtered changed). The
    /// vocabulary is kept so search keeps working until the next `SET_CLASSES`.
    pub fn reset(&mut self) {
        let classes = std::mem::take(&mut self.state.context.classes);
        self.state = FilterState::default();
        self.state.context.classes = classes;
        self.state.context.recompute_results();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use uuid::Uuid;

    use super::*;
    use crate::{FilterEffect, Selection, assert_eq2};

    static NEXT_ID: AtomicU64 = AtomicU64::new(0);

    fn sequential_id() -> ErrorId {
        let it = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        ErrorId::from(Uuid::from_u128(u128::from(it)))
    }

    #[test]
    fn send_applies_events_in_order() {
        let mut it = FilterMachine::new();
        _ = it.send(FilterEvent::set_classes(vec!["cat", "dog", "bird"]));
        _ = it.send(FilterEvent::Edit);
        _ = it.send(FilterEvent::change("do"));
        assert_eq2!(it.state().context.results, vec!["dog".to_string()]);

        let effects = it.send(FilterEvent::commit("dog"));
        assert_eq2!(effects.into_vec(), vec![FilterEffect::PushSelection(
            Selection::from(vec!["dog"])
        )]);
    }

    #[test]
    fn custom_error_ids_are_used() {
        let mut it = FilterMachine::new().with_error_id_source(sequential_id);
        _ = it.send(FilterEvent::Edit);
        _ = it.send(FilterEvent::commit("x"));
        let first = it.state().context.error.clone().unwrap().id;
        _ = it.send(FilterEvent::commit("x"));
        let second = it.state().context.error.clone().unwrap().id;
        assert_ne!(first, second);
    }

    #[test]
    fn reset_keeps_vocabulary_only() {
        let mut it = FilterMachine::new();
        _ = it.send(FilterEvent::set_classes(vec!["cat", "dog"]));
        _ = it.send(FilterEvent::Edit);
        _ = it.send(FilterEvent::commit("cat"));
        _ = it.send(FilterEvent::change("d"));

        it.reset();

        assert!(it.state().matches("reading"));
        assert!(it.state().context.selected.is_empty());
        assert_eq2!(it.state().context.input_text, "");
        assert_eq2!(it.state().context.results, vec![
            "cat".to_string(),
            "dog".to_string()
        ]);
    }
}
