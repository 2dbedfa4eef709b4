// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

use super::ResultsPanel;
use crate::{FilterMode, FilterState, InputFocus, RangeSync, RangeValue, ResultsHover,
            ValidationError};

/// Read only snapshot of everything the view needs to render the widget. Serializes
/// to JSON for the replay binary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterView {
    pub mode: FilterMode,
    pub paths: Vec<String>,
    /// [`None`] while reading.
    pub input_focus: Option<InputFocus>,
    /// [`None`] while reading.
    pub results_hover: Option<ResultsHover>,
    pub input_text: String,
    pub results: Vec<String>,
    pub visible_results: Vec<String>,
    pub current_result: Option<usize>,
    pub selected: Vec<String>,
    pub error: Option<ValidationError>,
    pub invert: bool,
    pub staged_range: RangeValue,
    pub committed_range: RangeValue,
    pub is_default_range: bool,
    pub include_no_confidence: bool,
}

impl FilterView {
    #[must_use]
    pub fn new(
        state: &FilterState,
        range_sync: &RangeSync,
        results_panel: &ResultsPanel,
        include_no_confidence: bool,
    ) -> Self {
        let context = &state.context;
        let sub_states = state.sub_states();
        Self {
            mode: state.mode,
            paths: state.paths().into_vec(),
            input_focus: sub_states.map(|(it, _)| it),
            results_hover: sub_states.map(|(_, it)| it),
            input_text: context.input_text.clone(),
            results: context.results.clone(),
            visible_results: results_panel.visible(&context.results).to_vec(),
            current_result: context.current_result,
            selected: context.selected.to_vec(),
            error: context.error.clone(),
            invert: context.invert,
            staged_range: range_sync.staged(),
            committed_range: range_sync.committed(),
            is_default_range: range_sync.committed().is_default(),
            include_no_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterEvent, FilterMachine, assert_eq2};

    #[test]
    fn reading_view_hides_sub_states() {
        let it = FilterView::new(
            &FilterState::default(),
            &RangeSync::default(),
            &ResultsPanel::new(10),
            true,
        );
        assert_eq2!(it.paths, vec!["reading".to_string()]);
        assert_eq2!(it.input_focus, None);
        assert_eq2!(it.results_hover, None);
        assert!(it.is_default_range);
    }

    #[test]
    fn view_serializes_with_wire_names() {
        let mut machine = FilterMachine::new();
        _ = machine.send(FilterEvent::set_classes(vec!["cat"]));
        _ = machine.send(FilterEvent::Edit);

        let it = FilterView::new(
            machine.state(),
            &RangeSync::default(),
            &ResultsPanel::new(10),
            false,
        );
        let json = serde_json::to_value(&it).unwrap();

        assert_eq2!(json["mode"], "editing");
        assert_eq2!(json["input_focus"], "focused");
        assert_eq2!(json["results_hover"], "notHovering");
        assert_eq2!(json["visible_results"], serde_json::json!(["cat"]));
        assert_eq2!(json["committed_range"], serde_json::json!([0.0, 1.0]));
    }
}
