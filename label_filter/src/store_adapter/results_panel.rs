// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Vertical scroll state of the results panel, which shows at most `row_count` results
/// at a time. The highlighted result is always kept inside the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultsPanel {
    pub row_count: usize,
    pub scroll_offset_row_index: usize,
}

impl ResultsPanel {
    #[must_use]
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count: row_count.max(1),
            scroll_offset_row_index: 0,
        }
    }

    /// Scroll just enough to keep `maybe_selected_row_index` visible. With no highlight
    /// the panel goes back to the top.
    pub fn sync(&mut self, maybe_selected_row_index: Option<usize>, results_count: usize) {
        let Some(selected_row_index) = maybe_selected_row_index else {
            self.scroll_offset_row_index = 0;
            return;
        };

        if selected_row_index < self.scroll_offset_row_index {
            self.scroll_offset_row_index = selected_row_index;
        }

        if selected_row_index >= self.scroll_offset_row_index + self.row_count {
            self.scroll_offset_row_index = selected_row_index + 1 - self.row_count;
        }

        let max_offset = results_count.saturating_sub(self.row_count);
        self.scroll_offset_row_index = self.scroll_offset_row_index.min(max_offset);
    }

    #[must_use]
    pub fn visible<'a>(&self, results: &'a [String]) -> &'a [String] {
        let start = self.scroll_offset_row_index.min(results.len());
        let end = (start + self.row_count).min(results.len());
        &results[start..end]
    }

    pub fn reset(&mut self) { self.scroll_offset_row_index = 0; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn results(count: usize) -> Vec<String> { (0..count).map(|it| format!("r{it}")).collect() }

    #[test]
    fn window_follows_highlight_down_and_up() {
        let results = results(5);
        let mut it = ResultsPanel::new(2);

        for index in 0..=3 {
            it.sync(Some(index), results.len());
        }
        assert_eq2!(it.scroll_offset_row_index, 2);
        assert_eq2!(it.visible(&results), &results[2..4]);

        it.sync(Some(1), results.len());
        assert_eq2!(it.scroll_offset_row_index, 1);
    }

    #[test]
    fn no_highlight_scrolls_to_top() {
        let mut it = ResultsPanel::new(2);
        it.sync(Some(4), 5);
        it.sync(None, 5);
        assert_eq2!(it.scroll_offset_row_index, 0);
    }

    #[test]
    fn visible_handles_short_lists() {
        let results = results(1);
        let it = ResultsPanel::new(10);
        assert_eq2!(it.visible(&results).len(), 1);
        assert!(it.visible(&[]).is_empty());
    }
}
