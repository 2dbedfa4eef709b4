// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          sync::{Arc, Mutex, PoisonError}};

use super::{FilterCells, FilterView, ResultsPanel, Subscription};
use crate::{DEBUG_LABEL_FILTER, DEBUG_LABEL_FILTER_SYNC, FilterEffect, FilterEffects,
            FilterEvent, FilterKey, FilterMachine, FilterState, LabelFilterConfig,
            RangeSync, RangeValue, Selection, Vocabulary, call_if_true};

/// A change observed on one of the external cells, waiting to be applied.
#[derive(Clone, Debug, PartialEq)]
pub enum InboundChange {
    Vocabulary(Vocabulary),
    Selection(Selection),
    Range(RangeValue),
}

type Inbox = Arc<Mutex<VecDeque<InboundChange>>>;

fn enqueue(inbox: &Inbox, change: InboundChange) {
    inbox
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back(change);
}

/// Two way binding between one [`FilterMachine`] (plus the [`RangeSync`] of its range
/// slider) and the external cells of one entity.
///
/// Inbound:
/// 1. Vocabulary changes are sent as `SET_CLASSES`. The external selection is then
///    pruned to the new vocabulary, sent as `SET_SELECTED` if the machine disagrees
///    with it, and written back only if pruning removed something.
/// 2. Selection changes are sent as `SET_SELECTED`, but only if they differ from the
///    machine's selection.
/// 3. Range changes reset the staged range, but only if they differ from the committed
///    one.
///
/// Outbound, only user edits of the selection (`COMMIT`, `REMOVE`, `CLEAR`) and range
/// commits are written to the cells. An inbound `SET_SELECTED` is never echoed back.
///
/// Cell listeners never touch the machine. They only queue an [`InboundChange`], and the
/// queue is drained in arrival order, before and after every event, so an inbound
/// notification is never applied while a transition is in flight.
#[derive(Debug)]
pub struct ExternalStoreAdapter {
    machine: FilterMachine,
    range_sync: RangeSync,
    results_panel: ResultsPanel,
    cells: FilterCells,
    inbox: Inbox,
    subscriptions: Vec<Subscription>,
    config: LabelFilterConfig,
}

impl ExternalStoreAdapter {
    /// Subscribe to `cells` and run the initial reconciliation (rules 1 and 2) against
    /// their current values.
    #[must_use]
    pub fn mount(cells: FilterCells, config: LabelFilterConfig) -> Self {
        Self::mount_with_machine(cells, config, FilterMachine::new())
    }

    /// Same as [`mount`](Self::mount), with a preconfigured machine (eg: one with a
    /// deterministic error id source).
    #[must_use]
    pub fn mount_with_machine(
        cells: FilterCells,
        config: LabelFilterConfig,
        machine: FilterMachine,
    ) -> Self {
        let mut it = Self {
            machine,
            range_sync: RangeSync::new(cells.range.get()),
            results_panel: ResultsPanel::new(config.results_panel_row_count),
            cells,
            inbox: Arc::default(),
            subscriptions: vec![],
            config,
        };
        it.attach();
        it
    }

    fn attach(&mut self) {
        let inbox = Arc::clone(&self.inbox);
        self.subscriptions
            .push(self.cells.vocabulary.subscribe(Box::new(move |value: &Vocabulary| {
                enqueue(&inbox, InboundChange::Vocabulary(value.clone()));
            })));

        let inbox = Arc::clone(&self.inbox);
        self.subscriptions
            .push(self.cells.selection.subscribe(Box::new(move |value: &Selection| {
                enqueue(&inbox, InboundChange::Selection(value.clone()));
            })));

        let inbox = Arc::clone(&self.inbox);
        self.subscriptions
            .push(self.cells.range.subscribe(Box::new(move |value: &RangeValue| {
                enqueue(&inbox, InboundChange::Range(*value));
            })));

        self.apply_inbound(InboundChange::Vocabulary(self.cells.vocabulary.get()));
        self.apply_inbound(InboundChange::Selection(self.cells.selection.get()));
        self.pump();
    }

    /// Point the widget at another entity's cells (eg: the user moved to the next
    /// sample). Old subscriptions are dropped, queued changes discarded, the machine is
    /// reset and the staged range is taken from the new cells.
    pub fn rebind(&mut self, cells: FilterCells) {
        self.subscriptions.clear();
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();

        self.cells = cells;
        self.machine.reset();
        self.range_sync = RangeSync::new(self.cells.range.get());
        self.results_panel.reset();

        call_if_true!(DEBUG_LABEL_FILTER, {
            tracing::debug!(message = "🏷️ filter rebound to new cells");
        });

        self.attach();
    }

    /// Drain queued inbound changes. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut count = 0;
        loop {
            let maybe_change = self
                .inbox
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front();
            let Some(change) = maybe_change else {
                break;
            };
            self.apply_inbound(change);
            count += 1;
        }
        count
    }

    fn apply_inbound(&mut self, change: InboundChange) {
        call_if_true!(DEBUG_LABEL_FILTER_SYNC, {
            tracing::debug!(message = "🔁 inbound change", change = ?change);
        });

        match change {
            InboundChange::Vocabulary(vocabulary) => {
                let external = self.cells.selection.get();
                let pruned = external.pruned_to(&vocabulary);
                self.send_to_machine(FilterEvent::SetClasses {
                    classes: vocabulary,
                });
                // A selection that arrived ahead of its vocabulary was pruned by the
                // machine, so it has to be replayed now that its labels are known.
                if pruned != self.machine.state().context.selected {
                    self.send_to_machine(FilterEvent::SetSelected {
                        selected: pruned.clone(),
                    });
                }
                if pruned != external {
                    self.cells.selection.set(pruned);
                }
            }
            InboundChange::Selection(selection) => {
                if selection != self.machine.state().context.selected {
                    self.send_to_machine(FilterEvent::SetSelected { selected: selection });
                }
            }
            InboundChange::Range(range) => {
                if range != self.range_sync.committed() {
                    self.range_sync.sync_committed(range);
                }
            }
        }
    }

    fn send_to_machine(&mut self, event: FilterEvent) -> FilterEffects {
        let effects = self.machine.send(event);
        for effect in &effects {
            match effect {
                FilterEffect::PushSelection(selection) => {
                    call_if_true!(DEBUG_LABEL_FILTER_SYNC, {
                        tracing::debug!(message = "🔁 push selection", selection = %selection);
                    });
                    self.cells.selection.set(selection.clone());
                }
                FilterEffect::ValidationFailed(error) => {
                    tracing::debug!(
                        message = "🏷️ commit rejected",
                        reason = %error.message,
                        id = %error.id
                    );
                }
            }
        }
        let context = &self.machine.state().context;
        self.results_panel
            .sync(context.current_result, context.results.len());
        effects
    }

    /// Apply one user (or view) event and carry out its effects.
    pub fn send(&mut self, event: FilterEvent) -> FilterEffects {
        self.pump();
        let effects = self.send_to_machine(event);
        self.pump();
        effects
    }

    /// Apply a key press, which may expand into several events.
    pub fn press(&mut self, key: FilterKey) -> FilterEffects {
        let mut acc = FilterEffects::new();
        for event in key.to_events(self.machine.state()) {
            acc.extend(self.send(event));
        }
        acc
    }

    /// Slider moved. Stays local until [`release_range`](Self::release_range).
    pub fn drag_range(&mut self, value: RangeValue) {
        self.pump();
        self.range_sync.update_staged(value);
    }

    /// Slider released. Returns `true` if a new range was written to the range cell.
    pub fn release_range(&mut self) -> bool {
        self.pump();
        let maybe_pushed = self.range_sync.commit();
        self.push_range(maybe_pushed)
    }

    /// Back to `(0, 1)`. Returns `true` if the range cell had to be updated.
    pub fn reset_range(&mut self) -> bool {
        self.pump();
        let maybe_pushed = self.range_sync.reset();
        self.push_range(maybe_pushed)
    }

    fn push_range(&mut self, maybe_range: Option<RangeValue>) -> bool {
        let Some(range) = maybe_range else {
            return false;
        };
        call_if_true!(DEBUG_LABEL_FILTER_SYNC, {
            tracing::debug!(message = "🔁 push range", range = %range);
        });
        self.cells.range.set(range);
        self.pump();
        true
    }

    #[must_use]
    pub fn include_no_confidence(&self) -> bool { self.cells.include_no_confidence.get() }

    pub fn set_include_no_confidence(&self, value: bool) {
        self.cells.include_no_confidence.set(value);
    }

    pub fn toggle_include_no_confidence(&self) {
        self.set_include_no_confidence(!self.include_no_confidence());
    }

    #[must_use]
    pub fn state(&self) -> &FilterState { self.machine.state() }

    #[must_use]
    pub fn range_sync(&self) -> &RangeSync { &self.range_sync }

    #[must_use]
    pub fn cells(&self) -> &FilterCells { &self.cells }

    #[must_use]
    pub fn config(&self) -> &LabelFilterConfig { &self.config }

    #[must_use]
    pub fn view(&self) -> FilterView {
        FilterView::new(
            self.machine.state(),
            &self.range_sync,
            &self.results_panel,
            self.include_no_confidence(),
        )
    }
}
