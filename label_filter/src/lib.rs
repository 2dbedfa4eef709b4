// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_label_filter
//!
//! Headless state for a label filter widget: a text input with autocomplete over a
//! vocabulary of class labels, a multi-select of chosen labels, and a two sided
//! confidence range slider. All of it is bound two ways to externally owned reactive
//! state.
//!
//! The pieces, bottom up:
//!
//! 1. [`search`] derives the results list from the [`Vocabulary`], the input text and
//!    the current [`Selection`].
//! 2. [`RangeSync`] keeps a staged slider value apart from the committed one, so the
//!    external store only sees one update per drag gesture.
//! 3. [`FilterMachine`] is a statechart with a primary `reading | editing` mode and two
//!    parallel regions while editing (input focus, results hover). Its transition
//!    function [`transition`] is pure and returns [`FilterEffect`]s instead of touching
//!    the outside world.
//! 4. [`ExternalStoreAdapter`] wires the machine and the range to four [`ReactiveCell`]s
//!    (vocabulary, selection, range, include no confidence) without feedback loops.
//!
//! ```
//! use r3bl_label_filter::{ExternalStoreAdapter, FilterEvent, FilterStore,
//!                         LabelFilterConfig, ReactiveCell, Selection, Vocabulary};
//!
//! let store = FilterStore::new();
//! let cells = store.cells_for("ground_truth");
//! cells.vocabulary.set(Vocabulary::from(vec!["cat", "dog", "bird"]));
//!
//! let mut adapter = ExternalStoreAdapter::mount(cells.clone(), LabelFilterConfig::default());
//! adapter.send(FilterEvent::Edit);
//! adapter.send(FilterEvent::change("do"));
//! assert_eq!(adapter.view().results, vec!["dog".to_string()]);
//!
//! adapter.send(FilterEvent::commit("dog"));
//! assert_eq!(cells.selection.get(), Selection::from(vec!["dog"]));
//! ```
//!
//! The `label_filter_replay` binary feeds a JSON lines script of events (eg:
//! `{"type":"CHANGE","value":"do"}`) through an adapter and prints a view snapshot after
//! each one.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod config;
pub mod filter_machine;
pub mod log;
pub mod range_sync;
pub mod search_index;
pub mod store_adapter;

// Re-export.
pub use common::*;
pub use config::*;
pub use filter_machine::*;
pub use log::*;
pub use range_sync::*;
pub use search_index::*;
pub use store_adapter::*;
