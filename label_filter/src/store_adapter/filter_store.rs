// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap,
          sync::{Arc, Mutex, PoisonError}};

use super::{ReactiveCell, SharedCell};
use crate::{RangeValue, Selection, Vocabulary};

/// The externally owned state of one filterable entity, as four independent reactive
/// handles. Any [`ReactiveCell`] implementation can back them.
#[derive(Debug, Clone)]
pub struct FilterCells {
    pub vocabulary: Arc<dyn ReactiveCell<Vocabulary>>,
    pub selection: Arc<dyn ReactiveCell<Selection>>,
    pub range: Arc<dyn ReactiveCell<RangeValue>>,
    pub include_no_confidence: Arc<dyn ReactiveCell<bool>>,
}

impl FilterCells {
    /// Fresh in process cells: empty vocabulary and selection, full range, and entries
    /// without a confidence are included.
    #[must_use]
    pub fn new_shared() -> Self {
        Self {
            vocabulary: Arc::new(SharedCell::<Vocabulary>::default()),
            selection: Arc::new(SharedCell::<Selection>::default()),
            range: Arc::new(SharedCell::new(RangeValue::FULL)),
            include_no_confidence: Arc::new(SharedCell::new(true)),
        }
    }
}

/// Family of [`FilterCells`], keyed by entity name (eg: `"ground_truth"`,
/// `"predictions"`). Cells are created with defaults on first access and live as long as
/// the store. Cloning the store produces another handle to the same family.
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    entries: Arc<Mutex<HashMap<String, FilterCells>>>,
}

impl FilterStore {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn cells_for(&self, entity_name: &str) -> FilterCells {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(entity_name.to_string())
            .or_insert_with(FilterCells::new_shared)
            .clone()
    }

    /// Sorted.
    #[must_use]
    pub fn entity_names(&self) -> Vec<String> {
        let mut acc: Vec<String> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        acc.sort();
        acc
    }
}
