// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          sync::{Arc, Mutex, MutexGuard, PoisonError, Weak}};

/// Callback invoked with the new value after a cell changes.
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Externally owned read / write handle to one piece of reactive state (the selection,
/// the vocabulary, the confidence range, ...). The external store owns the value, the
/// widget only reads it, writes it, and listens for changes.
pub trait ReactiveCell<T>: Debug + Send + Sync {
    fn get(&self) -> T;

    /// Listeners are notified after the value is stored, and only if it changed.
    fn set(&self, value: T);

    /// The listener stays registered until the returned [`Subscription`] is dropped.
    fn subscribe(&self, listener: Listener<T>) -> Subscription;
}

/// RAII handle for a listener registered with [`ReactiveCell::subscribe`]. Dropping it
/// unsubscribes.
pub struct Subscription {
    maybe_unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            maybe_unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Same as dropping it, but reads better at call sites.
    pub fn unsubscribe(self) { drop(self); }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.maybe_unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Subscription {{ active: {} }}", self.maybe_unsubscribe.is_some())
    }
}

type SubscriberId = u64;
type SharedListener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct CellInner<T> {
    value: T,
    listeners: Vec<(SubscriberId, SharedListener<T>)>,
    next_id: SubscriberId,
}

/// In process [`ReactiveCell`]. Cloning it produces another handle to the same value.
///
/// Listeners are called after the lock is released, so a listener may read (or even
/// write) the cell without deadlocking.
pub struct SharedCell<T> {
    inner: Arc<Mutex<CellInner<T>>>,
}

impl<T> Clone for SharedCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for SharedCell<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<T> SharedCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CellInner {
                value,
                listeners: vec![],
                next_id: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CellInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize { self.lock().listeners.len() }
}

impl<T> ReactiveCell<T> for SharedCell<T>
where
    T: Clone + PartialEq + Debug + Send + 'static,
{
    fn get(&self) -> T { self.lock().value.clone() }

    fn set(&self, value: T) {
        let listeners: Vec<SharedListener<T>> = {
            let mut inner = self.lock();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, it)| Arc::clone(it)).collect()
        };
        for listener in listeners {
            listener(&value);
        }
    }

    fn subscribe(&self, listener: Listener<T>) -> Subscription {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::from(listener)));
            id
        };

        let weak: Weak<Mutex<CellInner<T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .listeners
                    .retain(|(it, _)| *it != id);
            }
        })
    }
}

impl<T: Debug> Debug for SharedCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        write!(
            f,
            "SharedCell {{ value: {:?}, subscribers: {} }}",
            inner.value,
            inner.listeners.len()
        )
    }
}
