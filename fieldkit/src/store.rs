//! Shared value binding between a field and its owner.

use std::sync::{Arc, RwLock};

/// Where a store write came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditOrigin {
    /// Written by the field itself in response to the user.
    UserEdit,
    /// Written by the caller owning the binding.
    #[default]
    ExternalUpdate,
}

type Listener<T> = Arc<dyn Fn(&T, EditOrigin) + Send + Sync>;

#[derive(Debug)]
struct StoreInner<T> {
    value: T,
    origin: EditOrigin,
    revision: u64,
}

/// Shared value binding between a field and its owner.
///
/// `ValueStore<T>` is cheap to clone; clones share the same value and
/// listener list. Every write bumps the revision, records its origin and
/// notifies listeners after the write lock is released, so listeners may
/// read or write the store.
///
/// # Example
///
/// ```ignore
/// let amount = ValueStore::new(String::new());
/// amount.subscribe(|value, origin| log::info!("amount = {value} ({origin:?})"));
///
/// let mut field = NumberField::new(NumberFieldConfig::new(), amount.clone())?;
/// amount.set("1500".to_string()); // picked up by field.sync()
/// ```
pub struct ValueStore<T> {
    inner: Arc<RwLock<StoreInner<T>>>,
    listeners: Arc<RwLock<Vec<Listener<T>>>>,
}

impl<T> ValueStore<T> {
    /// Create a new store; the initial value counts as revision 0.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                value,
                origin: EditOrigin::ExternalUpdate,
                revision: 0,
            })),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().value.clone())
    }

    /// Set a new value as the binding's owner.
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        self.set_from(value, EditOrigin::ExternalUpdate);
    }

    /// Set a new value, tagging where it came from.
    pub fn set_from(&self, value: T, origin: EditOrigin)
    where
        T: Clone,
    {
        let written = match self.inner.write() {
            Ok(mut guard) => {
                guard.value = value;
                guard.origin = origin;
                guard.revision += 1;
                guard.value.clone()
            }
            Err(_) => return,
        };
        self.notify(&written, origin);
    }

    /// Origin of the last write.
    pub fn origin(&self) -> EditOrigin {
        self.inner
            .read()
            .map(|guard| guard.origin)
            .unwrap_or_default()
    }

    /// Number of writes so far.
    pub fn revision(&self) -> u64 {
        self.inner.read().map(|guard| guard.revision).unwrap_or(0)
    }

    /// Value, origin and revision read under one lock.
    pub fn snapshot(&self) -> (T, EditOrigin, u64)
    where
        T: Clone,
    {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (guard.value.clone(), guard.origin, guard.revision)
    }

    /// Register a callback run after every write.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&T, EditOrigin) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.listeners.write() {
            guard.push(Arc::new(listener));
        }
    }

    fn notify(&self, value: &T, origin: EditOrigin) {
        let listeners: Vec<Listener<T>> = match self.listeners.read() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        for listener in &listeners {
            listener(value, origin);
        }
    }
}

impl<T> Clone for ValueStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T: Default> Default for ValueStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.read() {
            Ok(guard) => f
                .debug_struct("ValueStore")
                .field("value", &guard.value)
                .field("origin", &guard.origin)
                .field("revision", &guard.revision)
                .finish(),
            Err(_) => f.write_str("ValueStore { <poisoned> }"),
        }
    }
}
