use crate::shared::errors::{AppError, AppResult};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;
use uuid::Uuid;

type ScopedValue = Arc<dyn Any + Send + Sync>;

/// Type-keyed container that owns the services of one session.
///
/// Services are registered once with [`SessionScope::manage`] and handed out
/// as `Arc` references, so every consumer observes the same instance. A child
/// scope sees everything its ancestors provide and may shadow entries for its
/// own subtree.
pub struct SessionScope {
    id: Uuid,
    entries: DashMap<TypeId, ScopedValue>,
    parent: Option<Arc<SessionScope>>,
}

impl SessionScope {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            entries: DashMap::new(),
            parent: None,
        })
    }

    /// Create a nested scope inheriting every entry of `self`.
    pub fn child(self: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            entries: DashMap::new(),
            parent: Some(Arc::clone(self)),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Register `value` in this scope.
    ///
    /// Returns `false` (and keeps the existing entry) when a value of the same
    /// type is already managed here.
    pub fn manage<T>(&self, value: T) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.manage_arc(Arc::new(value))
    }

    pub fn manage_arc<T>(&self, value: Arc<T>) -> bool
    where
        T: Send + Sync + 'static,
    {
        match self.entries.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => {
                log::warn!(
                    "Scope {}: {} is already managed, keeping the existing instance",
                    self.id,
                    std::any::type_name::<T>()
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Register `value` unless this scope already holds a `T`, and return the
    /// instance the scope ends up holding. Concurrent callers all receive the
    /// same `Arc`.
    pub fn provide_arc<T>(&self, value: Arc<T>) -> Arc<T>
    where
        T: Send + Sync + 'static,
    {
        let candidate: ScopedValue = value.clone();
        let stored = Arc::clone(
            self.entries
                .entry(TypeId::of::<T>())
                .or_insert(candidate)
                .value(),
        );
        stored.downcast::<T>().unwrap_or(value)
    }

    /// Look up `T` in this scope or the nearest ancestor providing it.
    pub fn try_state<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let local = self
            .entries
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(entry.value()));

        match local {
            Some(entry) => entry.downcast::<T>().ok(),
            None => self.parent.as_ref().and_then(|parent| parent.try_state::<T>()),
        }
    }

    /// Like [`SessionScope::try_state`] but fails loudly when nothing provides `T`.
    pub fn state<T>(&self) -> AppResult<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.try_state::<T>().ok_or_else(|| {
            AppError::ContextUnavailable(format!(
                "{} is not provided in session scope {}",
                std::any::type_name::<T>(),
                self.id
            ))
        })
    }
}
