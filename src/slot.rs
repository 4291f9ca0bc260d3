use std::{
    fmt::Debug,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    container::Container,
    errors::InjectError,
    filler::{Fillable, GraphFiller},
    types::{Injectable, TypeInfo},
};

/// A lazily-resolved injection slot.
///
/// Declare one as a field wherever a dependency is needed, list it in the
/// owner's [`Fillable`] impl, and hand the owner to [`Container::fill`] (or
/// construct it through [`Container::resolve`]). The slot stays empty until
/// its first [`get`], which resolves the value through the attached container
/// and caches it; every later `get` returns the same shared instance.
///
/// A freshly constructed slot has no container and no value. Accessing it
/// before any fill pass yields [`InjectError::Unfilled`] rather than
/// aborting, so callers can recover or propagate.
///
/// [`get`]: Injected::get
pub struct Injected<T> {
    inner: Mutex<SlotInner<T>>,
}

struct SlotInner<T> {
    container: Option<Container>,
    value: Option<Arc<T>>,
}

impl<T> Default for Injected<T> {
    fn default() -> Self {
        Injected {
            inner: Mutex::new(SlotInner {
                container: None,
                value: None,
            }),
        }
    }
}

impl<T> Injected<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory panicking mid-resolution poisons the lock but leaves the
    /// slot consistent (nothing was cached), so the poison is cleared and
    /// the next access simply retries.
    fn lock(&self) -> MutexGuard<'_, SlotInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Forces the slot to the given value, bypassing the container.
    ///
    /// The slot is resolved afterwards regardless of its prior state; the
    /// assigned value takes precedence over whatever the container would
    /// have produced. This is the only way to override resolution.
    pub fn set(&self, value: T) {
        self.set_shared(Arc::new(value));
    }

    /// [`set`](Injected::set) for callers that already hold a shared handle.
    pub fn set_shared(&self, value: Arc<T>) {
        self.lock().value = Some(value);
    }

    /// Returns the cached value without ever triggering resolution.
    pub fn try_get(&self) -> Option<Arc<T>> {
        self.lock().value.clone()
    }

    /// Whether the slot holds a value, either resolved or directly assigned.
    pub fn is_resolved(&self) -> bool {
        self.lock().value.is_some()
    }

    /// Whether a fill pass has attached a container to this slot.
    pub fn is_filled(&self) -> bool {
        self.lock().container.is_some()
    }

    pub(crate) fn attach(&self, container: Container) {
        self.lock().container = Some(container);
    }
}

impl<T: Injectable + Fillable> Injected<T> {
    /// Accesses the dependency, resolving it on first use.
    ///
    /// The slot lock is held across resolution, so concurrent first accesses
    /// invoke the bound factory at most once; the losers observe the cached
    /// value. Fails with [`InjectError::Unfilled`] if no container was ever
    /// attached, or propagates [`InjectError::NotBound`] from resolution.
    pub fn get(&self) -> Result<Arc<T>, InjectError> {
        let mut inner = self.lock();
        if let Some(value) = &inner.value {
            return Ok(value.clone());
        }

        let Some(container) = &inner.container else {
            return Err(InjectError::Unfilled(TypeInfo::of::<T>().type_name));
        };

        let value = Arc::new(container.resolve::<T>()?);
        inner.value = Some(value.clone());
        Ok(value)
    }
}

/// Attaches the filling container. The slot's own value, resolved or not, is
/// never descended into; its dependencies are wired when it resolves.
impl<T: Injectable> Fillable for Injected<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        self.attach(filler.container().clone());
    }
}

impl<T> Debug for Injected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Injected")
            .field("type", &std::any::type_name::<T>())
            .field("resolved", &inner.value.is_some())
            .field("filled", &inner.container.is_some())
            .finish()
    }
}
