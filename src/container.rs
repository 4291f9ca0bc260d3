use std::{
    any::TypeId,
    fmt::Debug,
    sync::{Arc, RwLock},
};

use crate::{
    errors::InjectError,
    filler::{Fillable, GraphFiller},
    registry::Registry,
    types::{AnyValue, Injectable, TypeInfo},
};

/// The resolution authority: one registry, shared by every injection slot the
/// container has filled.
///
/// A `Container` is a cheap clonable handle; all clones share the same
/// registry. Slots keep their filling container alive through such a clone,
/// so the registry outlives every object wired against it. The container
/// never owns the objects it resolves or fills.
///
/// ```
/// use wirebox::Container;
///
/// let container = Container::new();
/// container.bind(|| 15_i32);
/// assert_eq!(container.resolve::<i32>().unwrap(), 15);
/// ```
#[derive(Clone, Default)]
pub struct Container(Arc<ContainerInner>);

#[derive(Default)]
struct ContainerInner {
    registry: RwLock<Registry>,
}

impl Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.0.registry.read().unwrap();
        let mut map = f.debug_struct("Container");
        for info in registry.bound_types() {
            map.field(info.type_name, &"bound");
        }
        map.finish()
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a zero-argument factory for `T`, replacing any earlier binding.
    ///
    /// Whether `resolve` yields a fresh instance per call or a shared
    /// singleton is entirely up to the closure: build a new value inside it
    /// for per-call instances, or capture and return an existing one for
    /// singleton behaviour.
    pub fn bind<T: Injectable>(&self, factory: impl Fn() -> T + Send + Sync + 'static) {
        let info = TypeInfo::of::<T>();
        tracing::debug!("binding factory for '{}'", info);
        let erased = Arc::new(move || Box::new(factory()) as AnyValue);
        self.0.registry.write().unwrap().bind(info, erased);
    }

    /// Resolves a bound `T`, wiring any injection slots it carries.
    ///
    /// Invokes the bound factory, hands the produced instance to [`fill`] so
    /// its own slots become resolvable against this container, and returns
    /// it. Fails with [`InjectError::NotBound`] if `T` was never bound.
    ///
    /// [`fill`]: Container::fill
    pub fn resolve<T: Injectable + Fillable>(&self) -> Result<T, InjectError> {
        let info = TypeInfo::of::<T>();
        let binding = self.0.registry.read().unwrap().lookup(TypeId::of::<T>());
        let Some(binding) = binding else {
            tracing::debug!("resolve of unbound type '{}'", info);
            return Err(InjectError::NotBound(info.type_name));
        };

        // The registry lock is already released here: the factory is free to
        // bind or resolve re-entrantly on this same container.
        let value = (binding.factory)()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .expect("binding is keyed by the type its factory produces");

        tracing::debug!("resolved instance of '{}'", info);
        self.fill(&value);
        Ok(value)
    }

    /// Wires every injection slot reachable from `object` to this container.
    ///
    /// Slots are only attached, never resolved; resolution happens on first
    /// access. Filling the same object again re-attaches its slots to this
    /// container. Never fails.
    pub fn fill<T: Fillable + ?Sized>(&self, object: &T) {
        let mut filler = GraphFiller::new(self);
        filler.visit(object);
    }

    /// Checks whether a factory is currently bound for `T`.
    pub fn is_bound<T: Injectable>(&self) -> bool {
        self.0.registry.read().unwrap().contains(TypeId::of::<T>())
    }
}
