use std::{any::TypeId, collections::HashMap};

use crate::types::{BoxedFactory, TypeInfo};

/// A bound factory together with the token it was registered under.
#[derive(Clone)]
pub(crate) struct Binding {
    pub info: TypeInfo,
    pub factory: BoxedFactory,
}

/// Type-keyed factory storage. Pure storage; resolution lives in the container.
#[derive(Default)]
pub(crate) struct Registry {
    bindings: HashMap<TypeId, Binding>,
}

impl Registry {
    /// Stores `factory` under `info`, overwriting any prior binding for the
    /// same type. Last bind wins.
    pub fn bind(&mut self, info: TypeInfo, factory: BoxedFactory) {
        if let Some(previous) = self.bindings.insert(info.type_id, Binding { info, factory }) {
            tracing::debug!("rebound '{}', previous factory dropped", previous.info);
        }
    }

    /// Pure read; does not invoke the factory.
    pub fn lookup(&self, type_id: TypeId) -> Option<Binding> {
        self.bindings.get(&type_id).cloned()
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.bindings.contains_key(&type_id)
    }

    pub fn bound_types(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.bindings.values().map(|binding| binding.info)
    }
}
