use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Containers may be shared across threads, so anything bindable
/// needs to be Send + Sync + 'static.
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// Type-erased value produced by a factory.
pub(crate) type AnyValue = Box<dyn Any + Send + Sync>;

/// Type-erased zero-argument factory, shareable so a lookup can clone it
/// out of the registry and invoke it without holding the registry lock.
pub(crate) type BoxedFactory = Arc<dyn Fn() -> AnyValue + Send + Sync>;

/// Type Name and Type Id
///
/// Lookup is keyed by [`TypeId`] alone, so unrelated types sharing a printable
/// name can never collide; the name rides along for diagnostics.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
