//! Runtime dependency container with lazily-resolved injection slots.
//!
//! A [`Container`] has three primary operations. [`bind`] stores a
//! zero-argument factory for a type. [`resolve`] invokes the bound factory
//! and returns the instance, failing with [`InjectError::NotBound`] if no
//! factory was registered. [`fill`] wires every [`Injected`] slot reachable
//! from an already-constructed object to the container, without resolving
//! anything yet.
//!
//! The container can be used directly through `bind` and `resolve`, but that
//! either keeps a container at global scope or threads it down through the
//! object graph. The intended usage is the injection slot: declare
//! dependencies as [`Injected<T>`] fields, list them in the owner's
//! [`Fillable`] impl, and call `fill` once on the root object. Every slot in
//! the tree is then resolved lazily from the same container on first access,
//! and a resolved value's own slots are wired in turn, so nested dependency
//! chains resolve without any object knowing about its grandchildren.
//!
//! ```
//! use wirebox::{Container, Fillable, GraphFiller, Injected};
//!
//! struct Greeter {
//!     greeting: Injected<String>,
//! }
//!
//! impl Fillable for Greeter {
//!     fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
//!         filler.visit(&self.greeting);
//!     }
//! }
//!
//! let container = Container::new();
//! container.bind(|| "Hello, World".to_string());
//!
//! let greeter = Greeter { greeting: Injected::new() };
//! container.fill(&greeter);
//! assert_eq!(*greeter.greeting.get().unwrap(), "Hello, World");
//! ```
//!
//! Factories decide lifetime: build a fresh value inside the closure for
//! per-call instances, or capture and return an existing one for singletons.
//! Each slot additionally memoizes whatever it resolved, so repeated access
//! through the same slot always yields the same shared instance.
//!
//! [`bind`]: Container::bind
//! [`resolve`]: Container::resolve
//! [`fill`]: Container::fill

mod container;
mod errors;
mod filler;
mod registry;
mod slot;
mod types;

pub use container::Container;
pub use errors::InjectError;
pub use filler::{Fillable, GraphFiller};
pub use slot::Injected;
pub use types::{Injectable, TypeInfo};
