use std::{
    cell::RefCell,
    collections::HashSet,
    rc::Rc,
    sync::{Arc, Mutex},
};

use crate::container::Container;

/// Declares which injection slots a value exposes to a [`fill`] pass.
///
/// This is the explicit counterpart of the field reflection other DI systems
/// use: a composite type forwards the filler to each field that may hold a
/// slot, a leaf type does nothing. Fields not named by `visit_slots` are
/// invisible to the traversal and will not be wired.
///
/// ```
/// use wirebox::{Fillable, GraphFiller, Injected};
///
/// struct Greeter {
///     greeting: Injected<String>,
/// }
///
/// impl Fillable for Greeter {
///     fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
///         filler.visit(&self.greeting);
///     }
/// }
/// ```
///
/// [`fill`]: crate::Container::fill
pub trait Fillable {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>);
}

/// Walks an object tree on behalf of [`Container::fill`], attaching the
/// filling container to every slot it encounters.
///
/// Shared pointers are tracked by pointee address, so graphs with reference
/// cycles terminate: each shared node is entered at most once per pass.
pub struct GraphFiller<'c> {
    container: &'c Container,
    visited: HashSet<usize>,
}

impl<'c> GraphFiller<'c> {
    pub(crate) fn new(container: &'c Container) -> Self {
        GraphFiller {
            container,
            visited: HashSet::new(),
        }
    }

    /// Recurses into a field of the value currently being filled.
    pub fn visit<T: Fillable + ?Sized>(&mut self, value: &T) {
        value.visit_slots(self);
    }

    pub(crate) fn container(&self) -> &Container {
        self.container
    }

    /// Marks a shared pointee as visited; false means it was already entered
    /// during this pass and must not be recursed into again.
    fn enter_shared(&mut self, address: usize) -> bool {
        self.visited.insert(address)
    }
}

/// Leaf values carry no slots.
macro_rules! fillable_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fillable for $ty {
                fn visit_slots(&self, _filler: &mut GraphFiller<'_>) {}
            }
        )*
    };
}

fillable_leaf!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    str,
    String,
);

impl<T: Fillable + ?Sized> Fillable for &T {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        (**self).visit_slots(filler);
    }
}

impl<T: Fillable + ?Sized> Fillable for Box<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        (**self).visit_slots(filler);
    }
}

impl<T: Fillable> Fillable for Option<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        if let Some(value) = self {
            value.visit_slots(filler);
        }
    }
}

impl<T: Fillable> Fillable for Vec<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        self.as_slice().visit_slots(filler);
    }
}

impl<T: Fillable> Fillable for [T] {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        for value in self {
            value.visit_slots(filler);
        }
    }
}

impl<T: Fillable, const N: usize> Fillable for [T; N] {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        self.as_slice().visit_slots(filler);
    }
}

impl<T: Fillable + ?Sized> Fillable for Rc<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        if filler.enter_shared(Rc::as_ptr(self).cast::<()>() as usize) {
            (**self).visit_slots(filler);
        }
    }
}

impl<T: Fillable + ?Sized> Fillable for Arc<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        if filler.enter_shared(Arc::as_ptr(self).cast::<()>() as usize) {
            (**self).visit_slots(filler);
        }
    }
}

/// Skips on outstanding borrows; fill performs no fallible operation.
impl<T: Fillable> Fillable for RefCell<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        if let Ok(value) = self.try_borrow() {
            value.visit_slots(filler);
        }
    }
}

/// Skips on contention or poisoning; fill performs no fallible operation.
impl<T: Fillable> Fillable for Mutex<T> {
    fn visit_slots(&self, filler: &mut GraphFiller<'_>) {
        if let Ok(value) = self.try_lock() {
            value.visit_slots(filler);
        }
    }
}
