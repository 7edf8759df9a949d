//! Shared handles between a form and the code that reads its results

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A value owned jointly by the caller and the fields bound to it.
///
/// Cloning a binding clones the handle, not the value: a form built from a
/// clone writes into the same slot the caller later reads.
pub struct Binding<T>(Rc<RefCell<T>>);

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Binding(Rc::new(RefCell::new(value)))
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Whether both handles point at the same value
    pub fn same_as(&self, other: &Binding<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Binding<T> {
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Binding(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Binding::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&*self.0.borrow()).finish()
    }
}
