//! Fragment storage
//!
//! The router never touches the browser directly; it reads and writes the
//! current fragment through [`Location`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Something that holds the addressable fragment (without the leading `#`)
pub trait Location {
    /// Current fragment, without the leading `#`
    fn fragment(&self) -> String;

    /// Replace the fragment
    fn set_fragment(&self, fragment: &str);
}

/// In-memory location for tests and non-browser hosts
///
/// Clones share the same fragment, so a test can keep one handle to simulate
/// back/forward navigation while the router owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    fragment: Rc<RefCell<String>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryLocation {
    /// Start at a given fragment, e.g. a deep link
    pub fn at(fragment: &str) -> Self {
        let location = Self::default();
        *location.fragment.borrow_mut() = fragment.trim_start_matches('#').to_string();
        location
    }

    /// Change the fragment from outside the router without counting a write
    pub fn simulate_external(&self, fragment: &str) {
        *self.fragment.borrow_mut() = fragment.trim_start_matches('#').to_string();
    }

    /// Current fragment, for assertions
    pub fn fragment_string(&self) -> String {
        self.fragment.borrow().clone()
    }

    /// Number of `set_fragment` calls made through this location
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn set_fragment(&self, fragment: &str) {
        *self.fragment.borrow_mut() = fragment.to_string();
        self.writes.set(self.writes.get() + 1);
    }
}

impl<L: Location + ?Sized> Location for Rc<L> {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn set_fragment(&self, fragment: &str) {
        (**self).set_fragment(fragment)
    }
}
