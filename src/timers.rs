//! Ownership of pending timer handles.
//!
//! Browser timer handles cancel themselves when dropped, so holding the one
//! live handle of a chain here is enough to cancel it: storing a successor
//! drops the predecessor, and clearing the slot drops whatever is pending.

use std::{cell::RefCell, rc::Rc};

/// Shared holder for at most one pending timer handle.
pub struct TimerSlot<H> {
    pending: Rc<RefCell<Option<H>>>,
}

impl<H> Clone for TimerSlot<H> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
        }
    }
}

impl<H> TimerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handle`, dropping the previously pending one.
    pub fn replace(&self, handle: H) {
        let previous = self.pending.borrow_mut().replace(handle);
        // Dropped outside the borrow: a handle's drop may reach this slot.
        drop(previous);
    }

    pub fn clear(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
