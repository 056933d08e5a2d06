//! Slot-change observers.
//!
//! Callbacks fire synchronously after the slot array is updated, once
//! per mutated slot — observers never see a torn intermediate state.
//! Both an any-slot channel and per-index channels are available.

use std::collections::HashMap;
use std::fmt;

use mc_bot_item::Item;

/// Callback invoked with `(slot, old, new)` after a slot changed.
pub type SlotCallback = Box<dyn FnMut(usize, Option<&Item>, Option<&Item>)>;

/// Registered slot-change callbacks for one window.
#[derive(Default)]
pub struct SlotObservers {
    any: Vec<SlotCallback>,
    by_slot: HashMap<usize, Vec<SlotCallback>>,
}

impl SlotObservers {
    /// Register a callback for every slot update.
    pub fn on_any(&mut self, callback: impl FnMut(usize, Option<&Item>, Option<&Item>) + 'static) {
        self.any.push(Box::new(callback));
    }

    /// Register a callback for updates to one slot index.
    pub fn on_slot(
        &mut self,
        slot: usize,
        callback: impl FnMut(usize, Option<&Item>, Option<&Item>) + 'static,
    ) {
        self.by_slot.entry(slot).or_default().push(Box::new(callback));
    }

    /// Fire all callbacks registered for `slot`.
    pub fn notify(&mut self, slot: usize, old: Option<&Item>, new: Option<&Item>) {
        for callback in &mut self.any {
            callback(slot, old, new);
        }
        if let Some(callbacks) = self.by_slot.get_mut(&slot) {
            for callback in callbacks {
                callback(slot, old, new);
            }
        }
    }
}

impl fmt::Debug for SlotObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotObservers")
            .field("any", &self.any.len())
            .field("by_slot", &self.by_slot.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn any_and_per_slot_callbacks_fire() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = SlotObservers::default();

        let log = Rc::clone(&seen);
        observers.on_any(move |slot, _, _| log.borrow_mut().push(("any", slot)));
        let log = Rc::clone(&seen);
        observers.on_slot(3, move |slot, _, _| log.borrow_mut().push(("slot", slot)));

        observers.notify(1, None, None);
        observers.notify(3, None, None);

        assert_eq!(*seen.borrow(), vec![("any", 1), ("any", 3), ("slot", 3)]);
    }
}
