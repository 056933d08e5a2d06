//! Stack-transfer primitives shared by the click handlers.
//!
//! All mutation goes through [`Window::update_slot`], so every touched
//! slot shows up in the diff and fires observers exactly once per
//! write.

use mc_bot_item::Item;

use crate::context::ClickContext;
use crate::window::Window;

impl Window {
    /// Indices of partial stacks in `[start, end)` that can absorb
    /// `proto`. The crafting result slot and `exclude` (normally the
    /// source slot) are never candidates.
    pub(crate) fn matching_partial_slots(
        &self,
        start: usize,
        end: usize,
        proto: &Item,
        exclude: Option<usize>,
    ) -> Vec<usize> {
        let end = end.min(self.slots.len());
        (start..end)
            .filter(|&i| self.crafting_result_slot != Some(i) && exclude != Some(i))
            .filter(|&i| {
                self.slots[i]
                    .as_ref()
                    .is_some_and(|item| item.stacks_with(proto) && !item.is_full())
            })
            .collect()
    }

    /// Fast-transfer the stack at `src` into `[start, end)`: top up
    /// matching partial stacks first, then move the leftover into the
    /// first (or last, when `last_to_first`) empty slot.
    pub(crate) fn fill_and_dump(&mut self, src: usize, start: usize, end: usize, last_to_first: bool) {
        let Some(item) = self.slots[src].clone() else {
            return;
        };
        let mut candidates = self.matching_partial_slots(start, end, &item, Some(src));
        if last_to_first {
            candidates.reverse();
        }
        self.fill_slots_from(&candidates, src);
        if self.slots[src].is_some() {
            self.dump_item(src, start, end, last_to_first);
        }
    }

    /// Pour the stack at `src` into the listed slots, in order, until it
    /// is exhausted.
    pub(crate) fn fill_slots_from(&mut self, targets: &[usize], src: usize) {
        for &target in targets {
            if self.slots[src].is_none() {
                break;
            }
            self.fill_slot_from(target, src);
        }
    }

    /// Merge the stack at `src` into the stack at `dst`, capping at the
    /// destination's stack size and leaving any remainder at `src`.
    pub(crate) fn fill_slot_from(&mut self, dst: usize, src: usize) {
        let (Some(into), Some(from)) = (self.slots[dst].clone(), self.slots[src].clone()) else {
            return;
        };
        let merged = into.count + from.count;
        if merged <= into.stack_size {
            self.update_slot(dst, Some(into.with_count(merged)));
            self.update_slot(src, None);
        } else {
            self.update_slot(dst, Some(into.with_count(into.stack_size)));
            self.update_slot(src, Some(from.with_count(merged - into.stack_size)));
        }
    }

    /// Move the whole stack at `src` into an empty slot of `[start, end)`.
    /// Returns the destination, or `None` when the range has no usable
    /// empty slot.
    pub(crate) fn dump_item(
        &mut self,
        src: usize,
        start: usize,
        end: usize,
        last_to_first: bool,
    ) -> Option<usize> {
        let empty = if last_to_first {
            self.last_empty_slot_range(start, end)
        } else {
            self.first_empty_slot_range(start, end)
        };
        let dst = empty.filter(|&slot| self.crafting_result_slot != Some(slot))?;
        let item = self.slots[src].clone();
        self.update_slot(dst, item);
        self.update_slot(src, None);
        Some(dst)
    }

    /// Pick up half of the stack at `slot` (rounded up) onto the cursor.
    pub(crate) fn split_slot(&mut self, slot: usize) {
        let Some(item) = self.slots[slot].clone() else {
            return;
        };
        let take = item.count.div_ceil(2);
        self.selected_item = Some(item.with_count(take));
        let rest = item.count - take;
        self.update_slot(slot, (rest > 0).then(|| item.with_count(rest)));
    }

    /// Exchange the cursor stack with the contents of `slot`.
    pub(crate) fn swap_selected(&mut self, slot: usize) {
        let slot_item = self.slots[slot].clone();
        let held = self.selected_item.take();
        self.update_slot(slot, held);
        self.selected_item = slot_item;
    }

    /// Pour the cursor stack into `slot`: the whole stack when
    /// `until_full`, otherwise exactly one unit. The slot must already
    /// hold a matching stack.
    pub(crate) fn fill_slot_with_selected(&mut self, slot: usize, until_full: bool) {
        let (Some(item), Some(sel)) = (self.slots[slot].clone(), self.selected_item.clone()) else {
            return;
        };
        if until_full {
            let merged = item.count + sel.count;
            if merged <= item.stack_size {
                self.update_slot(slot, Some(item.with_count(merged)));
                self.selected_item = None;
            } else {
                self.update_slot(slot, Some(item.with_count(item.stack_size)));
                self.selected_item = Some(sel.with_count(merged - item.stack_size));
            }
        } else if item.count < item.stack_size {
            self.update_slot(slot, Some(item.with_count(item.count + 1)));
            let rest = sel.count - 1;
            self.selected_item = (rest > 0).then(|| sel.with_count(rest));
        }
    }

    /// Drop the cursor stack into the world: all of it, or one unit.
    pub(crate) fn drop_selected(&mut self, whole_stack: bool) {
        let Some(sel) = self.selected_item.as_mut() else {
            return;
        };
        if whole_stack || sel.count == 1 {
            self.selected_item = None;
        } else {
            sel.count -= 1;
        }
    }

    /// Guarded removal used by double-click consolidation: refuses
    /// outright when pickup is denied, and refuses partial removal when
    /// the slot does not also allow modification.
    pub(crate) fn try_remove(
        &mut self,
        slot: usize,
        available: u16,
        wanted: u16,
        ctx: &ClickContext,
    ) -> Option<Item> {
        if !self.may_pickup(slot, ctx) {
            return None;
        }
        let current = self.slots[slot].as_ref()?;
        if !self.allow_modification(slot, ctx) && wanted < current.count {
            return None;
        }
        self.remove(slot, available.min(wanted))
    }

    /// Split `amount` items off the stack at `slot`, emptying the slot
    /// when it reaches zero.
    pub fn remove(&mut self, slot: usize, amount: u16) -> Option<Item> {
        let item = self.slots[slot].clone()?;
        let taken = amount.min(item.count);
        if taken == 0 {
            return None;
        }
        let rest = item.count - taken;
        self.update_slot(slot, (rest > 0).then(|| item.with_count(rest)));
        Some(item.with_count(taken))
    }
}
