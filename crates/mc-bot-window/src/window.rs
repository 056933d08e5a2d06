//! The `Window` aggregate: slot array, cursor stack, and read surface.
//!
//! A window is constructed once per server-opened screen with fixed
//! geometry and mutated only through the click dispatcher for its
//! lifetime. Slot indices follow the protocol layout: container slots
//! first, then the persistent inventory region, whose last nine slots
//! are the hotbar.

use std::ops::Range;

use mc_bot_item::Item;
use serde_json::Value;
use tracing::debug;

use crate::click::{Click, SlotChange};
use crate::observe::SlotObservers;
use crate::policy::WindowKind;

/// One open container screen plus the player's cursor stack.
#[derive(Debug)]
pub struct Window {
    /// Window identifier; 0 is the player's own inventory screen, which
    /// carries extra armor/offhand slot rules on top of `kind`.
    pub id: u32,
    pub kind: WindowKind,
    pub title: String,
    /// Slot contents; index is the protocol slot number.
    pub slots: Vec<Option<Item>>,
    /// First slot of the persistent inventory region.
    pub inventory_start: usize,
    /// One past the last inventory slot.
    pub inventory_end: usize,
    /// First hotbar slot, always `inventory_end - 9`.
    pub hotbar_start: usize,
    /// Read-only result slot (crafting, furnace output, anvil result, ...).
    pub crafting_result_slot: Option<usize>,
    /// Whether the server expects a transaction confirmation for this
    /// window. Exposed for the caller; not enforced here.
    pub requires_confirmation: bool,
    /// The stack attached to the cursor, between a pickup click and the
    /// matching placement or drop. Never simultaneously in `slots`.
    pub selected_item: Option<Item>,
    observers: SlotObservers,
}

impl Window {
    /// Create a window with fixed geometry.
    ///
    /// `inventory_range` is the sub-range of slots mapped to the
    /// player's persistent inventory; its last nine slots become the
    /// hotbar.
    pub fn new(
        id: u32,
        kind: WindowKind,
        title: impl Into<String>,
        slot_count: usize,
        inventory_range: Range<usize>,
        crafting_result_slot: Option<usize>,
        requires_confirmation: bool,
    ) -> Self {
        assert!(inventory_range.end <= slot_count, "inventory range exceeds slot count");
        assert!(
            inventory_range.end - inventory_range.start >= 9,
            "inventory range too small for a hotbar"
        );
        Self {
            id,
            kind,
            title: title.into(),
            slots: vec![None; slot_count],
            inventory_start: inventory_range.start,
            inventory_end: inventory_range.end,
            hotbar_start: inventory_range.end - 9,
            crafting_result_slot,
            requires_confirmation,
            selected_item: None,
            observers: SlotObservers::default(),
        }
    }

    /// The player's own inventory screen: crafting 2x2 + result at 0,
    /// armor 5..=8, main inventory 9..36, hotbar 36..45, offhand 45.
    pub fn player_inventory() -> Self {
        Self::new(0, WindowKind::Inventory, "Inventory", 46, 9..45, Some(0), true)
    }

    /// Replace the contents of a slot, fixing up the stack's recorded
    /// slot index and notifying observers after the write.
    pub fn update_slot(&mut self, slot: usize, mut new_item: Option<Item>) {
        if let Some(item) = new_item.as_mut() {
            item.slot = slot;
        }
        let old = std::mem::replace(&mut self.slots[slot], new_item);
        self.observers.notify(slot, old.as_ref(), self.slots[slot].as_ref());
    }

    /// Register a callback for every slot update.
    pub fn on_slot_update(
        &mut self,
        callback: impl FnMut(usize, Option<&Item>, Option<&Item>) + 'static,
    ) {
        self.observers.on_any(callback);
    }

    /// Register a callback for updates to one slot index.
    pub fn on_slot(
        &mut self,
        slot: usize,
        callback: impl FnMut(usize, Option<&Item>, Option<&Item>) + 'static,
    ) {
        self.observers.on_slot(slot, callback);
    }

    /// Slots whose contents differ from the `before` snapshot, in index
    /// order. Comparison is structural and ignores the transient slot
    /// field.
    pub(crate) fn changed_slots(&self, before: &[Option<Item>]) -> Vec<SlotChange> {
        before
            .iter()
            .zip(&self.slots)
            .enumerate()
            .filter(|(_, (old, new))| !Item::same_contents(old.as_ref(), new.as_ref()))
            .map(|(location, (_, new))| SlotChange {
                location,
                item: new.clone(),
            })
            .collect()
    }

    // --- query surface -------------------------------------------------

    /// First stack in `[start, end)` matching the type filter. `metadata`
    /// and `nbt` only filter when given; `not_full` skips maxed stacks;
    /// `without_crafting_result` skips the result slot.
    pub fn find_item_range(
        &self,
        start: usize,
        end: usize,
        type_id: i32,
        metadata: Option<u16>,
        not_full: bool,
        nbt: Option<&Value>,
        without_crafting_result: bool,
    ) -> Option<&Item> {
        let end = end.min(self.slots.len());
        for i in start..end {
            if without_crafting_result && self.crafting_result_slot == Some(i) {
                continue;
            }
            if let Some(item) = &self.slots[i] {
                if item.type_id == type_id
                    && metadata.is_none_or(|m| m == item.metadata)
                    && (!not_full || item.count < item.stack_size)
                    && nbt.is_none_or(|n| Some(n) == item.nbt.as_ref())
                {
                    return Some(item);
                }
            }
        }
        None
    }

    /// All stacks in `[start, end)` matching the same filters as
    /// [`Window::find_item_range`].
    pub fn find_items_range(
        &self,
        start: usize,
        end: usize,
        type_id: i32,
        metadata: Option<u16>,
        not_full: bool,
        nbt: Option<&Value>,
        without_crafting_result: bool,
    ) -> Vec<&Item> {
        let mut items = Vec::new();
        let mut cursor = start;
        while let Some(item) =
            self.find_item_range(cursor, end, type_id, metadata, not_full, nbt, without_crafting_result)
        {
            cursor = item.slot + 1;
            items.push(item);
        }
        items
    }

    /// First stack in `[start, end)` with the given name.
    pub fn find_item_range_by_name(
        &self,
        start: usize,
        end: usize,
        name: &str,
        metadata: Option<u16>,
        not_full: bool,
    ) -> Option<&Item> {
        let end = end.min(self.slots.len());
        for i in start..end {
            if let Some(item) = &self.slots[i] {
                if item.name == name
                    && metadata.is_none_or(|m| m == item.metadata)
                    && (!not_full || item.count < item.stack_size)
                {
                    return Some(item);
                }
            }
        }
        None
    }

    /// First matching stack in the inventory region.
    pub fn find_inventory_item(&self, type_id: i32, metadata: Option<u16>, not_full: bool) -> Option<&Item> {
        self.find_item_range(self.inventory_start, self.inventory_end, type_id, metadata, not_full, None, false)
    }

    /// First stack with the given name in the inventory region.
    pub fn find_inventory_item_by_name(&self, name: &str, metadata: Option<u16>, not_full: bool) -> Option<&Item> {
        self.find_item_range_by_name(self.inventory_start, self.inventory_end, name, metadata, not_full)
    }

    /// First matching stack in the container region.
    pub fn find_container_item(&self, type_id: i32, metadata: Option<u16>, not_full: bool) -> Option<&Item> {
        self.find_item_range(0, self.inventory_start, type_id, metadata, not_full, None, false)
    }

    /// First stack with the given name in the container region.
    pub fn find_container_item_by_name(&self, name: &str, metadata: Option<u16>, not_full: bool) -> Option<&Item> {
        self.find_item_range_by_name(0, self.inventory_start, name, metadata, not_full)
    }

    /// First empty slot in `[start, end)`.
    pub fn first_empty_slot_range(&self, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.slots.len());
        (start..end).find(|&i| self.slots[i].is_none())
    }

    /// Last empty slot in `[start, end)`.
    pub fn last_empty_slot_range(&self, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.slots.len());
        (start..end).rev().find(|&i| self.slots[i].is_none())
    }

    pub fn first_empty_hotbar_slot(&self) -> Option<usize> {
        self.first_empty_slot_range(self.hotbar_start, self.inventory_end)
    }

    pub fn first_empty_container_slot(&self) -> Option<usize> {
        self.first_empty_slot_range(0, self.inventory_start)
    }

    /// First empty inventory slot, preferring the hotbar when
    /// `hotbar_first` is set.
    pub fn first_empty_inventory_slot(&self, hotbar_first: bool) -> Option<usize> {
        if hotbar_first {
            if let Some(slot) = self.first_empty_hotbar_slot() {
                return Some(slot);
            }
        }
        self.first_empty_slot_range(self.inventory_start, self.inventory_end)
    }

    /// Total item count across `[start, end)`.
    pub fn sum_range(&self, start: usize, end: usize) -> u32 {
        let end = end.min(self.slots.len());
        self.slots[start..end]
            .iter()
            .flatten()
            .map(|item| u32::from(item.count))
            .sum()
    }

    /// Item count of one type across `[start, end)`.
    pub fn count_range(&self, start: usize, end: usize, type_id: i32, metadata: Option<u16>) -> u32 {
        let end = end.min(self.slots.len());
        self.slots[start..end]
            .iter()
            .flatten()
            .filter(|item| item.type_id == type_id && metadata.is_none_or(|m| m == item.metadata))
            .map(|item| u32::from(item.count))
            .sum()
    }

    /// All stacks in `[start, end)`.
    pub fn items_range(&self, start: usize, end: usize) -> Vec<&Item> {
        let end = end.min(self.slots.len());
        self.slots[start..end].iter().flatten().collect()
    }

    /// Count of one item type in the inventory region.
    pub fn count_of(&self, type_id: i32, metadata: Option<u16>) -> u32 {
        self.count_range(self.inventory_start, self.inventory_end, type_id, metadata)
    }

    /// All stacks in the inventory region.
    pub fn items(&self) -> Vec<&Item> {
        self.items_range(self.inventory_start, self.inventory_end)
    }

    /// Count of one item type in the container region.
    pub fn container_count(&self, type_id: i32, metadata: Option<u16>) -> u32 {
        self.count_range(0, self.inventory_start, type_id, metadata)
    }

    /// All stacks in the container region.
    pub fn container_items(&self) -> Vec<&Item> {
        self.items_range(0, self.inventory_start)
    }

    /// Number of empty inventory slots.
    pub fn empty_slot_count(&self) -> usize {
        self.slots[self.inventory_start..self.inventory_end]
            .iter()
            .filter(|slot| slot.is_none())
            .count()
    }

    /// Whether this click needs a server acknowledgment round-trip.
    pub fn transaction_requires_confirmation(&self, _click: &Click) -> bool {
        self.requires_confirmation
    }

    // --- bulk clear ----------------------------------------------------

    /// Drain up to `count` items of `type_id` from the inventory,
    /// searching the hotbar backward and then the rest of the inventory
    /// forward, splitting the last stack if it holds more than needed.
    /// `None` for `type_id` matches everything; `None` for `count`
    /// drains all matches. Returns the number of items actually cleared.
    pub fn clear(&mut self, type_id: Option<i32>, count: Option<u32>) -> u32 {
        let mut cleared = 0;

        for slot in (self.hotbar_start..self.inventory_end).rev() {
            if self.clear_slot(slot, type_id, count, &mut cleared) {
                return cleared;
            }
        }
        for slot in self.inventory_start..self.hotbar_start {
            if self.clear_slot(slot, type_id, count, &mut cleared) {
                break;
            }
        }

        debug!(cleared, "cleared items from inventory");
        cleared
    }

    /// Clear one slot toward the target; true once the target is met.
    fn clear_slot(
        &mut self,
        slot: usize,
        type_id: Option<i32>,
        target: Option<u32>,
        cleared: &mut u32,
    ) -> bool {
        let Some(item) = self.slots[slot].clone() else {
            return false;
        };
        if type_id.is_some_and(|t| t != item.type_id) {
            return false;
        }

        if let Some(target) = target {
            let needed = target - *cleared;
            if u32::from(item.count) > needed {
                *cleared += needed;
                self.update_slot(slot, Some(item.with_count(item.count - needed as u16)));
                return true;
            }
        }
        *cleared += u32::from(item.count);
        self.update_slot(slot, None);
        target == Some(*cleared)
    }
}
