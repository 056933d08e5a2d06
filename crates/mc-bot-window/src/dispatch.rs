//! Click validation, routing, and the seven mode handlers.
//!
//! Validation happens entirely before any slot is touched; a rejected
//! click leaves the window byte-identical. Handlers assume validated
//! input and express "cannot do that" as a guarded no-op, the way the
//! server silently rejects disallowed moves. The returned diff lists
//! exactly the slots whose contents changed.

use tracing::debug;

use crate::click::{Click, ClickMode, SlotChange, OUTSIDE_WINDOW};
use crate::context::ClickContext;
use crate::error::ClickError;
use crate::policy::WindowKind;
use crate::window::Window;

impl Window {
    /// Apply one click and return the changed-slot diff.
    pub fn accept_click(
        &mut self,
        click: &Click,
        ctx: &ClickContext,
    ) -> Result<Vec<SlotChange>, ClickError> {
        self.validate(click)?;
        debug!(
            mode = click.mode.raw(),
            button = click.button,
            slot = click.slot,
            "accepting click"
        );

        let before = self.slots.clone();
        match click.mode {
            ClickMode::Simple => self.simple_click(click),
            ClickMode::Shift => self.shift_click(click),
            ClickMode::NumberKey => self.number_click(click, ctx),
            ClickMode::Middle => self.middle_click(click, ctx),
            ClickMode::Drop => self.drop_click(click),
            ClickMode::Drag => return Err(ClickError::Unimplemented),
            ClickMode::Double => self.double_click(click, ctx),
        }

        Ok(self.changed_slots(&before))
    }

    /// Geometry and button-range checks shared by all modes.
    fn validate(&self, click: &Click) -> Result<(), ClickError> {
        let mode = click.mode.raw();
        if click.button > 8 {
            return Err(ClickError::InvalidButton {
                mode,
                button: click.button,
            });
        }

        let slot_in_window = click.slot >= 0 && (click.slot as usize) < self.inventory_end;
        let offhand_exception = self.kind == WindowKind::Inventory && click.slot == 45;
        if !(slot_in_window || click.slot == OUTSIDE_WINDOW || offhand_exception) {
            return Err(ClickError::InvalidSlot(click.slot));
        }

        let button_ok = match click.mode {
            ClickMode::Simple | ClickMode::Shift | ClickMode::Drop | ClickMode::Double => {
                click.button <= 1
            }
            ClickMode::NumberKey => true,
            ClickMode::Middle => click.button == 2,
            ClickMode::Drag => matches!(click.button, 1 | 2 | 5 | 6),
        };
        if !button_ok {
            return Err(ClickError::InvalidButton {
                mode,
                button: click.button,
            });
        }
        if click.mode == ClickMode::Double && click.slot < 0 {
            return Err(ClickError::InvalidSlot(click.slot));
        }
        Ok(())
    }

    /// Mode 0: plain left/right click on a slot or outside the window.
    fn simple_click(&mut self, click: &Click) {
        if click.slot == OUTSIDE_WINDOW {
            self.drop_selected(click.button == 0);
            return;
        }
        let slot = click.slot as usize;
        match click.button {
            0 => self.simple_left(slot),
            _ => self.simple_right(slot),
        }
    }

    fn simple_left(&mut self, slot: usize) {
        let slot_item = self.slots[slot].clone();
        let held = self.selected_item.clone();
        match (slot_item, held) {
            (Some(item), Some(sel)) if item.stacks_with(&sel) => {
                if self.crafting_result_slot == Some(slot) {
                    // the result slot combines only when the merge would
                    // overflow; the cursor then takes the whole stack,
                    // even past its stack size
                    if item.count + sel.count > item.stack_size {
                        if let Some(sel) = self.selected_item.as_mut() {
                            sel.count += item.count;
                        }
                        self.update_slot(slot, None);
                    }
                } else {
                    self.fill_slot_with_selected(slot, true);
                }
            }
            (None, None) => {}
            _ => self.swap_selected(slot),
        }
    }

    fn simple_right(&mut self, slot: usize) {
        let slot_item = self.slots[slot].clone();
        let held = self.selected_item.clone();
        match (slot_item, held) {
            (Some(item), Some(sel)) => {
                if item.stacks_with(&sel) {
                    self.fill_slot_with_selected(slot, false);
                } else {
                    self.swap_selected(slot);
                }
            }
            (None, Some(sel)) => {
                // deposit a single unit, keep the rest on the cursor
                self.update_slot(slot, Some(sel.with_count(1)));
                let rest = sel.count - 1;
                self.selected_item = (rest > 0).then(|| sel.with_count(rest));
            }
            (Some(_), None) => {
                if self.crafting_result_slot == Some(slot) {
                    self.swap_selected(slot);
                } else {
                    self.split_slot(slot);
                }
            }
            (None, None) => {}
        }
    }

    /// Mode 1: fast transfer to the complementary region.
    fn shift_click(&mut self, click: &Click) {
        if click.slot < 0 {
            return;
        }
        let slot = click.slot as usize;
        if self.slots[slot].is_none() {
            return;
        }

        if self.kind == WindowKind::Inventory {
            if slot < self.inventory_start {
                let last_to_first = self.crafting_result_slot == Some(slot);
                self.fill_and_dump(slot, self.inventory_start, self.inventory_end, last_to_first);
            } else if slot < self.inventory_end - 10 {
                // main inventory routes into the hotbar
                self.fill_and_dump(slot, self.hotbar_start, self.inventory_end, false);
            } else {
                self.fill_and_dump(slot, self.inventory_start, self.inventory_end, false);
            }
        } else if slot < self.inventory_start {
            let last_to_first =
                self.crafting_result_slot.is_none() || self.crafting_result_slot == Some(slot);
            self.fill_and_dump(slot, self.inventory_start, self.inventory_end, last_to_first);
        } else {
            // container region ends one short of inventory_start; kept
            // for compatibility with the reference behavior
            self.fill_and_dump(slot, 0, self.inventory_start - 1, false);
        }
    }

    /// Mode 2: swap the clicked slot with a hotbar slot.
    fn number_click(&mut self, click: &Click, ctx: &ClickContext) {
        if self.selected_item.is_some() || click.slot < 0 {
            return;
        }
        let slot = click.slot as usize;
        let hotbar_slot = self.hotbar_start + click.button as usize;
        let clicked = self.slots[slot].clone();
        let at_hotbar = self.slots[hotbar_slot].clone();

        match (clicked, at_hotbar) {
            (Some(item), Some(hot)) => {
                if self.kind == WindowKind::Inventory || ctx.features.direct_hotbar_swap {
                    self.update_slot(slot, Some(hot));
                    self.update_slot(hotbar_slot, Some(item));
                } else {
                    self.legacy_hotbar_swap(slot, hotbar_slot);
                }
            }
            (Some(item), None) => {
                self.update_slot(slot, None);
                self.update_slot(hotbar_slot, Some(item));
            }
            (None, Some(hot)) => {
                if self.crafting_result_slot != Some(slot) {
                    self.update_slot(slot, Some(hot));
                    self.update_slot(hotbar_slot, None);
                }
            }
            (None, None) => {}
        }
    }

    /// Pre-1.9 number-key path: the displaced hotbar stack is dumped
    /// into the inventory, the clicked stack takes its place, and the
    /// displaced stack then consolidates into matching partial stacks.
    fn legacy_hotbar_swap(&mut self, slot: usize, hotbar_slot: usize) {
        let mut displaced_at = self.dump_item(hotbar_slot, self.hotbar_start, self.inventory_end, false);
        if displaced_at.is_none() {
            displaced_at = self.dump_item(hotbar_slot, self.inventory_start, self.hotbar_start - 1, false);
        }
        let Some(displaced_at) = displaced_at else {
            // nowhere to put the displaced stack; leave everything as is
            return;
        };

        let clicked = self.slots[slot].clone();
        self.update_slot(slot, None);
        self.update_slot(hotbar_slot, clicked);

        let Some(displaced) = self.slots[displaced_at].clone() else {
            return;
        };
        let mut targets =
            self.matching_partial_slots(self.hotbar_start, self.inventory_end, &displaced, Some(displaced_at));
        targets.extend(self.matching_partial_slots(
            self.inventory_start,
            self.hotbar_start - 1,
            &displaced,
            Some(displaced_at),
        ));
        self.fill_slots_from(&targets, displaced_at);
    }

    /// Mode 3: creative-mode clone of the clicked stack onto the cursor.
    fn middle_click(&mut self, click: &Click, ctx: &ClickContext) {
        if self.selected_item.is_some() || click.slot < 0 || !ctx.game_mode.is_creative() {
            return;
        }
        if let Some(item) = self.slots[click.slot as usize].clone() {
            self.selected_item = Some(item.with_count(item.stack_size));
        }
    }

    /// Mode 4: drop one unit or the whole clicked stack into the world.
    fn drop_click(&mut self, click: &Click) {
        if self.selected_item.is_some() || click.slot < 0 {
            return;
        }
        let slot = click.slot as usize;
        let Some(item) = self.slots[slot].clone() else {
            return;
        };
        if click.button == 0 {
            let rest = item.count - 1;
            self.update_slot(slot, (rest > 0).then(|| item.with_count(rest)));
        } else {
            self.update_slot(slot, None);
        }
    }

    /// Mode 6: consolidate matching stacks onto the cursor until full.
    ///
    /// Two passes over the whole slot array, forward for button 0 and
    /// backward for button 1; the first pass skips already-full stacks.
    fn double_click(&mut self, click: &Click, ctx: &ClickContext) {
        if self.selected_item.is_none() {
            return;
        }
        let slot = click.slot as usize;
        if self.slots[slot].is_some() && self.may_pickup(slot, ctx) {
            return;
        }

        let len = self.slots.len();
        for pass in 0..2 {
            let order: Vec<usize> = if click.button == 0 {
                (0..len).collect()
            } else {
                (0..len).rev().collect()
            };
            for i in order {
                let Some(sel) = self.selected_item.clone() else {
                    return;
                };
                if sel.is_full() {
                    break;
                }
                let Some(stack) = self.slots[i].clone() else {
                    continue;
                };
                if !self.can_item_quick_replace(i, &sel, true)
                    || !self.may_pickup(i, ctx)
                    || !self.can_take_item_for_pick_all(i)
                {
                    continue;
                }
                if pass == 0 && stack.count == stack.stack_size {
                    continue;
                }
                if let Some(taken) = self.try_remove(i, stack.count, sel.space_left(), ctx) {
                    if let Some(sel) = self.selected_item.as_mut() {
                        sel.count += taken.count;
                    }
                }
            }
        }
    }
}
