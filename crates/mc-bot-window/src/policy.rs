//! Per-container placement and pickup rules.
//!
//! Every rule table shares one universal default: permitted. Container
//! kinds override individual slots, and the player inventory screen
//! (`id == 0`) layers armor-slot rules on top of its kind. Denials are
//! silent no-ops at the handler level, mirroring how the server simply
//! rejects disallowed moves.

use mc_bot_item::Item;
use serde::{Deserialize, Serialize};

use crate::context::ClickContext;
use crate::window::Window;

/// Container flavor, from the protocol window type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// The player's own inventory screen.
    Inventory,
    /// Chests, barrels, shulkers, hoppers — no slot restrictions.
    Generic,
    Crafting,
    Furnace,
    Anvil,
    BrewingStand,
    EnchantingTable,
    Grindstone,
    Loom,
    CartographyTable,
    Stonecutter,
    SmithingTable,
    Merchant,
    Beacon,
    /// Horse/donkey/mule equipment screen.
    Horse,
    /// Llama carpet screen.
    Llama,
}

impl WindowKind {
    /// Map a protocol window type string to a kind. Unknown types fall
    /// back to [`WindowKind::Generic`].
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "minecraft:inventory" => WindowKind::Inventory,
            "minecraft:crafting" | "minecraft:crafting_table" => WindowKind::Crafting,
            "minecraft:furnace" | "minecraft:blast_furnace" | "minecraft:smoker" => WindowKind::Furnace,
            "minecraft:anvil" => WindowKind::Anvil,
            "minecraft:brewing_stand" => WindowKind::BrewingStand,
            "minecraft:enchanting_table" => WindowKind::EnchantingTable,
            "minecraft:grindstone" => WindowKind::Grindstone,
            "minecraft:loom" => WindowKind::Loom,
            "minecraft:cartography_table" => WindowKind::CartographyTable,
            "minecraft:stonecutter" => WindowKind::Stonecutter,
            "minecraft:smithing_table" => WindowKind::SmithingTable,
            "minecraft:merchant" => WindowKind::Merchant,
            "minecraft:beacon" => WindowKind::Beacon,
            "EntityHorse" => WindowKind::Horse,
            "EntityLlama" => WindowKind::Llama,
            _ => WindowKind::Generic,
        }
    }
}

impl Window {
    /// Whether `item` may be placed into `slot`.
    pub fn may_place(&self, slot: usize, item: &Item, ctx: &ClickContext) -> bool {
        if self.crafting_result_slot == Some(slot) {
            return false;
        }

        // armor slots on the player inventory screen
        if self.id == 0 {
            match slot {
                5 => return ctx.catalog.is_helmet(item),
                6 => return ctx.catalog.is_chestplate(item),
                7 => return ctx.catalog.is_leggings(item),
                8 => return ctx.catalog.is_boots(item),
                _ => {}
            }
        }

        match (self.kind, slot) {
            (WindowKind::Furnace, 1) => ctx.catalog.is_fuel(item) || item.name == "bucket",
            (WindowKind::Furnace, 2) => false,
            (WindowKind::BrewingStand, 4) => item.name == "blaze_powder",
            (WindowKind::BrewingStand, 3) => ctx.catalog.is_potion_ingredient(item),
            (WindowKind::BrewingStand, 0..=2) => matches!(
                item.name.as_str(),
                "potion" | "splash_potion" | "lingering_potion" | "glass_bottle"
            ),
            (WindowKind::Merchant, 2) => false,
            (WindowKind::Beacon, 0) => ctx.catalog.is_beacon_payment(item),
            (WindowKind::CartographyTable, 0) => item.name == "filled_map",
            (WindowKind::CartographyTable, 1) => {
                matches!(item.name.as_str(), "paper" | "map" | "glass_pane")
            }
            (WindowKind::CartographyTable, 2) => false,
            (WindowKind::EnchantingTable, 0) => true,
            (WindowKind::EnchantingTable, 1) => item.name == "lapis_lazuli",
            (WindowKind::Grindstone, 0 | 1) => {
                ctx.catalog.max_durability(item) > 0
                    || item.name == "enchanted_book"
                    || ctx.catalog.has_enchantments(item)
            }
            (WindowKind::Grindstone, 2) => false,
            // equipment slots require an empty destination on the living entity
            (WindowKind::Horse, 0) => item.name == "saddle" && self.slots[0].is_none(),
            (WindowKind::Horse, 1) => ctx.catalog.is_horse_armor(item),
            (WindowKind::Llama, 0) => ctx.catalog.is_wool_carpet(item) && self.slots[0].is_none(),
            (WindowKind::SmithingTable, 2) => ctx.features.smithing_template_slot,
            (WindowKind::Loom, 0) => ctx.catalog.is_banner(item),
            (WindowKind::Loom, 1) => ctx.catalog.is_dye(item),
            (WindowKind::Loom, 2) => ctx.catalog.is_banner_pattern(item),
            (WindowKind::Loom, 3) => false,
            (WindowKind::Stonecutter, 1) => false,
            _ => true,
        }
    }

    /// Whether the stack in `slot` may be picked up.
    pub fn may_pickup(&self, slot: usize, ctx: &ClickContext) -> bool {
        if self.crafting_result_slot == Some(slot) {
            match self.kind {
                WindowKind::Anvil => {
                    let creative = ctx.game_mode.is_creative();
                    let cost = ctx.catalog.anvil_xp_cost(
                        self.slots.first().and_then(Option::as_ref),
                        self.slots.get(1).and_then(Option::as_ref),
                        creative,
                    );
                    return (creative || ctx.experience_level >= cost) && cost > 0;
                }
                WindowKind::SmithingTable => {
                    return self.slots.get(2).is_some_and(Option::is_some)
                        && ctx.catalog.recipe_matches(&self.slots[..slot]);
                }
                _ => {}
            }
        }

        // helmets cursed with binding lock the armor slots in survival
        if self.id == 0 && (5..=8).contains(&slot) {
            if let Some(item) = &self.slots[slot] {
                return ctx.game_mode.is_creative() || !ctx.catalog.has_binding_curse(item);
            }
        }

        true
    }

    /// Whether double-click consolidation may take from `slot`.
    pub fn can_take_item_for_pick_all(&self, slot: usize) -> bool {
        match self.kind {
            WindowKind::CartographyTable | WindowKind::Crafting => {
                self.crafting_result_slot != Some(slot)
            }
            _ if self.id == 0 => self.crafting_result_slot != Some(slot),
            WindowKind::Merchant => false,
            WindowKind::SmithingTable | WindowKind::Stonecutter => {
                self.crafting_result_slot != Some(slot)
            }
            _ => true,
        }
    }

    /// Whether `item` could replace or merge into `slot` in one motion:
    /// the slot is empty, or holds a matching stack with room for the
    /// combined count (`ignore_item_count` checks only the existing
    /// count against the stack size).
    pub fn can_item_quick_replace(&self, slot: usize, item: &Item, ignore_item_count: bool) -> bool {
        match &self.slots[slot] {
            None => true,
            Some(existing) if existing.stacks_with(item) => {
                let incoming = if ignore_item_count { 0 } else { item.count };
                existing.count + incoming <= item.stack_size
            }
            Some(_) => false,
        }
    }

    /// Pickup plus placement: required to modify a slot in place.
    pub fn allow_modification(&self, slot: usize, ctx: &ClickContext) -> bool {
        self.may_pickup(slot, ctx)
            && self.slots[slot]
                .as_ref()
                .is_some_and(|item| self.may_place(slot, item, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ClickContext, GameMode};
    use mc_bot_item::{DefaultCatalog, ItemCatalog};

    struct TestCatalog;

    impl ItemCatalog for TestCatalog {
        fn is_fuel(&self, item: &Item) -> bool {
            item.name == "coal"
        }

        fn has_binding_curse(&self, item: &Item) -> bool {
            item.name == "cursed_helmet"
        }

        fn anvil_xp_cost(&self, base: Option<&Item>, addition: Option<&Item>, _creative: bool) -> u32 {
            match (base, addition) {
                (Some(_), Some(_)) => 5,
                _ => 0,
            }
        }
    }

    fn ctx(catalog: &dyn ItemCatalog) -> ClickContext<'_> {
        ClickContext::new(GameMode::Survival, catalog)
    }

    fn furnace() -> Window {
        Window::new(2, WindowKind::Furnace, "Furnace", 39, 3..39, Some(2), true)
    }

    #[test]
    fn kind_from_type_name() {
        assert_eq!(WindowKind::from_type_name("minecraft:furnace"), WindowKind::Furnace);
        assert_eq!(WindowKind::from_type_name("minecraft:generic_9x3"), WindowKind::Generic);
        assert_eq!(WindowKind::from_type_name("EntityLlama"), WindowKind::Llama);
    }

    #[test]
    fn furnace_fuel_slot_requires_fuel() {
        let catalog = TestCatalog;
        let window = furnace();
        let ctx = ctx(&catalog);

        assert!(window.may_place(1, &Item::new(263, "coal", 1, 64), &ctx));
        assert!(window.may_place(1, &Item::new(325, "bucket", 1, 16), &ctx));
        assert!(!window.may_place(1, &Item::new(1, "stone", 1, 64), &ctx));
        // output slot is the result slot here, never placeable
        assert!(!window.may_place(2, &Item::new(263, "coal", 1, 64), &ctx));
        // input slot has no restriction
        assert!(window.may_place(0, &Item::new(1, "stone", 1, 64), &ctx));
    }

    #[test]
    fn brewing_stand_slots() {
        let catalog = DefaultCatalog;
        let window = Window::new(3, WindowKind::BrewingStand, "Brewing Stand", 41, 5..41, None, true);
        let ctx = ctx(&catalog);

        assert!(window.may_place(4, &Item::new(377, "blaze_powder", 1, 64), &ctx));
        assert!(!window.may_place(4, &Item::new(1, "stone", 1, 64), &ctx));
        // default catalog knows no potion ingredients
        assert!(!window.may_place(3, &Item::new(372, "nether_wart", 1, 64), &ctx));
        assert!(window.may_place(0, &Item::new(373, "potion", 1, 1), &ctx));
        assert!(window.may_place(2, &Item::new(374, "glass_bottle", 1, 64), &ctx));
        assert!(!window.may_place(1, &Item::new(1, "stone", 1, 64), &ctx));
    }

    #[test]
    fn enchanting_and_loom_and_stonecutter() {
        let catalog = DefaultCatalog;
        let ctx = ctx(&catalog);

        let enchanting =
            Window::new(4, WindowKind::EnchantingTable, "Enchant", 38, 2..38, None, true);
        assert!(enchanting.may_place(0, &Item::new(1, "stone", 1, 64), &ctx));
        assert!(enchanting.may_place(1, &Item::new(351, "lapis_lazuli", 1, 64), &ctx));
        assert!(!enchanting.may_place(1, &Item::new(1, "stone", 1, 64), &ctx));

        let loom = Window::new(5, WindowKind::Loom, "Loom", 40, 4..40, Some(3), true);
        assert!(loom.may_place(0, &Item::new(425, "white_banner", 1, 16), &ctx));
        assert!(loom.may_place(1, &Item::new(351, "red_dye", 1, 64), &ctx));
        assert!(!loom.may_place(2, &Item::new(1, "stone", 1, 64), &ctx));
        assert!(!loom.may_place(3, &Item::new(425, "white_banner", 1, 16), &ctx));

        let stonecutter = Window::new(6, WindowKind::Stonecutter, "Stonecutter", 38, 2..38, Some(1), true);
        assert!(stonecutter.may_place(0, &Item::new(1, "stone", 1, 64), &ctx));
        assert!(!stonecutter.may_place(1, &Item::new(1, "stone", 1, 64), &ctx));
    }

    #[test]
    fn grindstone_takes_enchanted_or_durable_items() {
        let catalog = DefaultCatalog;
        let window = Window::new(7, WindowKind::Grindstone, "Grindstone", 39, 3..39, Some(2), true);
        let ctx = ctx(&catalog);

        assert!(window.may_place(0, &Item::new(403, "enchanted_book", 1, 1), &ctx));
        assert!(!window.may_place(0, &Item::new(1, "stone", 1, 64), &ctx));
        let enchanted = Item::new(276, "diamond_sword", 1, 1)
            .with_nbt(serde_json::json!({"Enchantments": [{"id": "sharpness"}]}));
        assert!(window.may_place(1, &enchanted, &ctx));
    }

    #[test]
    fn equipment_slots_require_empty_destination() {
        let catalog = DefaultCatalog;
        let ctx = ctx(&catalog);
        let mut horse = Window::new(8, WindowKind::Horse, "Horse", 38, 2..38, None, true);

        let saddle = Item::new(329, "saddle", 1, 1);
        assert!(horse.may_place(0, &saddle, &ctx));
        horse.update_slot(0, Some(saddle.clone()));
        assert!(!horse.may_place(0, &saddle, &ctx));
        assert!(horse.may_place(1, &Item::new(417, "iron_horse_armor", 1, 1), &ctx));

        let llama = Window::new(9, WindowKind::Llama, "Llama", 38, 2..38, None, true);
        assert!(llama.may_place(0, &Item::new(171, "red_carpet", 1, 64), &ctx));
        assert!(!llama.may_place(0, &Item::new(1, "stone", 1, 64), &ctx));
    }

    #[test]
    fn player_armor_slots_by_category() {
        let catalog = DefaultCatalog;
        let window = Window::player_inventory();
        let ctx = ctx(&catalog);

        assert!(window.may_place(5, &Item::new(310, "diamond_helmet", 1, 1), &ctx));
        assert!(!window.may_place(5, &Item::new(311, "diamond_chestplate", 1, 1), &ctx));
        assert!(window.may_place(6, &Item::new(311, "diamond_chestplate", 1, 1), &ctx));
        assert!(window.may_place(7, &Item::new(312, "diamond_leggings", 1, 1), &ctx));
        assert!(window.may_place(8, &Item::new(313, "diamond_boots", 1, 1), &ctx));
        assert!(!window.may_place(0, &Item::new(1, "stone", 1, 64), &ctx));
    }

    #[test]
    fn binding_curse_locks_armor_outside_creative() {
        let catalog = TestCatalog;
        let mut window = Window::player_inventory();
        window.update_slot(5, Some(Item::new(310, "cursed_helmet", 1, 1)));

        let survival = ClickContext::new(GameMode::Survival, &catalog);
        assert!(!window.may_pickup(5, &survival));

        let creative = ClickContext::new(GameMode::Creative, &catalog);
        assert!(window.may_pickup(5, &creative));

        // a clean helmet is always retrievable
        window.update_slot(5, Some(Item::new(310, "diamond_helmet", 1, 1)));
        assert!(window.may_pickup(5, &survival));
    }

    #[test]
    fn anvil_result_gated_by_xp_cost() {
        let catalog = TestCatalog;
        let mut window = Window::new(10, WindowKind::Anvil, "Anvil", 39, 3..39, Some(2), true);
        window.update_slot(0, Some(Item::new(276, "diamond_sword", 1, 1)));
        window.update_slot(1, Some(Item::new(276, "diamond_sword", 1, 1)));
        window.update_slot(2, Some(Item::new(276, "diamond_sword", 1, 1)));

        let mut poor = ClickContext::new(GameMode::Survival, &catalog);
        poor.experience_level = 1;
        assert!(!window.may_pickup(2, &poor));

        let mut rich = ClickContext::new(GameMode::Survival, &catalog);
        rich.experience_level = 10;
        assert!(window.may_pickup(2, &rich));

        let creative = ClickContext::new(GameMode::Creative, &catalog);
        assert!(window.may_pickup(2, &creative));

        // zero cost (missing inputs) means no valid operation
        window.update_slot(1, None);
        assert!(!window.may_pickup(2, &rich));
    }

    #[test]
    fn smithing_result_locked_without_recipe_match() {
        let catalog = DefaultCatalog;
        let mut window = Window::new(11, WindowKind::SmithingTable, "Smithing", 40, 4..40, Some(3), true);
        window.update_slot(2, Some(Item::new(266, "netherite_ingot", 1, 64)));
        window.update_slot(3, Some(Item::new(276, "netherite_sword", 1, 1)));

        // DefaultCatalog::recipe_matches is always false
        assert!(!window.may_pickup(3, &ctx(&catalog)));
    }

    #[test]
    fn pick_all_exclusions() {
        let merchant = Window::new(12, WindowKind::Merchant, "Merchant", 39, 3..39, Some(2), true);
        assert!(!merchant.can_take_item_for_pick_all(0));

        let inventory = Window::player_inventory();
        assert!(!inventory.can_take_item_for_pick_all(0));
        assert!(inventory.can_take_item_for_pick_all(9));

        let chest = Window::new(13, WindowKind::Generic, "Chest", 63, 27..63, None, true);
        assert!(chest.can_take_item_for_pick_all(0));
    }

    #[test]
    fn quick_replace_needs_room_for_combined_count() {
        let mut window = Window::new(14, WindowKind::Generic, "Chest", 63, 27..63, None, true);
        let held = Item::new(1, "stone", 30, 64);

        assert!(window.can_item_quick_replace(0, &held, true));
        window.update_slot(0, Some(Item::new(1, "stone", 40, 64)));
        assert!(window.can_item_quick_replace(0, &held, true));
        assert!(!window.can_item_quick_replace(0, &held, false));
        window.update_slot(0, Some(Item::new(2, "dirt", 1, 64)));
        assert!(!window.can_item_quick_replace(0, &held, true));
    }
}
