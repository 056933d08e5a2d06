//! Item category predicates supplied by the embedding application.
//!
//! The placement/pickup policy needs registry knowledge the core does
//! not own (what counts as furnace fuel, which items are armor, anvil
//! repair costs, smithing recipes). [`ItemCatalog`] is that seam: the
//! caller hands an implementation to every click, the core never
//! caches it.

use serde_json::Value;

use crate::item::Item;

/// External item-registry capabilities consumed by the window core.
///
/// Every method has a conservative default, so a caller that only needs
/// plain chests can pass [`DefaultCatalog`]. The name-suffix defaults
/// match vanilla naming; override them when the registry knows better.
pub trait ItemCatalog {
    /// Whether the item can burn in a furnace fuel slot.
    fn is_fuel(&self, _item: &Item) -> bool {
        false
    }

    /// Whether the item is a valid brewing-stand ingredient.
    fn is_potion_ingredient(&self, _item: &Item) -> bool {
        false
    }

    /// Whether the item can be paid into a beacon.
    fn is_beacon_payment(&self, _item: &Item) -> bool {
        false
    }

    fn is_horse_armor(&self, item: &Item) -> bool {
        item.name.ends_with("_horse_armor")
    }

    fn is_wool_carpet(&self, item: &Item) -> bool {
        item.name.ends_with("carpet")
    }

    fn is_helmet(&self, item: &Item) -> bool {
        item.name.ends_with("_helmet")
    }

    fn is_chestplate(&self, item: &Item) -> bool {
        item.name.ends_with("_chestplate")
    }

    fn is_leggings(&self, item: &Item) -> bool {
        item.name.ends_with("_leggings")
    }

    fn is_boots(&self, item: &Item) -> bool {
        item.name.ends_with("_boots")
    }

    fn is_banner(&self, item: &Item) -> bool {
        item.name.ends_with("banner")
    }

    fn is_dye(&self, item: &Item) -> bool {
        item.name.ends_with("_dye")
    }

    fn is_banner_pattern(&self, item: &Item) -> bool {
        item.name.ends_with("banner_pattern")
    }

    /// Maximum durability of the item type. 0 means not a durability item.
    fn max_durability(&self, _item: &Item) -> u32 {
        0
    }

    /// Whether the stack carries any enchantments. The default inspects
    /// the opaque NBT for the vanilla enchantment list keys.
    fn has_enchantments(&self, item: &Item) -> bool {
        match &item.nbt {
            Some(Value::Object(map)) => {
                has_entries(map.get("Enchantments")) || has_entries(map.get("ench"))
            }
            _ => false,
        }
    }

    /// Whether the stack is cursed with binding (locks armor slots in
    /// survival).
    fn has_binding_curse(&self, _item: &Item) -> bool {
        false
    }

    /// XP level cost of combining `base` and `addition` on an anvil.
    /// 0 means the combination is invalid, which locks the result slot.
    fn anvil_xp_cost(&self, _base: Option<&Item>, _addition: Option<&Item>, _creative: bool) -> u32 {
        0
    }

    /// Whether the given input slots match a known recipe. Used for the
    /// smithing-table result slot; the default locks it.
    fn recipe_matches(&self, _inputs: &[Option<Item>]) -> bool {
        false
    }
}

fn has_entries(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(list)) if !list.is_empty())
}

/// Catalog with every default behavior and no registry backing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl ItemCatalog for DefaultCatalog {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_suffix_defaults() {
        let catalog = DefaultCatalog;
        assert!(catalog.is_helmet(&Item::new(310, "diamond_helmet", 1, 1)));
        assert!(catalog.is_boots(&Item::new(317, "golden_boots", 1, 1)));
        assert!(catalog.is_dye(&Item::new(351, "red_dye", 1, 64)));
        assert!(!catalog.is_helmet(&Item::new(1, "stone", 1, 64)));
    }

    #[test]
    fn enchantments_read_from_nbt() {
        let catalog = DefaultCatalog;
        let plain = Item::new(276, "diamond_sword", 1, 1);
        assert!(!catalog.has_enchantments(&plain));

        let enchanted = plain
            .clone()
            .with_nbt(json!({"Enchantments": [{"id": "sharpness", "lvl": 5}]}));
        assert!(catalog.has_enchantments(&enchanted));

        let empty_list = plain.with_nbt(json!({"Enchantments": []}));
        assert!(!catalog.has_enchantments(&empty_list));
    }

    #[test]
    fn conservative_defaults_lock_gated_slots() {
        let catalog = DefaultCatalog;
        let stone = Item::new(1, "stone", 1, 64);
        assert!(!catalog.is_fuel(&stone));
        assert_eq!(catalog.anvil_xp_cost(Some(&stone), None, false), 0);
        assert!(!catalog.recipe_matches(&[None, None, None]));
    }
}
