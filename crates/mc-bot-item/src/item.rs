//! The `Item` stack value type.
//!
//! Identity, NBT contents, and registry metadata all live upstream;
//! the window core only reads the fields below. NBT is carried as an
//! opaque [`serde_json::Value`] and compared structurally.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single item stack as seen by the container core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Numeric item type ID from the protocol registry.
    pub type_id: i32,
    /// Namespaced item name without the `minecraft:` prefix, e.g. `"lapis_lazuli"`.
    pub name: String,
    /// Item damage/variant metadata.
    pub metadata: u16,
    /// Number of items in this stack.
    pub count: u16,
    /// Maximum stack size for this item type (1, 16, or 64).
    pub stack_size: u16,
    /// Opaque NBT payload, if any.
    pub nbt: Option<Value>,
    /// Last-known slot index. Maintained by the window on every placement;
    /// not part of the stack's value for equality purposes.
    #[serde(default)]
    pub slot: usize,
}

impl Item {
    /// Create a stack with no metadata or NBT.
    pub fn new(type_id: i32, name: impl Into<String>, count: u16, stack_size: u16) -> Self {
        Self {
            type_id,
            name: name.into(),
            metadata: 0,
            count,
            stack_size,
            nbt: None,
            slot: 0,
        }
    }

    /// Builder-style metadata setter.
    pub fn with_metadata(mut self, metadata: u16) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builder-style NBT setter.
    pub fn with_nbt(mut self, nbt: Value) -> Self {
        self.nbt = Some(nbt);
        self
    }

    /// Clone this stack with a different count.
    pub fn with_count(&self, count: u16) -> Self {
        let mut item = self.clone();
        item.count = count;
        item
    }

    /// Whether this stack can merge with `other`: same type, metadata,
    /// and NBT. Counts are not compared.
    pub fn stacks_with(&self, other: &Item) -> bool {
        self.type_id == other.type_id && self.metadata == other.metadata && self.nbt == other.nbt
    }

    /// Whether the stack is at its maximum size.
    pub fn is_full(&self) -> bool {
        self.count >= self.stack_size
    }

    /// Remaining capacity before the stack is full.
    pub fn space_left(&self) -> u16 {
        self.stack_size.saturating_sub(self.count)
    }

    /// Structural equality over two optional slots: type, metadata,
    /// count, and NBT. The transient `slot` field is ignored. This is
    /// the comparison the changed-slot diff is built on.
    pub fn same_contents(a: Option<&Item>, b: Option<&Item>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.stacks_with(b) && a.count == b.count,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stacks_with_ignores_count() {
        let a = Item::new(1, "stone", 5, 64);
        let b = Item::new(1, "stone", 60, 64);
        assert!(a.stacks_with(&b));
    }

    #[test]
    fn stacks_with_compares_metadata_and_nbt() {
        let a = Item::new(35, "wool", 1, 64);
        let b = Item::new(35, "wool", 1, 64).with_metadata(3);
        assert!(!a.stacks_with(&b));

        let c = Item::new(276, "diamond_sword", 1, 1).with_nbt(json!({"ench": [{"id": 16}]}));
        let d = Item::new(276, "diamond_sword", 1, 1);
        assert!(!c.stacks_with(&d));
        assert!(c.stacks_with(&c.clone()));
    }

    #[test]
    fn same_contents_compares_count_but_not_slot() {
        let mut a = Item::new(1, "stone", 5, 64);
        let mut b = a.clone();
        a.slot = 3;
        b.slot = 9;
        assert!(Item::same_contents(Some(&a), Some(&b)));

        b.count = 6;
        assert!(!Item::same_contents(Some(&a), Some(&b)));
        assert!(!Item::same_contents(Some(&a), None));
        assert!(Item::same_contents(None, None));
    }

    #[test]
    fn space_left_saturates() {
        let a = Item::new(1, "stone", 70, 64);
        assert_eq!(a.space_left(), 0);
        assert!(a.is_full());
        assert_eq!(Item::new(1, "stone", 60, 64).space_left(), 4);
    }
}
