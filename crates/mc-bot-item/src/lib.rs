//! Item stack type and item-metadata collaborator traits.
//!
//! The window core reads items through this crate: structural equality
//! for diffing, merge-compatibility for stacking, and category
//! predicates (fuel, armor, dyes, ...) supplied by an external
//! registry through [`ItemCatalog`].

pub mod catalog;
pub mod item;

pub use catalog::{DefaultCatalog, ItemCatalog};
pub use item::Item;
