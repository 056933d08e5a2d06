//! Ambient game context supplied with every click.
//!
//! The window never caches game mode, experience, or registry access;
//! the caller passes a fresh [`ClickContext`] per call, the same way
//! the server consults the acting player on every interaction.

use mc_bot_item::ItemCatalog;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub fn is_creative(self) -> bool {
        matches!(self, GameMode::Creative)
    }
}

/// Protocol-version feature flags that change click semantics.
#[derive(Debug, Clone, Copy)]
pub struct Features {
    /// Number-key clicks swap slots directly (protocol 1.9+). Older
    /// protocols dump the displaced hotbar stack into the inventory
    /// instead.
    pub direct_hotbar_swap: bool,
    /// The smithing table has a separate template slot (1.20+).
    pub smithing_template_slot: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            direct_hotbar_swap: true,
            smithing_template_slot: true,
        }
    }
}

/// Per-click ambient state: who is clicking and what the game knows.
pub struct ClickContext<'a> {
    pub game_mode: GameMode,
    /// Player experience level, consulted by the anvil result gate.
    pub experience_level: u32,
    pub features: Features,
    /// External item registry capabilities.
    pub catalog: &'a dyn ItemCatalog,
}

impl<'a> ClickContext<'a> {
    /// Context with current-protocol features and no experience.
    pub fn new(game_mode: GameMode, catalog: &'a dyn ItemCatalog) -> Self {
        Self {
            game_mode,
            experience_level: 0,
            features: Features::default(),
            catalog,
        }
    }
}
