//! Click descriptor and changed-slot diff types.

use mc_bot_item::Item;
use serde::{Deserialize, Serialize};

use crate::error::ClickError;

/// Sentinel slot meaning the click landed outside the window (drops the
/// cursor stack into the world).
pub const OUTSIDE_WINDOW: i16 = -999;

/// The seven click modes of the container protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickMode {
    /// Mode 0: plain left/right click.
    Simple,
    /// Mode 1: shift click, fast transfer to the other region.
    Shift,
    /// Mode 2: number-key swap with a hotbar slot.
    NumberKey,
    /// Mode 3: middle click, creative-mode stack clone.
    Middle,
    /// Mode 4: drop key, drop one or the whole stack from a slot.
    Drop,
    /// Mode 5: drag click. Declared, never handled.
    Drag,
    /// Mode 6: double click, consolidate matching stacks onto the cursor.
    Double,
}

impl ClickMode {
    /// Decode the protocol mode number.
    pub fn from_raw(mode: u8) -> Option<Self> {
        match mode {
            0 => Some(ClickMode::Simple),
            1 => Some(ClickMode::Shift),
            2 => Some(ClickMode::NumberKey),
            3 => Some(ClickMode::Middle),
            4 => Some(ClickMode::Drop),
            5 => Some(ClickMode::Drag),
            6 => Some(ClickMode::Double),
            _ => None,
        }
    }

    /// The protocol mode number.
    pub fn raw(self) -> u8 {
        match self {
            ClickMode::Simple => 0,
            ClickMode::Shift => 1,
            ClickMode::NumberKey => 2,
            ClickMode::Middle => 3,
            ClickMode::Drop => 4,
            ClickMode::Drag => 5,
            ClickMode::Double => 6,
        }
    }
}

/// One click as sent to the server.
///
/// `button` is a plain integer because its meaning depends on the mode
/// (mouse button for mode 0/1, hotbar index for mode 2, drag stage for
/// mode 5). `item` is the clicked stack as the caller last saw it and
/// is carried for the outgoing packet; the window's own slot array is
/// authoritative when the click is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Click {
    pub mode: ClickMode,
    pub button: u8,
    /// Clicked slot index, or [`OUTSIDE_WINDOW`].
    pub slot: i16,
    pub item: Option<Item>,
}

impl Click {
    /// Build a click from raw protocol fields.
    pub fn from_raw(mode: u8, button: u8, slot: i16, item: Option<Item>) -> Result<Self, ClickError> {
        let mode = ClickMode::from_raw(mode).ok_or(ClickError::InvalidMode(mode))?;
        Ok(Self {
            mode,
            button,
            slot,
            item,
        })
    }
}

/// A slot whose contents changed as a result of one click.
///
/// The full post-click list is what the server reports back for the
/// same click, so it is the signal higher layers acknowledge against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotChange {
    /// Slot index within the window.
    pub location: usize,
    /// The resulting stack, or `None` when the slot emptied.
    pub item: Option<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_raw_round_trip() {
        for raw in 0..=6 {
            let mode = ClickMode::from_raw(raw).unwrap();
            assert_eq!(mode.raw(), raw);
        }
        assert_eq!(ClickMode::from_raw(7), None);
    }

    #[test]
    fn from_raw_rejects_unknown_mode() {
        assert_eq!(
            Click::from_raw(9, 0, 0, None).unwrap_err(),
            ClickError::InvalidMode(9)
        );
    }
}
