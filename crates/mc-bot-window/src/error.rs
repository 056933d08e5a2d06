//! Click validation errors.

use thiserror::Error;

/// Errors returned by [`crate::Window::accept_click`].
///
/// All variants except [`ClickError::Unimplemented`] are validation
/// failures raised before any slot is touched; the caller can correct
/// the click and retry. Policy denials (placement, pickup) are not
/// errors at all — they leave the window unchanged and produce an
/// empty diff.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClickError {
    #[error("invalid click mode: {0}")]
    InvalidMode(u8),

    #[error("invalid button {button} for click mode {mode}")]
    InvalidButton { mode: u8, button: u8 },

    #[error("slot {0} is outside the window")]
    InvalidSlot(i16),

    /// Drag clicks (mode 5) are a known gap, not a recoverable state.
    #[error("drag clicks are not implemented")]
    Unimplemented,
}
