//! Client-side container click state machine.
//!
//! Reproduces the slot-transfer semantics a vanilla server applies when
//! a player clicks inside an open container, so a bot can predict the
//! resulting inventory state without waiting for server confirmation.
//! One [`Window`] per opened screen; [`Window::accept_click`] is the
//! single mutation entry point and returns the changed-slot diff the
//! transaction acknowledgment is built from.

pub mod click;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod observe;
pub mod policy;
pub mod transfer;
pub mod window;

pub use click::{Click, ClickMode, SlotChange, OUTSIDE_WINDOW};
pub use context::{ClickContext, Features, GameMode};
pub use error::ClickError;
pub use policy::WindowKind;
pub use window::Window;
