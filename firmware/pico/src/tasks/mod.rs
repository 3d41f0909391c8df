//! Async tasks for the panel firmware.
//!
//! - `buttons`: One falling-edge task per logical button

pub mod buttons;

pub use buttons::button_task;
