//! Input state shared between the button tasks and the main cycle.
//!
//! - `button`: Logical button identities
//! - `debounce`: Per-button acceptance window
//! - `toggles`: Border style and LED flags flipped by accepted presses

mod button;
mod debounce;
mod toggles;

pub use button::LogicalButton;
pub use debounce::{Debouncer, Timestamp};
pub use toggles::{BorderStyle, ToggleState, Toggles};
