//! Joystick panel control logic - testable on the host.
//!
//! Everything the firmware decides lives here; the binary in `firmware/pico`
//! only binds these types to RP2040 peripherals and runs them on embassy.
//!
//! - [`state`]: Logical buttons, debouncer, toggle flags
//! - [`controls`]: Shared context and the press handlers
//! - [`sampler`]: Joystick sampling and cursor mapping
//! - [`output`]: Deflection to LED intensity
//! - [`render`]: Border and cursor drawing
//! - [`cycle`]: One sample / output / render iteration
//! - [`traits`]: ADC, LED and display boundaries
//! - [`config`]: Layout, timing and scale constants
//!
//! # Testing
//!
//! ```bash
//! cargo test -p joystick-panel-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod config;
pub mod controls;
pub mod cycle;
pub mod output;
pub mod render;
pub mod sampler;
pub mod state;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use controls::{Controls, EdgeOutcome};
pub use cycle::{CycleReport, MainCycle};
pub use output::IntensityLevels;
pub use render::Renderer;
pub use sampler::{SampleReading, Sampler};
pub use state::{BorderStyle, LogicalButton, Toggles};
pub use traits::{AnalogSource, Axis, FrameSink, LedChannel, LedSink};
