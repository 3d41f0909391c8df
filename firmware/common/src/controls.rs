//! Shared control context for the button tasks and the main cycle.
//!
//! [`Controls`] owns everything both execution contexts touch: the debouncer,
//! the toggle flags and the LED outputs. It is created once at boot and shared
//! by `&'static` reference, so there is no process-wide mutable state.
//!
//! # Locking
//!
//! | Data | Writer | Reader | Guard |
//! |------|--------|--------|-------|
//! | Debounce records | Edge path | Edge path | Critical section per button |
//! | Toggle flags | Edge handlers | Main cycle | Atomic store / load |
//! | LED outputs | Edge handlers, output driver | — | One critical section |
//!
//! The output driver checks `pwm_enabled` and writes the blue/red levels
//! inside the same critical section the handlers use. A disable that lands
//! mid-cycle therefore either happens before the check (no write) or after
//! the write (handler zeroes the LEDs), never in between.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::config::GREEN_ON_LEVEL;
use crate::output::IntensityLevels;
use crate::sampler::SampleReading;
use crate::state::{Debouncer, LogicalButton, Timestamp, ToggleState, Toggles};
use crate::traits::{LedChannel, LedSink};

/// Result of an accepted press, for logging by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeOutcome {
    pub button: LogicalButton,
    /// Flags after the handler ran.
    pub toggles: Toggles,
}

/// Debouncer, toggle flags and LED outputs behind one shared reference.
pub struct Controls<L> {
    debouncer: Debouncer,
    toggles: ToggleState,
    leds: Mutex<CriticalSectionRawMutex, RefCell<L>>,
}

impl<L: LedSink> Controls<L> {
    /// Boot state. `leds` is expected to start with every channel at zero.
    pub const fn new(leds: L) -> Self { Self::with_debouncer(leds, Debouncer::new()) }

    pub const fn with_debouncer(
        leds: L,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            debouncer,
            toggles: ToggleState::new(),
            leds: Mutex::new(RefCell::new(leds)),
        }
    }

    /// Handle a falling edge of `button` observed at `now`.
    ///
    /// Returns `None` for a bounce inside the debounce window; nothing is
    /// changed or written in that case. Safe to call from the edge context:
    /// it never blocks beyond one short critical section.
    pub fn handle_edge(
        &self,
        button: LogicalButton,
        now: Timestamp,
    ) -> Option<EdgeOutcome> {
        if !self.debouncer.accept(button, now) {
            return None;
        }

        let toggles = match button {
            LogicalButton::Joystick => self.on_joystick_press(),
            LogicalButton::ActionA => self.on_action_a_press(),
        };

        Some(EdgeOutcome { button, toggles })
    }

    /// Toggle the green LED and advance the border style.
    fn on_joystick_press(&self) -> Toggles {
        self.with_leds(|leds| {
            let toggles = self.toggles.flip_joystick();
            let level = if toggles.green_led_on { GREEN_ON_LEVEL } else { 0 };
            leds.set_level(LedChannel::Green, level);
            toggles
        })
    }

    /// Toggle the intensity LEDs. Disabling blanks them immediately instead
    /// of waiting for the next cycle. Enabling writes nothing; the next
    /// [`update_outputs`](Self::update_outputs) sets the joystick levels.
    fn on_action_a_press(&self) -> Toggles {
        self.with_leds(|leds| {
            let toggles = self.toggles.flip_pwm();
            if !toggles.pwm_enabled {
                leds.set_level(LedChannel::Blue, 0);
                leds.set_level(LedChannel::Red, 0);
            }
            toggles
        })
    }

    /// Output driver: write blue/red intensity for `reading` if enabled.
    ///
    /// Returns the levels written, or `None` when the LEDs are disabled (the
    /// disabling handler already zeroed them). The green LED is never touched.
    pub fn update_outputs(
        &self,
        reading: SampleReading,
    ) -> Option<IntensityLevels> {
        self.with_leds(|leds| {
            if !self.toggles.pwm_enabled() {
                return None;
            }
            let levels = IntensityLevels::from_reading(reading);
            leds.set_level(LedChannel::Blue, levels.blue);
            leds.set_level(LedChannel::Red, levels.red);
            Some(levels)
        })
    }

    /// Current toggle flags. Lock-free.
    #[inline]
    pub fn toggles(&self) -> Toggles { self.toggles.snapshot() }

    /// Run `f` with exclusive access to the LED outputs.
    pub fn with_leds<U>(
        &self,
        f: impl FnOnce(&mut L) -> U,
    ) -> U {
        self.leds.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
