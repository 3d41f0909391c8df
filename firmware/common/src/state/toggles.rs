//! Flags flipped by accepted button presses.
//!
//! Every field is its own atomic and is only ever written with a plain store,
//! so the main cycle can read a snapshot without taking a lock. Cortex-M0+
//! has no read-modify-write atomics; a flip is a load followed by a store,
//! which is sound because each field has exactly one writer (its button's
//! edge handler) and the debounce window keeps that writer from re-entering.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// =============================================================================
// Border Style
// =============================================================================

/// Border drawn around the display.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BorderStyle {
    /// Single outline at the display edge.
    #[default]
    Thin = 0,
    /// Edge outline plus a second outline inset by 2 px.
    Thick = 1,
}

impl BorderStyle {
    /// Cycle to the next style: Thin -> Thick -> Thin
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Thin => Self::Thick,
            Self::Thick => Self::Thin,
        }
    }

    #[inline]
    const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Thin,
            _ => Self::Thick,
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Copy of the toggle flags, as read once per cycle.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggles {
    pub border_style: BorderStyle,
    pub pwm_enabled: bool,
    pub green_led_on: bool,
}

// =============================================================================
// Shared State
// =============================================================================

/// Toggle flags shared between the edge handlers and the main cycle.
pub struct ToggleState {
    border_style: AtomicU8,
    pwm_enabled: AtomicBool,
    green_led_on: AtomicBool,
}

impl ToggleState {
    /// Boot state: thin border, PWM LEDs disabled, green LED off.
    pub const fn new() -> Self {
        Self {
            border_style: AtomicU8::new(BorderStyle::Thin as u8),
            pwm_enabled: AtomicBool::new(false),
            green_led_on: AtomicBool::new(false),
        }
    }

    /// Read all flags.
    pub fn snapshot(&self) -> Toggles {
        Toggles {
            border_style: self.border_style(),
            pwm_enabled: self.pwm_enabled(),
            green_led_on: self.green_led_on.load(Ordering::Relaxed),
        }
    }

    #[inline]
    pub fn border_style(&self) -> BorderStyle { BorderStyle::from_bits(self.border_style.load(Ordering::Relaxed)) }

    #[inline]
    pub fn pwm_enabled(&self) -> bool { self.pwm_enabled.load(Ordering::Relaxed) }

    /// Joystick press: flip the green LED and advance the border style together.
    pub(crate) fn flip_joystick(&self) -> Toggles {
        let green_led_on = !self.green_led_on.load(Ordering::Relaxed);
        self.green_led_on.store(green_led_on, Ordering::Relaxed);
        let border_style = self.border_style().next();
        self.border_style.store(border_style as u8, Ordering::Relaxed);
        self.snapshot()
    }

    /// Button A press: flip the PWM LED enable.
    pub(crate) fn flip_pwm(&self) -> Toggles {
        let pwm_enabled = !self.pwm_enabled();
        self.pwm_enabled.store(pwm_enabled, Ordering::Relaxed);
        self.snapshot()
    }
}

impl Default for ToggleState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
