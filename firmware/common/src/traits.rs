//! Boundaries to the panel hardware.
//!
//! The control logic only talks to the ADC, the LED PWM channels and the
//! display through these traits. The firmware crate implements them on the
//! RP2040 peripherals; tests implement them with recording fakes.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

/// Analog joystick axis, one ADC channel each.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// LED driven by a PWM channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    /// Binary on/off, switched by the joystick button.
    Green,
    /// Intensity follows the X deflection.
    Blue,
    /// Intensity follows the Y deflection.
    Red,
}

impl LedChannel {
    pub const COUNT: usize = 3;

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::Blue => 1,
            Self::Red => 2,
        }
    }
}

/// Blocking two-channel sampler.
pub trait AnalogSource {
    /// Latest conversion of `axis`, nominally `0..=4095`.
    fn read(&mut self, axis: Axis) -> u16;
}

/// Fire-and-forget duty level sink.
pub trait LedSink {
    /// Set the duty level of `channel`, in `0..=PWM_TOP`.
    fn set_level(&mut self, channel: LedChannel, level: u16);
}

/// Framebuffer that can be pushed to the panel in one transfer.
///
/// Clearing and rectangle drawing come from [`DrawTarget`].
pub trait FrameSink: DrawTarget<Color = BinaryColor> {
    /// Send the framebuffer to the display. Bus errors are the implementor's
    /// to report; the next frame is a full redraw anyway.
    fn present(&mut self);
}
