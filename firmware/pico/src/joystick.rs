//! Analog joystick on the ADC.
//!
//! - X axis: GPIO26 (ADC0)
//! - Y axis: GPIO27 (ADC1)

use defmt::warn;
use embassy_rp::adc::{Adc, Blocking, Channel};
use joystick_panel_common::config::ADC_CENTER;
use joystick_panel_common::{AnalogSource, Axis};

/// Blocking two-channel joystick sampler.
///
/// A failed conversion repeats the axis' last good value, so the cursor
/// holds still instead of jumping to a corner.
pub struct AdcJoystick<'d> {
    adc: Adc<'d, Blocking>,
    x: Channel<'d>,
    y: Channel<'d>,
    last: [u16; 2],
}

impl<'d> AdcJoystick<'d> {
    pub fn new(
        adc: Adc<'d, Blocking>,
        x: Channel<'d>,
        y: Channel<'d>,
    ) -> Self {
        Self {
            adc,
            x,
            y,
            last: [ADC_CENTER; 2],
        }
    }
}

impl AnalogSource for AdcJoystick<'_> {
    fn read(
        &mut self,
        axis: Axis,
    ) -> u16 {
        let (channel, slot) = match axis {
            Axis::X => (&mut self.x, 0),
            Axis::Y => (&mut self.y, 1),
        };

        match self.adc.blocking_read(channel) {
            Ok(value) => {
                self.last[slot] = value;
                value
            }
            Err(e) => {
                warn!("ADC read failed on {}: {}", axis, defmt::Debug2Format(&e));
                self.last[slot]
            }
        }
    }
}
