//! PWM-driven status LEDs.
//!
//! Pin mapping (RGB LED, common cathode):
//! - Green: GPIO11 (PWM slice 5, channel B)
//! - Blue: GPIO12 (PWM slice 6, channel A)
//! - Red: GPIO13 (PWM slice 6, channel B)
//!
//! Every slice wraps at `PWM_TOP`, so duty levels share the 12-bit ADC scale.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use joystick_panel_common::config::PWM_TOP;
use joystick_panel_common::{Controls, LedChannel, LedSink};

/// Control context shared by the button tasks and the main loop.
pub type PanelControls = Controls<PwmLeds<'static>>;

/// Slice configuration with all outputs off.
pub fn led_pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_TOP;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// The three LED channels on their two PWM slices.
pub struct PwmLeds<'d> {
    green: Pwm<'d>,
    green_config: PwmConfig,
    blue_red: Pwm<'d>,
    blue_red_config: PwmConfig,
}

impl<'d> PwmLeds<'d> {
    /// `green` drives channel B of its slice; `blue_red` drives A (blue) and B (red).
    pub fn new(
        green: Pwm<'d>,
        blue_red: Pwm<'d>,
    ) -> Self {
        Self {
            green,
            green_config: led_pwm_config(),
            blue_red,
            blue_red_config: led_pwm_config(),
        }
    }
}

impl LedSink for PwmLeds<'_> {
    fn set_level(
        &mut self,
        channel: LedChannel,
        level: u16,
    ) {
        let level = level.min(PWM_TOP);
        match channel {
            LedChannel::Green => {
                self.green_config.compare_b = level;
                self.green.set_config(&self.green_config);
            }
            LedChannel::Blue => {
                self.blue_red_config.compare_a = level;
                self.blue_red.set_config(&self.blue_red_config);
            }
            LedChannel::Red => {
                self.blue_red_config.compare_b = level;
                self.blue_red.set_config(&self.blue_red_config);
            }
        }
    }
}
