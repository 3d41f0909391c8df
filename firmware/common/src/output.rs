//! Joystick deflection to LED intensity.
//!
//! Deflection from the centre is doubled so full travel in either direction
//! reaches full brightness. At `x = 0` the deflection is 2048 and the doubled
//! value 4096 is one past the PWM range, so the level saturates instead of
//! relying on the counter to wrap.

use crate::config::{ADC_CENTER, PWM_TOP};
use crate::sampler::SampleReading;

/// Duty levels for the two intensity-driven LEDs.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntensityLevels {
    /// Follows the X axis.
    pub blue: u16,
    /// Follows the Y axis.
    pub red: u16,
}

impl IntensityLevels {
    pub const OFF: Self = Self { blue: 0, red: 0 };

    #[inline]
    pub const fn from_reading(reading: SampleReading) -> Self {
        Self {
            blue: intensity_level(reading.x),
            red: intensity_level(reading.y),
        }
    }
}

/// `|raw - 2048| * 2`, saturated to `PWM_TOP`.
#[inline]
pub const fn intensity_level(raw: u16) -> u16 {
    let doubled = raw.abs_diff(ADC_CENTER).saturating_mul(2);
    if doubled > PWM_TOP { PWM_TOP } else { doubled }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_is_dark() {
        assert_eq!(IntensityLevels::from_reading(SampleReading::CENTERED), IntensityLevels::OFF);
    }

    #[test]
    fn test_saturates_at_low_extreme() {
        // |0 - 2048| * 2 = 4096, one past the PWM range
        assert_eq!(intensity_level(0), 4095);
        assert_eq!(intensity_level(1), 4094);
    }

    #[test]
    fn test_high_extreme() {
        assert_eq!(intensity_level(4095), 4094);
    }

    #[test]
    fn test_never_exceeds_pwm_top() {
        for raw in 0..=u16::MAX {
            assert!(intensity_level(raw) <= PWM_TOP);
        }
    }

    #[test]
    fn test_symmetric_about_center() {
        for delta in 0..=2047u16 {
            assert_eq!(intensity_level(ADC_CENTER - delta), intensity_level(ADC_CENTER + delta));
        }
    }

    #[test]
    fn test_axes_map_to_leds() {
        let levels = IntensityLevels::from_reading(SampleReading::new(1048, 2548));
        assert_eq!(levels, IntensityLevels { blue: 2000, red: 1000 });
    }
}
