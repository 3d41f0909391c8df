//! Analog and PWM scales.

/// Largest value returned by the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

/// ADC reading of a centred joystick axis.
pub const ADC_CENTER: u16 = 2048;

/// PWM counter wrap value. Duty levels are written in `0..=PWM_TOP`.
pub const PWM_TOP: u16 = 4095;

/// Duty level of the green LED while it is switched on.
pub const GREEN_ON_LEVEL: u16 = 2048;

/// Display bus clock.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;
