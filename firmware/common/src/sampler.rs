//! Joystick sampling and position mapping.

use embedded_graphics::prelude::Point;

use crate::config::{ADC_MAX, CURSOR_MAX_X, CURSOR_MAX_Y};
use crate::traits::{AnalogSource, Axis};

/// Raw joystick position, both axes in `0..=ADC_MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleReading {
    pub x: u16,
    pub y: u16,
}

impl SampleReading {
    /// Reading of a joystick at rest.
    pub const CENTERED: Self = Self::new(crate::config::ADC_CENTER, crate::config::ADC_CENTER);

    /// Build a reading, clamping each axis to the 12-bit range.
    #[inline]
    pub const fn new(
        x: u16,
        y: u16,
    ) -> Self {
        Self {
            x: clamp_adc(x),
            y: clamp_adc(y),
        }
    }

    /// Map the reading onto the drawable cursor area.
    #[inline]
    pub const fn cursor_position(self) -> CursorPosition {
        CursorPosition {
            x: scale_axis(self.x, CURSOR_MAX_X),
            y: scale_axis(self.y, CURSOR_MAX_Y),
        }
    }
}

/// Top-left corner of the cursor square, in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CursorPosition {
    pub x: u32,
    pub y: u32,
}

impl CursorPosition {
    #[inline]
    pub const fn to_point(self) -> Point { Point::new(self.x as i32, self.y as i32) }
}

#[inline]
const fn clamp_adc(raw: u16) -> u16 { if raw > ADC_MAX { ADC_MAX } else { raw } }

/// Rescale a 12-bit value to `0..=span` with truncating division.
#[inline]
pub const fn scale_axis(
    raw: u16,
    span: u32,
) -> u32 {
    clamp_adc(raw) as u32 * span / ADC_MAX as u32
}

/// Reads both joystick axes once per cycle.
pub struct Sampler<A> {
    source: A,
}

impl<A: AnalogSource> Sampler<A> {
    pub const fn new(source: A) -> Self { Self { source } }

    /// Read X then Y. The two conversions are sequential, not simultaneous.
    pub fn sample(&mut self) -> SampleReading {
        let x = self.source.read(Axis::X);
        let y = self.source.read(Axis::Y);
        SampleReading::new(x, y)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedJoystick;

    #[test]
    fn test_cursor_extremes() {
        assert_eq!(
            SampleReading::new(0, 0).cursor_position(),
            CursorPosition { x: 0, y: 0 }
        );
        assert_eq!(
            SampleReading::new(4095, 4095).cursor_position(),
            CursorPosition { x: 112, y: 56 }
        );
    }

    #[test]
    fn test_cursor_bounded_for_all_readings() {
        let mut prev = 0;
        for raw in 0..=ADC_MAX {
            let x = scale_axis(raw, CURSOR_MAX_X);
            let y = scale_axis(raw, CURSOR_MAX_Y);
            assert!(x <= 112, "x_pos {x} out of range for raw {raw}");
            assert!(y <= 56, "y_pos {y} out of range for raw {raw}");
            assert!(x >= prev, "mapping must be monotonic");
            prev = x;
        }
    }

    #[test]
    fn test_cursor_truncates() {
        // 2048 * 112 / 4095 = 56.01..., 2048 * 56 / 4095 = 28.006...
        assert_eq!(
            SampleReading::CENTERED.cursor_position(),
            CursorPosition { x: 56, y: 28 }
        );
    }

    #[test]
    fn test_out_of_range_reading_clamped() {
        let reading = SampleReading::new(u16::MAX, 5000);
        assert_eq!(reading, SampleReading { x: 4095, y: 4095 });
        assert_eq!(reading.cursor_position(), CursorPosition { x: 112, y: 56 });
    }

    #[test]
    fn test_sample_reads_x_then_y() {
        let mut sampler = Sampler::new(ScriptedJoystick::new(&[(100, 3000)]));
        assert_eq!(sampler.sample(), SampleReading { x: 100, y: 3000 });
        assert_eq!(sampler.source.axes_read(), &[Axis::X, Axis::Y]);
    }
}
