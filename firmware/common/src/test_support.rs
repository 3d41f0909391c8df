//! Fakes for the hardware traits, shared by the unit tests.

use std::collections::VecDeque;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::traits::{AnalogSource, Axis, FrameSink, LedChannel, LedSink};

// =============================================================================
// LEDs
// =============================================================================

/// LED sink that keeps the current level of each channel and every write.
pub struct RecordingLeds {
    levels: [u16; LedChannel::COUNT],
    writes: Vec<(LedChannel, u16)>,
}

impl RecordingLeds {
    pub fn new() -> Self {
        Self {
            levels: [0; LedChannel::COUNT],
            writes: Vec::new(),
        }
    }

    pub fn level(
        &self,
        channel: LedChannel,
    ) -> u16 {
        self.levels[channel.index()]
    }

    pub fn writes(&self) -> &[(LedChannel, u16)] { &self.writes }
}

impl LedSink for RecordingLeds {
    fn set_level(
        &mut self,
        channel: LedChannel,
        level: u16,
    ) {
        self.levels[channel.index()] = level;
        self.writes.push((channel, level));
    }
}

// =============================================================================
// Joystick
// =============================================================================

/// Analog source that replays `(x, y)` pairs, repeating the last one.
pub struct ScriptedJoystick {
    script: VecDeque<(u16, u16)>,
    current: (u16, u16),
    axes_read: Vec<Axis>,
}

impl ScriptedJoystick {
    pub fn new(script: &[(u16, u16)]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            current: (0, 0),
            axes_read: Vec::new(),
        }
    }

    pub fn axes_read(&self) -> &[Axis] { &self.axes_read }
}

impl AnalogSource for ScriptedJoystick {
    fn read(
        &mut self,
        axis: Axis,
    ) -> u16 {
        self.axes_read.push(axis);
        match axis {
            // A new sample starts with X
            Axis::X => {
                if let Some(next) = self.script.pop_front() {
                    self.current = next;
                }
                self.current.0
            }
            Axis::Y => self.current.1,
        }
    }
}

// =============================================================================
// Display
// =============================================================================

/// Framebuffer that counts presents and out-of-bounds draws.
///
/// `MockDisplay` tracks neither, so the render tests could not check that a
/// frame was presented or that the cursor stayed on the panel.
pub struct TestDisplay {
    pixels: Vec<BinaryColor>,
    width: u32,
    height: u32,
    presents: usize,
    out_of_bounds: usize,
}

impl TestDisplay {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            pixels: vec![BinaryColor::Off; (width * height) as usize],
            width,
            height,
            presents: 0,
            out_of_bounds: 0,
        }
    }

    /// Display matching the SSD1306 panel (128x64).
    pub fn panel() -> Self { Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT) }

    pub fn is_on(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        self.index(Point::new(x, y)).is_some_and(|i| self.pixels[i] == BinaryColor::On)
    }

    /// Number of lit pixels inside `area`.
    pub fn lit_in(
        &self,
        area: Rectangle,
    ) -> usize {
        area.points().filter(|p| self.is_on(p.x, p.y)).count()
    }

    pub fn presents(&self) -> usize { self.presents }

    pub fn out_of_bounds_draws(&self) -> usize { self.out_of_bounds }

    fn index(
        &self,
        p: Point,
    ) -> Option<usize> {
        let inside = p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height;
        inside.then(|| (p.y as u32 * self.width + p.x as u32) as usize)
    }
}

impl DrawTarget for TestDisplay {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            match self.index(coord) {
                Some(i) => self.pixels[i] = color,
                None => self.out_of_bounds += 1,
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl FrameSink for TestDisplay {
    fn present(&mut self) { self.presents += 1; }
}
