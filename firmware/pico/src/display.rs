//! SSD1306 128x64 OLED on I2C1.
//!
//! Pin mapping:
//! - SDA: GPIO14 (I2C1 SDA)
//! - SCL: GPIO15 (I2C1 SCL)
//! - Address: 0x3C

use defmt::warn;
use embassy_rp::i2c::{Blocking, Config as I2cConfig, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use joystick_panel_common::FrameSink;
use joystick_panel_common::config::{DISPLAY_I2C_ADDRESS, I2C_FREQUENCY_HZ};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Buffered-graphics SSD1306 on the blocking I2C1 bus.
pub type PanelDisplay<'d> =
    Ssd1306<I2CInterface<I2c<'d, I2C1, Blocking>>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The panel as seen by the renderer: draws go to the RAM framebuffer,
/// [`FrameSink::present`] pushes it over I2C.
pub struct Panel<'d>(PanelDisplay<'d>);

/// I2C configuration for the display bus (400 kHz fast mode).
pub fn display_i2c_config() -> I2cConfig {
    let mut config = I2cConfig::default();
    config.frequency = I2C_FREQUENCY_HZ;
    config
}

/// Initialize the panel and blank it.
///
/// A display that does not answer at start-up is a wiring fault, so this
/// panics rather than running the loop against a dead bus.
pub fn init_display(i2c: I2c<'_, I2C1, Blocking>) -> Panel<'_> {
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();

    display.init().unwrap();
    display.clear_buffer();
    display.flush().unwrap();
    Panel(display)
}

impl<'d> DrawTarget for Panel<'d> {
    type Color = BinaryColor;
    type Error = <PanelDisplay<'d> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> { self.0.clear(color) }
}

impl OriginDimensions for Panel<'_> {
    fn size(&self) -> Size { self.0.size() }
}

impl FrameSink for Panel<'_> {
    fn present(&mut self) {
        // Dropped frame; the next cycle redraws everything
        if let Err(e) = self.0.flush() {
            warn!("Display flush failed: {}", defmt::Debug2Format(&e));
        }
    }
}
