//! Display geometry.
//!
//! The cursor bounds are derived from the panel size at compile time so the
//! renderer never recomputes them per frame.

// =============================================================================
// Display Configuration
// =============================================================================

/// SSD1306 panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// SSD1306 panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// 7-bit I2C address of the SSD1306 controller.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

// =============================================================================
// Border
// =============================================================================

/// Stroke width of each border outline.
pub const BORDER_STROKE: u32 = 1;

/// Offset of the second outline drawn in the thick border style.
pub const THICK_BORDER_INSET: u32 = 2;

// =============================================================================
// Cursor
// =============================================================================

/// Side length of the square joystick cursor.
pub const CURSOR_SIZE: u32 = 8;

/// Largest cursor X origin. Leaves room for the glyph plus the border margin.
pub const CURSOR_MAX_X: u32 = DISPLAY_WIDTH - 2 * CURSOR_SIZE;

/// Largest cursor Y origin.
pub const CURSOR_MAX_Y: u32 = DISPLAY_HEIGHT - CURSOR_SIZE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_bounds() {
        assert_eq!(CURSOR_MAX_X, 112);
        assert_eq!(CURSOR_MAX_Y, 56);
    }

    #[test]
    fn test_cursor_fits_on_panel() {
        assert!(CURSOR_MAX_X + CURSOR_SIZE <= DISPLAY_WIDTH);
        assert!(CURSOR_MAX_Y + CURSOR_SIZE <= DISPLAY_HEIGHT);
    }
}
