//! Frame rendering: border plus joystick cursor.
//!
//! Every frame is drawn from scratch:
//!
//! 1. Clear the framebuffer
//! 2. Outline at the panel edge, plus an inner outline for [`BorderStyle::Thick`]
//! 3. Filled 8x8 cursor at the mapped joystick position
//! 4. Present
//!
//! Draw errors are ignored here; a failed frame is simply replaced by the next.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};

use crate::config::{BORDER_STROKE, CURSOR_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH, THICK_BORDER_INSET};
use crate::sampler::{CursorPosition, SampleReading};
use crate::state::{BorderStyle, Toggles};
use crate::traits::FrameSink;

// =============================================================================
// Pre-computed Geometry
// =============================================================================

/// Outline along the panel edge.
pub const OUTER_BORDER: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));

/// Second outline of the thick border, concentric with [`OUTER_BORDER`].
pub const INNER_BORDER: Rectangle = Rectangle::new(
    Point::new(THICK_BORDER_INSET as i32, THICK_BORDER_INSET as i32),
    Size::new(
        DISPLAY_WIDTH - 2 * THICK_BORDER_INSET,
        DISPLAY_HEIGHT - 2 * THICK_BORDER_INSET,
    ),
);

/// Outlines making up `style`, outermost first.
pub fn border_outlines(style: BorderStyle) -> &'static [Rectangle] {
    match style {
        BorderStyle::Thin => &[OUTER_BORDER],
        BorderStyle::Thick => &[OUTER_BORDER, INNER_BORDER],
    }
}

/// Cursor square at `position`.
#[inline]
pub const fn cursor_rect(position: CursorPosition) -> Rectangle {
    Rectangle::new(position.to_point(), Size::new(CURSOR_SIZE, CURSOR_SIZE))
}

// =============================================================================
// Renderer
// =============================================================================

/// Draws the panel frame onto a [`FrameSink`].
pub struct Renderer {
    outline: PrimitiveStyle<BinaryColor>,
    cursor: PrimitiveStyle<BinaryColor>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            // Inside alignment keeps each outline within its rectangle bounds
            outline: PrimitiveStyleBuilder::new()
                .stroke_color(BinaryColor::On)
                .stroke_width(BORDER_STROKE)
                .stroke_alignment(StrokeAlignment::Inside)
                .build(),
            cursor: PrimitiveStyle::with_fill(BinaryColor::On),
        }
    }

    /// Draw and present one frame.
    pub fn render<D: FrameSink>(
        &self,
        display: &mut D,
        reading: SampleReading,
        toggles: Toggles,
    ) {
        display.clear(BinaryColor::Off).ok();
        self.draw_border(display, toggles.border_style);
        self.draw_cursor(display, reading.cursor_position());
        display.present();
    }

    pub fn draw_border<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
        style: BorderStyle,
    ) {
        for outline in border_outlines(style) {
            outline.into_styled(self.outline).draw(display).ok();
        }
    }

    pub fn draw_cursor<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
        position: CursorPosition,
    ) {
        cursor_rect(position).into_styled(self.cursor).draw(display).ok();
    }
}

impl Default for Renderer {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
