//! Panel configuration.
//!
//! - `layout`: Display geometry and pre-computed drawing bounds
//! - `timing`: Debounce window and main cycle period
//! - `io`: ADC and PWM scales

pub mod io;
pub mod layout;
pub mod timing;

// Re-export at config level for convenience
pub use io::{ADC_CENTER, ADC_MAX, GREEN_ON_LEVEL, I2C_FREQUENCY_HZ, PWM_TOP};
pub use layout::{
    BORDER_STROKE,
    CURSOR_MAX_X,
    CURSOR_MAX_Y,
    CURSOR_SIZE,
    DISPLAY_HEIGHT,
    DISPLAY_I2C_ADDRESS,
    DISPLAY_WIDTH,
    THICK_BORDER_INSET,
};
pub use timing::{CYCLE_PERIOD_MS, DEBOUNCE_WINDOW_US, STATUS_LOG_INTERVAL};
