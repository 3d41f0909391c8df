//! Button edge tasks.
//!
//! Each button gets its own task parked on the pin's falling edge (GPIO
//! interrupt underneath). The task timestamps the edge, hands it to
//! [`Controls::handle_edge`](joystick_panel_common::Controls::handle_edge) and
//! logs accepted presses. Bounces are dropped silently.
//!
//! The tasks share the thread-mode executor with the main loop, so an edge
//! that arrives during the blocking I2C flush is handled (and timestamped)
//! once the flush returns, up to ~25 ms late at 400 kHz. That is well inside
//! the 200 ms debounce window; presses are never lost, only delayed.

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use joystick_panel_common::{EdgeOutcome, LogicalButton};

use crate::leds::PanelControls;

/// Watch one active-low button and feed its presses to the controls.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    mut pin: Input<'static>,
    button: LogicalButton,
    controls: &'static PanelControls,
) {
    info!("{} task started", button.label());

    loop {
        pin.wait_for_falling_edge().await;
        let now = Instant::now().as_micros();

        if let Some(outcome) = controls.handle_edge(button, now) {
            log_press(outcome);
        }
    }
}

fn log_press(outcome: EdgeOutcome) {
    let toggles = outcome.toggles;
    match outcome.button {
        LogicalButton::Joystick => info!(
            "Joystick pressed. Green LED: {} | Border: {}",
            if toggles.green_led_on { "ON" } else { "OFF" },
            toggles.border_style
        ),
        LogicalButton::ActionA => info!(
            "Button A pressed. PWM LEDs: {}",
            if toggles.pwm_enabled { "ENABLED" } else { "DISABLED" }
        ),
    }
}
