//! Joystick Panel Firmware for Raspberry Pi Pico (RP2040)
//!
//! Shows the joystick position as a cursor on a 128x64 SSD1306 OLED and
//! drives an RGB LED from two push buttons.
//!
//! # Architecture
//!
//! - Main task: samples the joystick, updates the blue/red LEDs, renders the
//!   frame, then sleeps 50 ms
//! - Button tasks: one per button, woken by the GPIO falling-edge interrupt;
//!   debounce and flip the toggle flags through the shared `Controls`
//!
//! # Button Controls
//!
//! - **Joystick press** (GPIO22): Toggle green LED and thin/thick border
//! - **A** (GPIO5): Toggle joystick-driven blue/red LED intensity

#![no_std]
#![no_main]

mod display;
mod joystick;
mod leds;
mod tasks;

use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use joystick_panel_common::config::CYCLE_PERIOD_MS;
use joystick_panel_common::{Controls, LogicalButton, MainCycle};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_i2c_config, init_display};
use crate::joystick::AdcJoystick;
use crate::leds::{PanelControls, PwmLeds, led_pwm_config};
use crate::tasks::button_task;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"joystick-panel"),
    embassy_rp::binary_info::rp_program_description!(c"Joystick cursor on SSD1306 with debounced LED toggles"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Shared state for the button tasks and the main loop.
static CONTROLS: StaticCell<PanelControls> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joystick panel starting...");

    let p = embassy_rp::init(Default::default());

    // LEDs: green on slice 5 B, blue/red on slice 6 A/B, all off
    let green = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, led_pwm_config());
    let blue_red = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, led_pwm_config());
    let controls: &'static PanelControls = CONTROLS.init(Controls::new(PwmLeds::new(green, blue_red)));
    info!("LEDs initialized");

    // Joystick: X on ADC0, Y on ADC1
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let joystick = AdcJoystick::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
    );

    // Display: I2C1 with SCL=15, SDA=14
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, display_i2c_config());
    let display = init_display(i2c);
    info!("Display initialized");

    // Buttons (active-low with internal pull-up)
    let btn_joystick = Input::new(p.PIN_22, Pull::Up);
    let btn_a = Input::new(p.PIN_5, Pull::Up);

    spawner.spawn(button_task(btn_joystick, LogicalButton::Joystick, controls)).unwrap();
    spawner.spawn(button_task(btn_a, LogicalButton::ActionA, controls)).unwrap();
    info!("Button tasks spawned");

    let mut cycle = MainCycle::new(controls, joystick, display);

    info!("Main loop starting");

    loop {
        let report = cycle.step();

        if report.is_status_tick() {
            debug!(
                "Cycle {}: x={} y={} | {} | levels {}",
                report.cycle,
                report.reading.x,
                report.reading.y,
                report.toggles,
                report.levels
            );
        }

        Timer::after_millis(CYCLE_PERIOD_MS).await;
    }
}
