//! One iteration of the sample / output / render cycle.
//!
//! The firmware calls [`MainCycle::step`] forever with a fixed delay in
//! between; the delay itself lives with the executor, not here.

use crate::config::STATUS_LOG_INTERVAL;
use crate::controls::Controls;
use crate::output::IntensityLevels;
use crate::render::Renderer;
use crate::sampler::{SampleReading, Sampler};
use crate::state::Toggles;
use crate::traits::{AnalogSource, FrameSink, LedSink};

/// What a single cycle sampled and drove.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// 1-based cycle counter (wraps).
    pub cycle: u32,
    pub reading: SampleReading,
    pub toggles: Toggles,
    /// Levels written to the blue/red LEDs, `None` while disabled.
    pub levels: Option<IntensityLevels>,
}

impl CycleReport {
    /// True once every [`STATUS_LOG_INTERVAL`] cycles.
    #[inline]
    pub const fn is_status_tick(&self) -> bool { self.cycle % STATUS_LOG_INTERVAL == 0 }
}

/// Sampler, renderer and display, driven against the shared [`Controls`].
pub struct MainCycle<'a, L, A, D> {
    controls: &'a Controls<L>,
    sampler: Sampler<A>,
    renderer: Renderer,
    display: D,
    cycles: u32,
}

impl<'a, L, A, D> MainCycle<'a, L, A, D>
where
    L: LedSink,
    A: AnalogSource,
    D: FrameSink,
{
    pub fn new(
        controls: &'a Controls<L>,
        source: A,
        display: D,
    ) -> Self {
        Self {
            controls,
            sampler: Sampler::new(source),
            renderer: Renderer::new(),
            display,
            cycles: 0,
        }
    }

    /// Sample the joystick, update the intensity LEDs, render and present.
    ///
    /// Toggle flags are read once, after the outputs are written, so the
    /// frame reflects any press that landed before the render started.
    pub fn step(&mut self) -> CycleReport {
        let reading = self.sampler.sample();
        let levels = self.controls.update_outputs(reading);
        let toggles = self.controls.toggles();
        self.renderer.render(&mut self.display, reading, toggles);

        self.cycles = self.cycles.wrapping_add(1);
        CycleReport {
            cycle: self.cycles,
            reading,
            toggles,
            levels,
        }
    }

    #[cfg(test)]
    pub fn cycles(&self) -> u32 { self.cycles }

    #[cfg(test)]
    pub fn display(&self) -> &D { &self.display }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PWM_TOP;
    use crate::state::{BorderStyle, LogicalButton};
    use crate::test_support::{RecordingLeds, ScriptedJoystick, TestDisplay};
    use crate::traits::LedChannel;

    #[test]
    fn test_step_with_leds_disabled() {
        let controls = Controls::new(RecordingLeds::new());
        let mut cycle = MainCycle::new(&controls, ScriptedJoystick::new(&[(0, 4095)]), TestDisplay::panel());

        let report = cycle.step();
        assert_eq!(report.cycle, 1);
        assert_eq!(report.reading, SampleReading::new(0, 4095));
        assert_eq!(report.levels, None);
        assert_eq!(report.toggles.border_style, BorderStyle::Thin);
        assert_eq!(cycle.display().presents(), 1);
        assert!(cycle.display().is_on(0, 56), "cursor drawn at (0, 56)");
        assert!(controls.with_leds(|l| l.writes().is_empty()));
    }

    #[test]
    fn test_press_between_cycles_shows_next_frame() {
        let controls = Controls::new(RecordingLeds::new());
        let mut cycle = MainCycle::new(&controls, ScriptedJoystick::new(&[(2048, 2048)]), TestDisplay::panel());

        cycle.step();
        assert!(!cycle.display().is_on(2, 2));

        controls.handle_edge(LogicalButton::Joystick, 10_000);
        controls.handle_edge(LogicalButton::ActionA, 10_000);

        let report = cycle.step();
        assert_eq!(report.toggles.border_style, BorderStyle::Thick);
        assert_eq!(report.levels, Some(IntensityLevels::OFF));
        assert!(cycle.display().is_on(2, 2), "thick border rendered");
    }

    #[test]
    fn test_outputs_follow_each_sample() {
        let controls = Controls::new(RecordingLeds::new());
        controls.handle_edge(LogicalButton::ActionA, 0);
        let script = [(0, 2048), (2048, 0), (4095, 4095)];
        let mut cycle = MainCycle::new(&controls, ScriptedJoystick::new(&script), TestDisplay::panel());

        assert_eq!(cycle.step().levels, Some(IntensityLevels { blue: PWM_TOP, red: 0 }));
        assert_eq!(cycle.step().levels, Some(IntensityLevels { blue: 0, red: PWM_TOP }));
        assert_eq!(cycle.step().levels, Some(IntensityLevels { blue: 4094, red: 4094 }));
        assert_eq!(controls.with_leds(|l| l.level(LedChannel::Blue)), 4094);
        assert_eq!(cycle.cycles(), 3);
    }

    #[test]
    fn test_status_tick() {
        let controls = Controls::new(RecordingLeds::new());
        let mut cycle = MainCycle::new(&controls, ScriptedJoystick::new(&[(1, 1)]), TestDisplay::panel());

        let ticks = (0..STATUS_LOG_INTERVAL * 3).filter(|_| cycle.step().is_status_tick()).count();
        assert_eq!(ticks, 3);
    }
}
