//! Per-surface engine owning the smoothed state.

use crate::color::Rgb;
use crate::compositor::compose;
use crate::sensor::SensorReader;
use crate::smoothing::{ColorSmoother, HeadingSmoother};

/// Engine - integrates raw sensor snapshots into the displayed color.
///
/// Owns both smoothing filters; they are touched from the tick context only.
/// Each [`Engine::compose_frame`] call takes exactly one snapshot and one
/// smoothing step, so sensor streams faster than the render cadence are
/// naturally downsampled to it.
pub struct Engine<'a> {
    sensors: SensorReader<'a>,
    color: ColorSmoother,
    heading: HeadingSmoother,
}

impl<'a> Engine<'a> {
    /// Create an engine reading raw values through `sensors`.
    pub const fn new(sensors: SensorReader<'a>) -> Self {
        Self {
            sensors,
            color: ColorSmoother::new(),
            heading: HeadingSmoother::new(),
        }
    }

    /// Produce the display color for one frame.
    ///
    /// Advances both filters one step toward the current raw values, then
    /// composes the hue-rotated result. Recomputed in full every tick.
    pub fn compose_frame(&mut self) -> Rgb {
        let raw = self.sensors.snapshot();
        let color = self.color.advance(raw.color_target);
        let heading = self.heading.advance(raw.heading);
        compose(color, heading)
    }

    /// Get the smoothed color as of the last frame.
    pub const fn smoothed_color(&self) -> Rgb {
        self.color.current()
    }

    /// Get the smoothed heading as of the last frame. May lie outside
    /// [0, 360).
    pub const fn smoothed_heading(&self) -> f32 {
        self.heading.current()
    }
}
