//! Per-tick smoothing filters for the sensor-derived state.
//!
//! Both filters advance exactly once per render tick, never per sensor
//! sample; whatever arrived since the previous tick is the target, and
//! anything older is already gone.

use crate::angle::shortest_signed_distance;
use crate::color::Rgb;

/// Weight of the previous value in the per-channel color average.
const COLOR_SMOOTHING: u32 = 10;

/// Divisor applied to the heading delta each step.
const HEADING_SMOOTHING: f32 = 7.5;

/// Discrete exponential moving average over integer RGB channels.
///
/// Each channel steps `new = (10 * current + target) / 11` with floor
/// division. The truncation biases the state toward the previous value: a
/// target close to the current state can be undershot forever (from 0, a
/// target of 5 never moves the channel at all). That convergence behavior is
/// part of the displayed animation, so the integer arithmetic must not be
/// replaced with a floating-point average.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSmoother {
    current: Rgb,
}

impl ColorSmoother {
    pub const fn new() -> Self {
        Self {
            current: Rgb { r: 0, g: 0, b: 0 },
        }
    }

    /// Get the smoothed color.
    pub const fn current(&self) -> Rgb {
        self.current
    }

    /// Advance one step toward `target` and return the new smoothed color.
    pub fn advance(&mut self, target: Rgb) -> Rgb {
        self.current = Rgb {
            r: smooth_channel(self.current.r, target.r),
            g: smooth_channel(self.current.g, target.g),
            b: smooth_channel(self.current.b, target.b),
        };
        self.current
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn smooth_channel(current: u8, target: u8) -> u8 {
    // Result never exceeds max(current, target), so the cast is lossless.
    ((COLOR_SMOOTHING * current as u32 + target as u32) / (COLOR_SMOOTHING + 1)) as u8
}

/// Shortest-path smoother for a wrapping compass heading.
///
/// Each step moves the state 1/7.5 of the shortest signed distance toward the
/// raw heading. The stored value is intentionally never wrapped back into
/// [0, 360): consumers only use it modulo 360, and the distance computation
/// re-derives a bounded delta every step regardless of accumulated drift.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingSmoother {
    current: f32,
}

impl HeadingSmoother {
    pub const fn new() -> Self {
        Self { current: 0.0 }
    }

    /// Get the smoothed heading in degrees. May lie outside [0, 360).
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Advance one step toward `raw` along the shorter rotational path.
    pub fn advance(&mut self, raw: f32) -> f32 {
        let delta = shortest_signed_distance(self.current, raw);
        self.current += delta / HEADING_SMOOTHING;
        self.current
    }
}
