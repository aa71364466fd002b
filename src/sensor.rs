//! Shared sensor-derived state between callback and render contexts.
//!
//! Motion and heading samples arrive on sensor callback threads that are not
//! synchronized with the render tick. The hub holds only the latest values
//! (last write wins, no backlog) behind a `critical-section` mutex that is
//! held just long enough to copy a few words, so sensor delivery is never
//! stalled by rendering and a tick never observes a half-written update.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::color::Rgb;

/// Acceleration magnitude that saturates a color channel (m/s² scale).
const ACCEL_FULL_SCALE: f32 = 10.0;

/// Latest raw sensor-derived values, copied out whole at each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSnapshot {
    /// Color target mapped from the most recent motion sample.
    pub color_target: Rgb,
    /// Most recent heading sample, degrees, stored verbatim.
    pub heading: f32,
}

impl RawSnapshot {
    const fn initial() -> Self {
        Self {
            color_target: Rgb { r: 0, g: 0, b: 0 },
            heading: 0.0,
        }
    }
}

impl Default for RawSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Shared holder for the latest raw sensor values.
///
/// The two producers (motion and heading) update disjoint fields and never
/// interleave within one field group: a motion sample replaces the whole RGB
/// triple in a single critical section, a heading sample replaces the heading
/// alone. The reader copies the full snapshot the same way.
pub struct SensorHub {
    inner: Mutex<RefCell<RawSnapshot>>,
}

impl SensorHub {
    /// Create a new hub with all-zero raw state.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(RawSnapshot::initial())),
        }
    }

    /// Get a source handle for sensor callbacks.
    ///
    /// Multiple sources can coexist; the motion and heading streams usually
    /// each hold one.
    pub const fn source(&self) -> SensorSource<'_> {
        SensorSource { hub: self }
    }

    /// Get a reader handle for the render tick.
    pub const fn reader(&self) -> SensorReader<'_> {
        SensorReader { hub: self }
    }

    /// Record a motion sample, replacing the color target atomically.
    pub fn record_motion(&self, x: f32, y: f32, z: f32) {
        let target = Rgb {
            r: accel_to_channel(x),
            g: accel_to_channel(y),
            b: accel_to_channel(z),
        };
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().color_target = target;
        });
    }

    /// Record a heading sample in degrees.
    pub fn record_heading(&self, degrees: f32) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().heading = degrees;
        });
    }

    /// Copy out the current raw values.
    pub fn snapshot(&self) -> RawSnapshot {
        critical_section::with(|cs| *self.inner.borrow(cs).borrow())
    }
}

impl Default for SensorHub {
    fn default() -> Self {
        Self::new()
    }
}

/// A producer handle for a [`SensorHub`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct SensorSource<'a> {
    hub: &'a SensorHub,
}

impl SensorSource<'_> {
    /// Record a motion sample (acceleration components, m/s²).
    pub fn record_motion(&self, x: f32, y: f32, z: f32) {
        self.hub.record_motion(x, y, z);
    }

    /// Record a heading sample in degrees.
    pub fn record_heading(&self, degrees: f32) {
        self.hub.record_heading(degrees);
    }
}

/// A consumer handle for a [`SensorHub`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct SensorReader<'a> {
    hub: &'a SensorHub,
}

impl SensorReader<'_> {
    /// Copy out the current raw values.
    ///
    /// Never blocks waiting for new samples; if nothing arrived since the
    /// last call, the previous values come back again.
    pub fn snapshot(&self) -> RawSnapshot {
        self.hub.snapshot()
    }
}

/// Map one acceleration component to a color channel.
///
/// Full scale (10 m/s², roughly one g) saturates the channel; the sign of the
/// axis is irrelevant since only magnitude carries color.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn accel_to_channel(accel: f32) -> u8 {
    libm::fminf(255.0, libm::roundf(libm::fabsf(-accel * 255.0 / ACCEL_FULL_SCALE))) as u8
}
