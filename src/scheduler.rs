//! Frame scheduling for the render loop.
//!
//! Portable and poll-based: the scheduler never reads a clock or owns a
//! timer. The host supplies `now`, arms a cancelable timer for the deadline
//! returned from [`FrameScheduler::poll`], and calls back in when it fires.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::engine::Engine;
use crate::{PaintSurface, TouchPoint};

/// Fixed render cadence (~30 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Drives the render loop while the surface is visible.
///
/// Two states: Hidden (no pending deadline, no ticks fire) and Visible
/// (entered with one immediate tick, then periodic ticks every
/// [`TICK_INTERVAL`]). Geometry and offset changes while Visible produce one
/// additional out-of-band tick that leaves the pending periodic deadline
/// untouched. At most one tick is ever in flight; an overrunning tick simply
/// pushes the next deadline out.
pub struct FrameScheduler<'a, S: PaintSurface> {
    surface: S,
    engine: Engine<'a>,

    visible: bool,
    /// Pending periodic deadline; `None` is the Hidden state's cancellation.
    next_tick: Option<Instant>,

    touch: Option<TouchPoint>,
    center_x: f32,
    center_y: f32,
    offset: f32,
}

impl<'a, S: PaintSurface> FrameScheduler<'a, S> {
    /// Create a scheduler in the Hidden state.
    pub fn new(engine: Engine<'a>, surface: S) -> Self {
        Self {
            surface,
            engine,
            visible: false,
            next_tick: None,
            touch: None,
            center_x: 0.0,
            center_y: 0.0,
            offset: 0.0,
        }
    }

    /// Surface visibility transition.
    ///
    /// Becoming visible performs one immediate tick and arms the periodic
    /// cadence; becoming hidden cancels the pending tick.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("surface visibility: {}", visible);

        self.visible = visible;
        if visible {
            self.tick(now);
        } else {
            self.next_tick = None;
        }
    }

    /// Surface geometry changed; recompute the center point.
    ///
    /// While visible this forces one out-of-band tick. The pending periodic
    /// deadline is not rescheduled, so the extra tick is additional, not a
    /// cadence reset.
    #[allow(clippy::cast_precision_loss)]
    pub fn surface_changed(&mut self, width: u32, height: u32) {
        self.center_x = width as f32 / 2.0;
        self.center_y = height as f32 / 2.0;
        if self.visible {
            self.run_frame();
        }
    }

    /// Wallpaper scroll offset changed. Forces one out-of-band tick while
    /// visible, like a geometry change.
    pub fn offsets_changed(&mut self, offset: f32) {
        self.offset = offset;
        if self.visible {
            self.run_frame();
        }
    }

    /// The drawable surface is gone; equivalent to going hidden.
    pub fn surface_destroyed(&mut self) {
        self.visible = false;
        self.next_tick = None;
    }

    /// A touch-move event at surface coordinates.
    pub fn touch_moved(&mut self, x: f32, y: f32) {
        self.touch = Some(TouchPoint { x, y });
    }

    /// Any non-move touch event clears the touch point.
    pub fn touch_ended(&mut self) {
        self.touch = None;
    }

    /// Fire the periodic tick if its deadline has passed.
    ///
    /// Returns the deadline the host should arm its timer for, or `None`
    /// while hidden (the host disarms). Only one tick fires per call no
    /// matter how late `now` is; re-arming from completion time avoids
    /// catch-up bursts after long stalls.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        let due = self.next_tick?;
        if now >= due {
            self.tick(now);
        }
        self.next_tick
    }

    /// Scheduled tick: render one frame, then re-arm while visible.
    fn tick(&mut self, now: Instant) {
        self.run_frame();
        if self.visible {
            self.next_tick = Some(now + TICK_INTERVAL);
        }
    }

    /// Render one frame: advance the smoothing state and paint.
    ///
    /// A surface that is not ready skips the frame entirely - neither the
    /// smoothers nor the paint call run, so frames painted and smoothing
    /// steps taken stay in lockstep.
    fn run_frame(&mut self) {
        if !self.surface.is_ready() {
            return;
        }
        let color = self.engine.compose_frame();
        self.surface.paint(color, self.touch);
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &Engine<'a> {
        &self.engine
    }

    /// Get a reference to the paint surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get a mutable reference to the paint surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the scheduler is in the Visible state.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Center of the surface, from the last geometry change. Unused by the
    /// color pipeline; kept for the touch-circle overlay.
    pub const fn center(&self) -> (f32, f32) {
        (self.center_x, self.center_y)
    }

    /// Wallpaper scroll offset, from the last offset change.
    pub const fn offset(&self) -> f32 {
        self.offset
    }
}
