#![no_std]

pub mod angle;
pub mod color;
pub mod compositor;
pub mod engine;
pub mod scheduler;
pub mod sensor;
pub mod smoothing;

pub use color::{Hsv, Rgb};
pub use compositor::compose;
pub use engine::Engine;
pub use scheduler::{FrameScheduler, TICK_INTERVAL};
pub use sensor::{RawSnapshot, SensorHub, SensorReader, SensorSource};
pub use smoothing::{ColorSmoother, HeadingSmoother};
pub use embassy_time::{Duration, Instant};

/// Radius of the touch marker circle, in surface units.
pub const TOUCH_RADIUS: f32 = 80.0;

/// Stroke width of the touch marker circle.
pub const TOUCH_STROKE_WIDTH: f32 = 2.0;

/// Position of the most recent touch-move event, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

/// Abstract paint surface trait
///
/// Implement this trait to connect the render loop to a host surface.
/// The scheduler is generic over this trait.
pub trait PaintSurface {
    /// Whether the drawable surface currently exists.
    ///
    /// A tick that finds the surface not ready skips the whole frame.
    fn is_ready(&self) -> bool {
        true
    }

    /// Fill the surface with `color` and, if a touch point is present,
    /// stroke a circle of [`TOUCH_RADIUS`] around it with an anti-aliased
    /// [`TOUCH_STROKE_WIDTH`] stroke.
    fn paint(&mut self, color: Rgb, touch: Option<TouchPoint>);
}
