mod convert;

pub use convert::{hsv2rgb, rgb2hsv};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// HSV color with hue in degrees [0, 360) and saturation/value in [0, 1].
///
/// Hue stays in the degree domain because it is rotated by compass headings;
/// an 8-bit hue circle would quantize the rotation to ~1.4 degree steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub sat: f32,
    pub val: f32,
}
