//! Hue-rotation composition of the smoothed color and heading.

use crate::angle::wrap_degrees;
use crate::color::{Hsv, Rgb, hsv2rgb, rgb2hsv};

/// Compose the display color for one frame.
///
/// Rotates the hue of `color` by `heading` degrees: RGB to HSV, add the
/// heading to the base hue, wrap into [0, 360), convert back. The heading may
/// be negative or far outside one turn; the wrap handles both. Achromatic
/// colors pass through unchanged since rotating an undefined hue at zero
/// saturation cannot alter the channels.
pub fn compose(color: Rgb, heading: f32) -> Rgb {
    let hsv = rgb2hsv(color);
    let hue = wrap_degrees(heading + hsv.hue);
    hsv2rgb(Hsv { hue, ..hsv })
}
