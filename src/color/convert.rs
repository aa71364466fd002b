use super::{Hsv, Rgb};

/// Convert an 8-bit RGB color to HSV.
///
/// Achromatic input (zero delta) reports hue 0; black additionally reports
/// saturation 0, which is what keeps hue rotation from inventing color where
/// there is none.
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = libm::fmaxf(r, libm::fmaxf(g, b));
    let min = libm::fminf(r, libm::fminf(g, b));
    let delta = max - min;

    let mut hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        // between yellow and magenta
        60.0 * ((g - b) / delta)
    } else if max == g {
        // between cyan and yellow
        60.0 * ((b - r) / delta) + 120.0
    } else {
        // max == b, between magenta and cyan
        60.0 * ((r - g) / delta) + 240.0
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let sat = if max <= 0.0 { 0.0 } else { delta / max };

    Hsv { hue, sat, val: max }
}

/// Convert an HSV color back to 8-bit RGB.
///
/// Expects hue already wrapped into [0, 360); the fallthrough sector arm
/// keeps an exact 360.0 from panicking.
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let c = hsv.sat * hsv.val;
    let h6 = hsv.hue / 60.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = h6 as u32;
    #[allow(clippy::cast_precision_loss)]
    let frac = h6 - sector as f32;

    // x = c * (1 - |h6 mod 2 - 1|); frac rises in even sectors, falls in odd
    let x = if sector & 1 == 0 {
        c * frac
    } else {
        c * (1.0 - frac)
    };
    let m = hsv.val - c;

    let (r1, g1, b1) = match sector {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: channel(r1 + m),
        g: channel(g1 + m),
        b: channel(b1 + m),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(unit: f32) -> u8 {
    libm::fminf(255.0, libm::roundf(unit * 255.0)) as u8
}
