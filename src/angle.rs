//! Angle math on the 0-360 degree circle.
//!
//! Headings arrive as degrees and may be unnormalized; the smoothed heading
//! is allowed to drift outside [0, 360) entirely. Everything here is total
//! over real inputs.

/// Signed shortest rotational distance from `from` to `to`, in degrees.
///
/// `from + distance` reaches `to` by the shorter path around the circle, so
/// the magnitude never exceeds 180. When the two headings are exactly 180
/// degrees apart both paths are equal length; the direction then falls out
/// of the ordered tie-break below (positive for `from <= to`) and carries no
/// meaning.
pub fn shortest_signed_distance(from: f32, to: f32) -> f32 {
    let d1 = libm::fminf(from, to);
    let d2 = libm::fmaxf(from, to);

    let dist_a = d2 - d1;
    let dist_b = d1 + 360.0 - d2;
    let min_distance = libm::fminf(dist_a, dist_b);

    // The inner distance runs low-to-high; flip once when the outer path is
    // shorter, and again when the caller's order was high-to-low.
    let mut inverted = dist_a > dist_b;
    if from > to {
        inverted = !inverted;
    }

    if inverted { -min_distance } else { min_distance }
}

/// Wrap a degree value into [0, 360) with a true (non-negative) modulo.
///
/// `fmodf` keeps the sign of the dividend, so negative inputs need one more
/// turn added back.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = libm::fmodf(degrees, 360.0);
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}
