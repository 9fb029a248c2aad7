//! Piecewise-linear interpolation
//!
//! Maps a scalar through matching input/output ranges, the way animated
//! styles are derived from a single driving value every frame.

/// How values outside the input range are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Hold the nearest output value
    #[default]
    Clamp,
    /// Continue the slope of the nearest segment
    Extend,
}

/// Interpolate `value` across `input` into `output`.
///
/// `input` must be sorted ascending and both slices must have the same
/// length of at least two. Flat segments return their left output.
pub fn interpolate(value: f32, input: &[f32], output: &[f32], extrapolate: Extrapolate) -> f32 {
    debug_assert!(input.len() >= 2 && input.len() == output.len());

    let last = input.len() - 1;
    if extrapolate == Extrapolate::Clamp {
        if value <= input[0] {
            return output[0];
        }
        if value >= input[last] {
            return output[last];
        }
    }

    let segment = input
        .windows(2)
        .position(|w| value <= w[1])
        .unwrap_or(last - 1);

    let (x0, x1) = (input[segment], input[segment + 1]);
    let (y0, y1) = (output[segment], output[segment + 1]);
    let span = x1 - x0;
    if span.abs() <= f32::EPSILON {
        return y0;
    }

    y0 + (value - x0) / span * (y1 - y0)
}

/// Two-point clamped interpolation
pub fn lerp_clamped(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    interpolate(value, &[from.0, from.1], &[to.0, to.1], Extrapolate::Clamp)
}
