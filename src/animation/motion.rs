//! Stateless interpolation helpers for the hop timeline.

use std::f64::consts::TAU;

use crate::foundation::core::Point;

/// `v` limited to `[lo, hi]`. Unlike [`f64::clamp`] this never panics when `lo > hi`;
/// `lo` wins in that case.
#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() || v < lo {
        lo
    } else if v > hi {
        hi.max(lo)
    } else {
        v
    }
}

/// Linear interpolation; `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise [`lerp`].
#[inline]
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Control point of the jump arc: chord midpoint raised by `jump_height` (y grows downward).
pub fn arc_control(start: Point, end: Point, jump_height: f64) -> Point {
    let mid = start.midpoint(end);
    Point::new(mid.x, mid.y - jump_height)
}

/// Point at `t` on the quadratic arc from `start` to `end`.
///
/// `t = 0` returns `start` and `t = 1` returns `end` bit-for-bit.
pub fn parabola_at(t: f64, start: Point, end: Point, jump_height: f64) -> Point {
    let c = arc_control(start, end, jump_height);
    let u = 1.0 - t;
    let (a, b, d) = (u * u, 2.0 * u * t, t * t);
    Point::new(
        a * start.x + b * c.x + d * end.x,
        a * start.y + b * c.y + d * end.y,
    )
}

/// Horizontal offset of the landing shake: a sine whose amplitude decays linearly to zero.
pub fn damped_shake(t: f64, amplitude: f64, oscillations: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    amplitude * (1.0 - t) * (TAU * oscillations * t).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
