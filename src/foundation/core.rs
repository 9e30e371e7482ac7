use std::ops::{Add, Sub};
use std::time::Duration;

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Wall-clock span in milliseconds.
///
/// Every timer in the crate (debounce windows, stage durations, frame deltas) is expressed
/// in this unit so hosts can feed whatever their frame scheduler reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Millis(pub f64);

impl Millis {
    /// Zero-length span.
    pub const ZERO: Self = Self(0.0);

    /// Raw millisecond count.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Fraction of `total` covered by `self`, clamped to `[0, 1]`.
    ///
    /// A non-positive `total` is treated as already elapsed.
    pub fn fraction_of(self, total: Millis) -> f64 {
        if total.0 <= 0.0 {
            return 1.0;
        }
        (self.0 / total.0).clamp(0.0, 1.0)
    }

    /// `self - rhs`, floored at zero.
    pub fn saturating_sub(self, rhs: Millis) -> Millis {
        Millis((self.0 - rhs.0).max(0.0))
    }

    /// Smaller of two spans.
    pub fn min(self, rhs: Millis) -> Millis {
        if rhs.0 < self.0 { rhs } else { self }
    }

    /// True when the span is strictly positive and finite.
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl From<Duration> for Millis {
    fn from(d: Duration) -> Self {
        Self(d.as_secs_f64() * 1000.0)
    }
}

impl Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0 + rhs.0)
    }
}

impl Sub for Millis {
    type Output = Millis;

    fn sub(self, rhs: Millis) -> Millis {
        Millis(self.0 - rhs.0)
    }
}

pub(crate) fn rect_from_usvg(r: usvg::Rect) -> Rect {
    Rect::new(
        f64::from(r.left()),
        f64::from(r.top()),
        f64::from(r.right()),
        f64::from(r.bottom()),
    )
}

pub(crate) fn affine_from_usvg(t: usvg::Transform) -> Affine {
    // tiny-skia stores (sx, ky, kx, sy, tx, ty) as x' = sx*x + kx*y + tx, y' = ky*x + sy*y + ty.
    Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
