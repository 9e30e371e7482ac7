/// `1 - (1 - t)^3` with `t` clamped to `[0, 1]`; decelerates to a zero slope at `t = 1`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
