use crate::animation::motion::clamp;

const FLATNESS: f64 = 0.3;
const OPACITY_FLOOR: f64 = 0.1;
const OPACITY_RANGE: f64 = 0.35;

/// Attributes of the ground shadow ellipse for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowState {
    /// Center x, in user units.
    pub cx: f64,
    /// Center y (the ground line).
    pub cy: f64,
    /// Horizontal radius.
    pub rx: f64,
    /// Vertical radius.
    pub ry: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl ShadowState {
    /// Same center, radii multiplied by `scale`, opacity multiplied by `fade`.
    pub fn scaled(self, scale: f64, fade: f64) -> Self {
        Self {
            rx: self.rx * scale,
            ry: self.ry * scale,
            opacity: self.opacity * fade,
            ..self
        }
    }

    /// Same ellipse, fully transparent.
    pub fn hidden(self) -> Self {
        Self {
            opacity: 0.0,
            ..self
        }
    }
}

/// How far the marker is above the ground, normalized to `[0, 1]`.
pub fn height_factor(ground_y: f64, object_y: f64) -> f64 {
    clamp((ground_y - object_y) / ground_y.max(1.0), 0.0, 1.0)
}

/// Shadow under a marker at horizontal position `x`, with the ground at `ground_y` and the
/// marker at `object_y`. The ellipse narrows and fades as the marker rises.
pub fn project(x: f64, ground_y: f64, object_y: f64, min_size: f64, max_size: f64) -> ShadowState {
    let lift = 1.0 - height_factor(ground_y, object_y);
    let rx = min_size + (max_size - min_size) * lift;
    ShadowState {
        cx: x,
        cy: ground_y,
        rx,
        ry: FLATNESS * rx,
        opacity: OPACITY_FLOOR + OPACITY_RANGE * lift,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
