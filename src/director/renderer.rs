//! Output side of the hop animation. The timeline only ever talks to a [`Renderer`].

use std::collections::BTreeMap;

use crate::effects::shadow::ShadowState;
use crate::foundation::core::{Affine, Point, Vec2};

/// `translate(tx,ty) scale(s)` as written onto the marker element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerTransform {
    /// Offset applied after scaling, in user units.
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f64,
}

impl MarkerTransform {
    /// Transform that puts the marker's local `anchor`, drawn at `scale`, exactly on `at`.
    pub fn placing(anchor: Point, scale: f64, at: Point) -> Self {
        Self {
            translate: (at - anchor.to_vec2() * scale).to_vec2(),
            scale,
        }
    }

    /// Same transform as an affine map (translate after scale).
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Value for the marker's `transform` attribute.
    pub fn to_attribute(self) -> String {
        format!(
            "translate({},{}) scale({})",
            fmt_num(self.translate.x),
            fmt_num(self.translate.y),
            fmt_num(self.scale)
        )
    }
}

/// Sink for every visual change the timeline makes.
pub trait Renderer {
    /// Move and scale the marker.
    fn set_marker_transform(&mut self, transform: MarkerTransform);
    /// Set the marker's opacity in `[0, 1]`.
    fn set_marker_opacity(&mut self, opacity: f64);
    /// Redraw the ground shadow.
    fn set_shadow(&mut self, shadow: ShadowState);
}

/// Renderer that keeps the latest attribute strings per element id, the same attributes a
/// page would receive.
#[derive(Clone, Debug)]
pub struct AttributeRenderer {
    marker_id: String,
    shadow_id: String,
    attrs: BTreeMap<String, BTreeMap<&'static str, String>>,
}

impl AttributeRenderer {
    /// Renderer writing to the elements with these ids.
    pub fn new(marker_id: impl Into<String>, shadow_id: impl Into<String>) -> Self {
        Self {
            marker_id: marker_id.into(),
            shadow_id: shadow_id.into(),
            attrs: BTreeMap::new(),
        }
    }

    /// Last value written for `name` on element `id`.
    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.attrs.get(id)?.get(name).map(String::as_str)
    }

    fn set(&mut self, id: &str, name: &'static str, value: String) {
        self.attrs
            .entry(id.to_owned())
            .or_default()
            .insert(name, value);
    }
}

impl Renderer for AttributeRenderer {
    fn set_marker_transform(&mut self, transform: MarkerTransform) {
        let id = self.marker_id.clone();
        self.set(&id, "transform", transform.to_attribute());
    }

    fn set_marker_opacity(&mut self, opacity: f64) {
        let id = self.marker_id.clone();
        self.set(&id, "opacity", fmt_num(opacity));
    }

    fn set_shadow(&mut self, shadow: ShadowState) {
        let id = self.shadow_id.clone();
        self.set(&id, "cx", fmt_num(shadow.cx));
        self.set(&id, "cy", fmt_num(shadow.cy));
        self.set(&id, "rx", fmt_num(shadow.rx));
        self.set(&id, "ry", fmt_num(shadow.ry));
        self.set(&id, "opacity", fmt_num(shadow.opacity));
    }
}

/// Up to three decimals, trailing zeros dropped, never `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_owned(),
        _ => s.to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/director/renderer.rs"]
mod tests;
