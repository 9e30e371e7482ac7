use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::config::{MAX_ANCHOR_SAMPLES, SceneConfig};
use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{VitrinaError, VitrinaResult};
use crate::scene::document::{Scene, SceneElement};

const ARCLEN_ACCURACY: f64 = 1e-4;

/// One stop on the hop path. Positions are fixed at discovery time.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    /// Element id.
    pub id: String,
    /// Bounding-box center in the element's own space.
    pub local_center: Point,
    /// `local_center` in root user space.
    pub user_position: Point,
}

/// Placement data for the marker: which local point touches a waypoint, and how big to draw it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerRig {
    /// Marker-local point placed on each waypoint.
    pub anchor: Point,
    /// Uniform scale the marker is drawn at.
    pub scale: f64,
}

/// Resolve `ids` in order. Ids that do not resolve are logged and skipped.
#[tracing::instrument(skip(scene))]
pub fn locate_waypoints(scene: &Scene, ids: &[String]) -> Vec<Waypoint> {
    let geometry = scene.geometry();
    ids.iter()
        .filter_map(|id| {
            let Some(el) = scene.element(id) else {
                tracing::warn!(%id, "waypoint element not found; skipping");
                return None;
            };
            let local_center = el.local_bbox.center();
            let user_position = geometry
                .local_to_user(el.screen_from_local, local_center)
                .point();
            Some(Waypoint {
                id: id.clone(),
                local_center,
                user_position,
            })
        })
        .collect()
}

/// `samples + 1` points spread evenly by arc length over `path`, both ends included.
/// `samples` is capped at [`MAX_ANCHOR_SAMPLES`].
pub fn sample_outline(path: &BezPath, samples: usize) -> Vec<Point> {
    let samples = samples.min(MAX_ANCHOR_SAMPLES);
    let segs: Vec<PathSeg> = path.segments().collect();
    let Some(first) = segs.first() else {
        return Vec::new();
    };
    let lengths: Vec<f64> = segs.iter().map(|s| s.arclen(ARCLEN_ACCURACY)).collect();
    let total: f64 = lengths.iter().sum();
    if total.is_nan() || total <= 0.0 || samples == 0 {
        return vec![first.start()];
    }

    let mut out = Vec::with_capacity(samples + 1);
    let mut seg_idx = 0;
    let mut seg_start = 0.0;
    for i in 0..=samples {
        let target = total * (i as f64) / (samples as f64);
        while seg_idx + 1 < segs.len() && seg_start + lengths[seg_idx] < target {
            seg_start += lengths[seg_idx];
            seg_idx += 1;
        }
        let seg = &segs[seg_idx];
        let len = lengths[seg_idx];
        let t = if len > 0.0 {
            seg.inv_arclen((target - seg_start).clamp(0.0, len), ARCLEN_ACCURACY)
        } else {
            0.0
        };
        out.push(seg.eval(t.clamp(0.0, 1.0)));
    }
    out
}

/// Lowest outline point in local space (largest y). The first of several equally low
/// samples wins. Without an outline, the bottom-center of the bounding box.
pub fn find_anchor(marker: &SceneElement, samples: usize) -> Point {
    let lowest = marker.outline.as_ref().and_then(|outline| {
        sample_outline(outline, samples)
            .into_iter()
            .fold(None, |best: Option<Point>, p| match best {
                Some(b) if p.y <= b.y => Some(b),
                _ => Some(p),
            })
    });
    lowest.unwrap_or_else(|| bottom_center(marker.local_bbox))
}

fn bottom_center(bbox: Rect) -> Point {
    Point::new(bbox.center().x, bbox.y1)
}

/// Uniform scale giving the marker `fraction` of the view height, never above native size.
pub fn marker_scale(marker_height: f64, view_box_height: f64, fraction: f64) -> f64 {
    if marker_height.is_nan() || marker_height <= 0.0 {
        return 1.0;
    }
    (fraction * view_box_height / marker_height).min(1.0)
}

/// Anchor and scale for the configured marker. Fails when the marker is absent.
pub fn rig_marker(scene: &Scene, config: &SceneConfig) -> VitrinaResult<MarkerRig> {
    let id = &config.elements.marker;
    let marker = scene
        .element(id)
        .ok_or_else(|| VitrinaError::missing_element(id.clone()))?;

    if marker.outline.is_none() {
        tracing::debug!(%id, "marker has no outline; anchoring at bounding-box bottom");
    }
    let anchor = find_anchor(marker, config.locator.anchor_samples);
    let scale = marker_scale(
        marker.local_bbox.height(),
        scene.view_box().height(),
        config.locator.marker_height_fraction,
    );
    Ok(MarkerRig { anchor, scale })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/locator.rs"]
mod tests;
