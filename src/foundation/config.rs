use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Millis;
use crate::foundation::error::{VitrinaError, VitrinaResult};

/// Upper bound on outline samples; the anchor search allocates one point per sample.
pub const MAX_ANCHOR_SAMPLES: usize = 10_000;

/// Tunables for the waypoint hop animation and its trigger.
///
/// Every section falls back to its defaults when omitted from JSON, so a config file only
/// needs to list what it overrides.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Element ids looked up in the graphic.
    pub elements: ElementIds,
    /// Anchor sampling and marker sizing.
    pub locator: LocatorConfig,
    /// Jump arc and landing shake.
    pub motion: MotionConfig,
    /// Ground shadow sizing.
    pub shadow: ShadowConfig,
    /// Stage durations.
    pub timing: TimingConfig,
    /// Visibility trigger policy.
    pub trigger: TriggerConfig,
}

/// Ids of the elements the animation reads and writes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Waypoints in visiting order.
    pub waypoints: Vec<String>,
    /// The hopping marker.
    pub marker: String,
    /// The ground shadow ellipse.
    pub shadow: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            waypoints: ["punto-a", "punto-b", "punto-c", "punto-d"]
                .into_iter()
                .map(String::from)
                .collect(),
            marker: "location".to_owned(),
            shadow: "shadow".to_owned(),
        }
    }
}

/// How the marker anchor and size are derived.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Arc-length samples taken along the marker outline when searching for its foot.
    pub anchor_samples: usize,
    /// Marker height as a fraction of the graphic's height.
    pub marker_height_fraction: f64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            anchor_samples: 220,
            marker_height_fraction: 0.12,
        }
    }
}

/// Shape of the jump and the landing shake.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Rise of the arc's control point above the chord midpoint, in user units.
    pub jump_height: f64,
    /// Peak horizontal displacement of the landing shake, in user units.
    pub shake_amplitude: f64,
    /// Full oscillations played during the shake.
    pub shake_oscillations: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            jump_height: 60.0,
            shake_amplitude: 6.0,
            shake_oscillations: 3.0,
        }
    }
}

/// Ground shadow sizing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Horizontal radius at the top of a jump.
    pub min_size: f64,
    /// Horizontal radius on the ground.
    pub max_size: f64,
    /// Scale the shadow grows from when it first appears.
    pub enter_start_scale: f64,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            min_size: 6.0,
            max_size: 18.0,
            enter_start_scale: 0.2,
        }
    }
}

/// Stage durations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Shadow growing in before the first jump.
    pub shadow_enter_ms: Millis,
    /// One flight between consecutive waypoints.
    pub jump_ms: Millis,
    /// Landing shake on an intermediate waypoint.
    pub shake_ms: Millis,
    /// Rest between a landing shake and the next take-off.
    pub pause_ms: Millis,
    /// Rest on the final waypoint before fading out.
    pub final_hold_ms: Millis,
    /// Final fade-out of marker and shadow.
    pub fade_ms: Millis,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            shadow_enter_ms: Millis(450.0),
            jump_ms: Millis(1200.0),
            shake_ms: Millis(300.0),
            pause_ms: Millis(300.0),
            final_hold_ms: Millis(1500.0),
            fade_ms: Millis(400.0),
        }
    }
}

/// When the sequence is allowed to start.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Intersection ratio at which the region counts as seen.
    pub visible_ratio: f64,
    /// Delay that coalesces near-simultaneous signals.
    pub debounce_ms: Millis,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            visible_ratio: 0.35,
            debounce_ms: Millis(120.0),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> VitrinaResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| VitrinaError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> VitrinaResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config {}", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject values the animation cannot run with.
    pub fn validate(&self) -> VitrinaResult<()> {
        if self.elements.waypoints.is_empty() {
            return Err(VitrinaError::config("at least one waypoint id is required"));
        }
        if self.elements.marker.is_empty() {
            return Err(VitrinaError::config("marker id must not be empty"));
        }
        let samples = self.locator.anchor_samples;
        if samples == 0 || samples > MAX_ANCHOR_SAMPLES {
            return Err(VitrinaError::config(format!(
                "anchor_samples must be within [1, {MAX_ANCHOR_SAMPLES}], got {samples}"
            )));
        }
        let fraction = self.locator.marker_height_fraction;
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(VitrinaError::config("marker_height_fraction must be > 0"));
        }
        if self.shadow.min_size < 0.0 || self.shadow.min_size > self.shadow.max_size {
            return Err(VitrinaError::config(
                "shadow sizes must satisfy 0 <= min_size <= max_size",
            ));
        }
        if !(0.0..=1.0).contains(&self.shadow.enter_start_scale) {
            return Err(VitrinaError::config("enter_start_scale must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.trigger.visible_ratio) {
            return Err(VitrinaError::config("visible_ratio must be within [0, 1]"));
        }
        if self.trigger.debounce_ms.as_f64() < 0.0 {
            return Err(VitrinaError::config("debounce_ms must be >= 0"));
        }

        let t = &self.timing;
        for (name, ms) in [
            ("shadow_enter_ms", t.shadow_enter_ms),
            ("jump_ms", t.jump_ms),
            ("shake_ms", t.shake_ms),
            ("pause_ms", t.pause_ms),
            ("final_hold_ms", t.final_hold_ms),
            ("fade_ms", t.fade_ms),
        ] {
            if !ms.is_positive() {
                return Err(VitrinaError::config(format!("{name} must be > 0")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
