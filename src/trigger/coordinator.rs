//! Decides when the hop sequence starts.
//!
//! Several independent page signals can mean "the graphic is now worth animating". They all
//! funnel into one debounced, one-shot gate so the sequence starts exactly once per page view.

use crate::foundation::config::TriggerConfig;
use crate::foundation::core::{Millis, Rect};
use crate::trigger::gate::SequenceGate;

/// A page event relevant to starting the sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Signal {
    /// The intersection observer reported a new visible ratio for the region.
    Intersection {
        /// Visible share of the region, in `[0, 1]`.
        ratio: f64,
    },
    /// Initial load finished.
    InitialLoad {
        /// Whether the region is already in view.
        on_screen: bool,
    },
    /// The page was shown.
    PageShow {
        /// True when it came back from the history cache.
        persisted: bool,
        /// Whether the region is in view.
        on_screen: bool,
    },
    /// Tab visibility changed.
    VisibilityChange {
        /// Whether the tab is now visible.
        visible: bool,
        /// Whether the region is in view.
        on_screen: bool,
    },
    /// The page scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
}

impl Signal {
    fn name(self) -> &'static str {
        match self {
            Self::Intersection { .. } => "intersection",
            Self::InitialLoad { .. } => "initial-load",
            Self::PageShow { .. } => "pageshow",
            Self::VisibilityChange { .. } => "visibilitychange",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

/// Share of `region` inside `viewport`, in `[0, 1]`. Empty regions count as not visible.
pub fn visible_ratio(region: Rect, viewport: Rect) -> f64 {
    let area = region.area();
    if area <= 0.0 {
        return 0.0;
    }
    let overlap = region.intersect(viewport);
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// True when any part of `region` overlaps `viewport`.
pub fn is_on_screen(region: Rect, viewport: Rect) -> bool {
    region.y0 < viewport.y1
        && region.y1 > viewport.y0
        && region.x0 < viewport.x1
        && region.x1 > viewport.x0
}

/// Turns page signals into one debounced start.
#[derive(Clone, Debug)]
pub struct TriggerCoordinator {
    gate: SequenceGate,
    threshold: f64,
    debounce: Millis,
    countdown: Option<Millis>,
    observing: bool,
    fallback_armed: bool,
}

impl TriggerCoordinator {
    /// Coordinator observing intersections, nothing scheduled yet.
    pub fn new(config: &TriggerConfig) -> Self {
        Self {
            gate: SequenceGate::new(),
            threshold: config.visible_ratio,
            debounce: config.debounce_ms,
            countdown: None,
            observing: true,
            fallback_armed: true,
        }
    }

    /// Current gate flags.
    pub fn gate(&self) -> SequenceGate {
        self.gate
    }

    /// Whether intersection reports are still being listened to.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feed a page signal. Returns true when it scheduled a start.
    pub fn signal(&mut self, signal: Signal) -> bool {
        if self.gate.sequence_started() {
            return false;
        }

        let wants_start = match signal {
            Signal::Intersection { ratio } => {
                let hit = self.observing && ratio >= self.threshold;
                if hit {
                    self.observing = false;
                }
                hit
            }
            Signal::InitialLoad { on_screen } => on_screen,
            Signal::PageShow { persisted, on_screen } => persisted && on_screen,
            Signal::VisibilityChange { visible, on_screen } => visible && on_screen,
            Signal::Scroll | Signal::Resize => std::mem::replace(&mut self.fallback_armed, false),
        };
        if !wants_start {
            return false;
        }

        if self.gate.try_schedule() {
            tracing::debug!(signal = signal.name(), "start scheduled");
            self.countdown = Some(self.debounce);
            true
        } else {
            tracing::trace!(signal = signal.name(), "start already pending");
            false
        }
    }

    /// Let `dt` pass. Returns true on the one tick where the sequence should start.
    pub fn tick(&mut self, dt: Millis) -> bool {
        let Some(left) = self.countdown else {
            return false;
        };
        let left = left.saturating_sub(dt);
        if left.is_positive() {
            self.countdown = Some(left);
            return false;
        }

        self.countdown = None;
        let fire = self.gate.try_start();
        if fire {
            tracing::info!("starting hop sequence");
        }
        fire
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/coordinator.rs"]
mod tests;
