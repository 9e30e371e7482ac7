//! The hop sequence as a time-driven state machine.
//!
//! ```text
//! Idle -> Positioned -> ShadowEntering -> Jumping(0) -> Landed(1) -> Jumping(1) -> ...
//!      -> Landed(last) -> Fading -> Done
//! ```
//!
//! The director never touches a clock or a frame scheduler. Hosts call
//! [`AnimationDirector::advance`] with the time elapsed since the previous frame, and every
//! frame is recomputed from the position inside the current stage, so uneven frame deltas
//! cannot accumulate drift. Time left over when a stage ends flows into the next one.

use crate::animation::ease::ease_out_cubic;
use crate::animation::motion::{damped_shake, lerp, parabola_at};
use crate::director::renderer::{MarkerTransform, Renderer};
use crate::effects::shadow::{ShadowState, project};
use crate::foundation::config::{MotionConfig, SceneConfig, ShadowConfig, TimingConfig};
use crate::foundation::core::{Millis, Point};
use crate::foundation::error::{VitrinaError, VitrinaResult};
use crate::scene::document::Scene;
use crate::scene::locator::{MarkerRig, Waypoint, locate_waypoints, rig_marker};

/// Stage of the hop sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not started.
    Idle,
    /// Marker placed on the first waypoint and revealed.
    Positioned,
    /// Shadow growing in under the marker.
    ShadowEntering,
    /// Flying from waypoint `i` to waypoint `i + 1`.
    Jumping(usize),
    /// Resting on waypoint `i`: shake and pause, or the final hold.
    Landed(usize),
    /// Marker and shadow fading out.
    Fading,
    /// Finished; nothing is drawn any more.
    Done,
}

/// When a stage began, measured from [`AnimationDirector::start`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageMark {
    /// Stage entered.
    pub phase: Phase,
    /// Clock reading when it was entered.
    pub at: Millis,
}

/// Plays the hop sequence over an ordered waypoint path.
///
/// Created idle; [`Self::start`] is the single entry point and later calls are ignored.
#[derive(Clone, Debug)]
pub struct AnimationDirector {
    path: Vec<Point>,
    rig: MarkerRig,
    shadow_enabled: bool,
    motion: MotionConfig,
    shadow: ShadowConfig,
    timing: TimingConfig,
    phase: Phase,
    phase_elapsed: Millis,
    clock: Millis,
    history: Vec<StageMark>,
}

impl AnimationDirector {
    /// Director over `waypoints` in order. Fails when there is nowhere to put the marker.
    pub fn new(
        waypoints: &[Waypoint],
        rig: MarkerRig,
        shadow_enabled: bool,
        config: &SceneConfig,
    ) -> VitrinaResult<Self> {
        if waypoints.is_empty() {
            return Err(VitrinaError::missing_element(format!(
                "none of the waypoints {:?}",
                config.elements.waypoints
            )));
        }
        Ok(Self {
            path: waypoints.iter().map(|w| w.user_position).collect(),
            rig,
            shadow_enabled,
            motion: config.motion.clone(),
            shadow: config.shadow.clone(),
            timing: config.timing.clone(),
            phase: Phase::Idle,
            phase_elapsed: Millis::ZERO,
            clock: Millis::ZERO,
            history: Vec::new(),
        })
    }

    /// Locate waypoints, rig the marker and probe for the shadow in `scene`.
    pub fn from_scene(scene: &Scene, config: &SceneConfig) -> VitrinaResult<Self> {
        config.validate()?;
        let rig = rig_marker(scene, config)?;
        let waypoints = locate_waypoints(scene, &config.elements.waypoints);
        let shadow_enabled = scene.element(&config.elements.shadow).is_some();
        if !shadow_enabled {
            tracing::warn!(id = %config.elements.shadow, "shadow element not found; shadow effects disabled");
        }
        Self::new(&waypoints, rig, shadow_enabled, config)
    }

    /// Current stage.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the fade-out has finished.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Number of jumps the sequence will play.
    pub fn jump_count(&self) -> usize {
        self.path.len() - 1
    }

    /// Time since [`Self::start`].
    pub fn clock(&self) -> Millis {
        self.clock
    }

    /// Every stage entered so far, in order.
    pub fn history(&self) -> &[StageMark] {
        &self.history
    }

    /// Begin the sequence. Only the first call on an idle director does anything.
    #[tracing::instrument(skip_all)]
    pub fn start<R: Renderer>(&mut self, renderer: &mut R) -> bool {
        if self.phase != Phase::Idle {
            tracing::warn!(phase = ?self.phase, "sequence already started; ignoring");
            return false;
        }

        self.enter(Phase::Positioned);
        // Place, then reveal.
        renderer.set_marker_transform(self.place(self.path[0]));
        renderer.set_marker_opacity(1.0);

        self.enter(Phase::ShadowEntering);
        self.render(renderer);
        true
    }

    /// Move the sequence forward by `dt` and draw the resulting frame.
    pub fn advance<R: Renderer>(&mut self, dt: Millis, renderer: &mut R) -> Phase {
        let mut remaining = Millis(dt.as_f64().max(0.0));
        while let Some(total) = self.duration(self.phase) {
            let left = total.saturating_sub(self.phase_elapsed);
            if remaining < left {
                self.phase_elapsed = self.phase_elapsed + remaining;
                self.clock = self.clock + remaining;
                self.render(renderer);
                break;
            }

            // Snap to the stage end so its final frame is drawn exactly.
            self.phase_elapsed = total;
            self.clock = self.clock + left;
            remaining = remaining.saturating_sub(left);
            self.render(renderer);

            let next = self.next_phase();
            self.enter(next);
            if next == Phase::Done {
                self.render(renderer);
            }
        }
        self.phase
    }

    fn duration(&self, phase: Phase) -> Option<Millis> {
        let t = &self.timing;
        match phase {
            Phase::Idle | Phase::Positioned | Phase::Done => None,
            Phase::ShadowEntering => Some(t.shadow_enter_ms),
            Phase::Jumping(_) => Some(t.jump_ms),
            Phase::Landed(i) if self.is_last(i) => Some(t.final_hold_ms),
            Phase::Landed(_) => Some(t.shake_ms + t.pause_ms),
            Phase::Fading => Some(t.fade_ms),
        }
    }

    fn next_phase(&self) -> Phase {
        match self.phase {
            Phase::Idle => Phase::Idle,
            Phase::Positioned => Phase::ShadowEntering,
            Phase::ShadowEntering if self.path.len() > 1 => Phase::Jumping(0),
            Phase::ShadowEntering => Phase::Landed(0),
            Phase::Jumping(i) => Phase::Landed(i + 1),
            Phase::Landed(i) if self.is_last(i) => Phase::Fading,
            Phase::Landed(i) => Phase::Jumping(i),
            Phase::Fading | Phase::Done => Phase::Done,
        }
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(?phase, at_ms = self.clock.as_f64(), "stage");
        self.phase = phase;
        self.phase_elapsed = Millis::ZERO;
        self.history.push(StageMark {
            phase,
            at: self.clock,
        });
    }

    fn is_last(&self, i: usize) -> bool {
        i + 1 >= self.path.len()
    }

    fn place(&self, at: Point) -> MarkerTransform {
        MarkerTransform::placing(self.rig.anchor, self.rig.scale, at)
    }

    fn grounded_shadow(&self, at: Point) -> ShadowState {
        project(at.x, at.y, at.y, self.shadow.min_size, self.shadow.max_size)
    }

    fn draw_shadow<R: Renderer>(&self, renderer: &mut R, shadow: ShadowState) {
        if self.shadow_enabled {
            renderer.set_shadow(shadow);
        }
    }

    fn render<R: Renderer>(&self, renderer: &mut R) {
        let f = self
            .duration(self.phase)
            .map_or(1.0, |total| self.phase_elapsed.fraction_of(total));

        match self.phase {
            Phase::Idle | Phase::Positioned => {}
            Phase::ShadowEntering => {
                let e = ease_out_cubic(f);
                let scale = lerp(self.shadow.enter_start_scale, 1.0, e);
                self.draw_shadow(renderer, self.grounded_shadow(self.path[0]).scaled(scale, e));
            }
            Phase::Jumping(i) => {
                let (from, to) = (self.path[i], self.path[i + 1]);
                let p = parabola_at(f, from, to, self.motion.jump_height);
                let ground_y = lerp(from.y, to.y, f);
                renderer.set_marker_transform(self.place(p));
                self.draw_shadow(
                    renderer,
                    project(p.x, ground_y, p.y, self.shadow.min_size, self.shadow.max_size),
                );
            }
            Phase::Landed(i) => {
                let at = self.path[i];
                let shaking = !self.is_last(i) && self.phase_elapsed < self.timing.shake_ms;
                let dx = if shaking {
                    damped_shake(
                        self.phase_elapsed.fraction_of(self.timing.shake_ms),
                        self.motion.shake_amplitude,
                        self.motion.shake_oscillations,
                    )
                } else {
                    0.0
                };
                renderer.set_marker_transform(self.place(Point::new(at.x + dx, at.y)));
                self.draw_shadow(renderer, self.grounded_shadow(at));
            }
            Phase::Fading => {
                let at = self.path[self.path.len() - 1];
                renderer.set_marker_opacity(1.0 - f);
                self.draw_shadow(renderer, self.grounded_shadow(at).scaled(1.0, 1.0 - f));
            }
            Phase::Done => {
                let at = self.path[self.path.len() - 1];
                renderer.set_marker_opacity(0.0);
                self.draw_shadow(renderer, self.grounded_shadow(at).hidden());
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/director/timeline.rs"]
mod tests;
