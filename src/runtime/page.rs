use crate::director::renderer::Renderer;
use crate::director::timeline::{AnimationDirector, Phase};
use crate::foundation::config::SceneConfig;
use crate::foundation::core::Millis;
use crate::scene::document::Scene;
use crate::trigger::coordinator::{Signal, TriggerCoordinator};

/// One page view: the trigger coordinator wired to the director's single entry point.
///
/// Hosts forward page events to [`JumpPage::signal`] and call [`JumpPage::frame`] from their
/// per-frame callback. When the graphic lacks a marker or usable waypoints the page still
/// accepts events but never animates.
#[derive(Clone, Debug)]
pub struct JumpPage {
    coordinator: TriggerCoordinator,
    director: Option<AnimationDirector>,
    starts: usize,
}

impl JumpPage {
    /// Page around an already built director; `None` disables the animation.
    pub fn new(director: Option<AnimationDirector>, config: &SceneConfig) -> Self {
        Self {
            coordinator: TriggerCoordinator::new(&config.trigger),
            director,
            starts: 0,
        }
    }

    /// Build from a loaded scene; a scene the animation cannot run on disables it.
    pub fn from_scene(scene: &Scene, config: &SceneConfig) -> Self {
        let director = match AnimationDirector::from_scene(scene, config) {
            Ok(director) => Some(director),
            Err(err) => {
                tracing::error!(%err, "hop animation disabled");
                None
            }
        };
        Self::new(director, config)
    }

    /// Whether there is anything to animate.
    pub fn is_enabled(&self) -> bool {
        self.director.is_some()
    }

    /// Forward a page event. Returns true when it scheduled the start.
    pub fn signal(&mut self, signal: Signal) -> bool {
        self.coordinator.signal(signal)
    }

    /// Run one display frame `dt` after the previous one.
    pub fn frame<R: Renderer>(&mut self, dt: Millis, renderer: &mut R) -> Phase {
        let Some(director) = self.director.as_mut() else {
            self.coordinator.tick(dt);
            return Phase::Idle;
        };

        if self.coordinator.tick(dt) && director.start(renderer) {
            self.starts += 1;
            return director.phase();
        }
        director.advance(dt, renderer)
    }

    /// How many times the director's entry point has been invoked.
    pub fn starts(&self) -> usize {
        self.starts
    }

    /// The director, when enabled.
    pub fn director(&self) -> Option<&AnimationDirector> {
        self.director.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/page.rs"]
mod tests;
