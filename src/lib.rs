//! Vitrina is the presentation layer of a listings showcase.
//!
//! It covers three things:
//!
//! - **Cards**: [`render_card`] turns a [`Listing`] into card markup.
//! - **Filtering**: [`FilterSet`] reduces the search form, [`Showcase`] applies it to the
//!   thumbnail grid, [`FilterPanel`] drives the "more filters" toggle.
//! - **Waypoint hop**: a marker hops along named waypoints of an inline SVG once the graphic
//!   scrolls into view.
//!
//! # Hop pipeline
//!
//! 1. **Load**: SVG bytes -> [`Scene`] (id-addressed geometry, via `usvg`)
//! 2. **Locate**: [`Scene`] -> ordered [`Waypoint`]s plus a [`MarkerRig`] (anchor + scale)
//! 3. **Direct**: [`AnimationDirector`] plays the stages frame by frame into a [`Renderer`]
//! 4. **Trigger**: [`TriggerCoordinator`] turns page signals into exactly one start
//!
//! [`JumpPage`] wires 3 and 4 together for a host's frame loop.
//!
//! Geometry problems never abort the page: unresolvable waypoints are skipped, singular
//! transforms fall back to the untransformed point, and a graphic without a marker simply
//! does not animate. All of it is reported through `tracing`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod director;
mod effects;
mod foundation;
mod listing;
mod runtime;
mod scene;
mod transform;
mod trigger;

pub use animation::ease::ease_out_cubic;
pub use animation::motion::{arc_control, clamp, damped_shake, lerp, lerp_point, parabola_at};
pub use director::renderer::{AttributeRenderer, MarkerTransform, Renderer};
pub use director::timeline::{AnimationDirector, Phase, StageMark};
pub use effects::shadow::{ShadowState, height_factor, project};
pub use foundation::config::{
    ElementIds, LocatorConfig, MAX_ANCHOR_SAMPLES, MotionConfig, SceneConfig, ShadowConfig,
    TimingConfig, TriggerConfig,
};
pub use foundation::core::{Affine, BezPath, Millis, Point, Rect, Size, Vec2};
pub use foundation::error::{VitrinaError, VitrinaResult};
pub use listing::card::{Listing, render_card, render_cards};
pub use listing::filter::{
    Checkbox, FilterSet, FormState, MileageBucket, NO_RESULTS_ID, NO_RESULTS_TEXT, NoResults,
    Select, Showcase, Thumbnail,
};
pub use listing::panel::{FilterGroup, FilterPanel, LABEL_COLLAPSED, LABEL_EXPANDED, ToggleOutcome};
pub use listing::text::{TITLE_LIMIT, clamp_title, header_scrolled};
pub use runtime::page::JumpPage;
pub use scene::document::{Scene, SceneElement};
pub use scene::locator::{
    MarkerRig, Waypoint, find_anchor, locate_waypoints, marker_scale, rig_marker, sample_outline,
};
pub use transform::affine::{GeometryAdapter, Mapped, checked_inverse, compose};
pub use trigger::coordinator::{Signal, TriggerCoordinator, is_on_screen, visible_ratio};
pub use trigger::gate::SequenceGate;
