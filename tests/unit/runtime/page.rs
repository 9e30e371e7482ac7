use super::*;
use crate::director::renderer::AttributeRenderer;
use crate::foundation::core::{Affine, Rect, Vec2};
use crate::scene::document::SceneElement;

fn scene(with_marker: bool) -> Scene {
    let mut scene = Scene::new(Rect::new(0.0, 0.0, 400.0, 200.0), Affine::IDENTITY);
    for (id, x) in [("punto-a", 40.0), ("punto-b", 140.0), ("punto-c", 240.0), ("punto-d", 340.0)] {
        scene.insert(SceneElement::new(
            id,
            Affine::translate(Vec2::new(x, 150.0)),
            Rect::new(-3.0, -3.0, 3.0, 3.0),
        ));
    }
    scene.insert(SceneElement::new("shadow", Affine::IDENTITY, Rect::new(0.0, 0.0, 36.0, 11.0)));
    if with_marker {
        scene.insert(SceneElement::new("location", Affine::IDENTITY, Rect::new(0.0, 0.0, 20.0, 40.0)));
    }
    scene
}

#[test]
fn burst_of_signals_starts_the_director_once() {
    let cfg = SceneConfig::default();
    let mut page = JumpPage::from_scene(&scene(true), &cfg);
    let mut r = AttributeRenderer::new("location", "shadow");
    assert!(page.is_enabled());

    page.signal(Signal::Intersection { ratio: 0.5 });
    page.frame(Millis(16.0), &mut r);
    page.signal(Signal::PageShow {
        persisted: true,
        on_screen: true,
    });
    page.frame(Millis(16.0), &mut r);
    page.signal(Signal::VisibilityChange {
        visible: true,
        on_screen: true,
    });

    let mut phase = Phase::Idle;
    for _ in 0..2000 {
        phase = page.frame(Millis(16.0), &mut r);
        page.signal(Signal::Scroll);
    }
    assert_eq!(page.starts(), 1);
    assert_eq!(phase, Phase::Done);
    assert_eq!(r.attribute("location", "opacity"), Some("0"));
    assert_eq!(r.attribute("shadow", "opacity"), Some("0"));
}

#[test]
fn nothing_runs_without_a_signal() {
    let mut page = JumpPage::from_scene(&scene(true), &SceneConfig::default());
    let mut r = AttributeRenderer::new("location", "shadow");
    for _ in 0..100 {
        assert_eq!(page.frame(Millis(16.0), &mut r), Phase::Idle);
    }
    assert_eq!(page.starts(), 0);
    assert_eq!(r.attribute("location", "transform"), None);
}

#[test]
fn missing_marker_disables_the_feature() {
    let mut page = JumpPage::from_scene(&scene(false), &SceneConfig::default());
    let mut r = AttributeRenderer::new("location", "shadow");
    assert!(!page.is_enabled());
    page.signal(Signal::InitialLoad { on_screen: true });
    for _ in 0..50 {
        assert_eq!(page.frame(Millis(16.0), &mut r), Phase::Idle);
    }
    assert_eq!(page.starts(), 0);
}

#[test]
fn marker_is_placed_once_started() {
    let mut page = JumpPage::from_scene(&scene(true), &SceneConfig::default());
    let mut r = AttributeRenderer::new("location", "shadow");
    page.signal(Signal::InitialLoad { on_screen: true });
    for _ in 0..8 {
        page.frame(Millis(16.0), &mut r);
    }
    assert_eq!(page.starts(), 1);
    // Marker 40 tall in a 200 tall view: scale 0.6, anchor (10, 40) lands on (40, 150).
    assert_eq!(
        r.attribute("location", "transform"),
        Some("translate(34,126) scale(0.6)")
    );
    assert_eq!(page.director().map(|d| d.phase()), Some(Phase::ShadowEntering));
}
