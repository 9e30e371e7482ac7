//! Flat, id-addressed view of the root graphic.
//!
//! A [`Scene`] keeps only what the animation needs from each identified element: its
//! bounding box in its own coordinate space, the transform from that space to screen pixels,
//! and (for shapes) its outline. Scenes are built from SVG through `usvg`, or by hand.

use std::collections::HashMap;

use anyhow::Context;

use crate::foundation::core::{
    Affine, BezPath, Point, Rect, Size, affine_from_usvg, rect_from_usvg,
};
use crate::foundation::error::VitrinaResult;
use crate::transform::affine::{GeometryAdapter, checked_inverse};

/// One identified element of the graphic.
#[derive(Clone, Debug)]
pub struct SceneElement {
    /// Element id.
    pub id: String,
    /// Element-local space to screen pixels, all ancestor transforms included.
    pub screen_from_local: Affine,
    /// Bounding box in element-local space.
    pub local_bbox: Rect,
    /// Shape outline in element-local space, when the element has one.
    pub outline: Option<BezPath>,
}

impl SceneElement {
    /// Element without an outline.
    pub fn new(id: impl Into<String>, screen_from_local: Affine, local_bbox: Rect) -> Self {
        Self {
            id: id.into(),
            screen_from_local,
            local_bbox,
            outline: None,
        }
    }

    /// Attach an outline in element-local space.
    pub fn with_outline(mut self, outline: BezPath) -> Self {
        self.outline = Some(outline);
        self
    }
}

/// The root graphic: its viewBox, how user space lands on screen, and its identified elements.
#[derive(Clone, Debug)]
pub struct Scene {
    view_box: Rect,
    screen_from_user: Affine,
    elements: HashMap<String, SceneElement>,
}

impl Scene {
    /// Empty scene.
    pub fn new(view_box: Rect, screen_from_user: Affine) -> Self {
        Self {
            view_box,
            screen_from_user,
            elements: HashMap::new(),
        }
    }

    /// Parse SVG bytes. User space is the SVG canvas; `display` is the on-screen size it is
    /// drawn at (defaults to the canvas size, i.e. one user unit per pixel).
    pub fn from_svg_data(bytes: &[u8], display: Option<Size>) -> VitrinaResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

        let canvas = Size::new(
            f64::from(tree.size().width()),
            f64::from(tree.size().height()),
        );
        let display = display.unwrap_or(canvas);
        let screen_from_user =
            Affine::scale_non_uniform(display.width / canvas.width, display.height / canvas.height);

        let mut scene = Self::new(canvas.to_rect(), screen_from_user);
        collect_elements(tree.root(), screen_from_user, &mut scene);
        tracing::debug!(
            elements = scene.elements.len(),
            width = canvas.width,
            height = canvas.height,
            "loaded svg scene"
        );
        Ok(scene)
    }

    /// Add `element`, replacing any element with the same id.
    pub fn insert(&mut self, element: SceneElement) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Element by id.
    pub fn element(&self, id: &str) -> Option<&SceneElement> {
        self.elements.get(id)
    }

    /// The graphic's extent in user space.
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Point conversions for this graphic.
    pub fn geometry(&self) -> GeometryAdapter {
        GeometryAdapter::new(self.screen_from_user)
    }

    /// Number of identified elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no element has an id.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn collect_elements(group: &usvg::Group, screen_from_user: Affine, scene: &mut Scene) {
    for node in group.children() {
        if !node.id().is_empty() {
            scene.insert(element_from_node(node, screen_from_user));
        }
        if let usvg::Node::Group(g) = node {
            collect_elements(g, screen_from_user, scene);
        }
    }
}

fn element_from_node(node: &usvg::Node, screen_from_user: Affine) -> SceneElement {
    let user_from_local = affine_from_usvg(node.abs_transform());
    let user_bbox = rect_from_usvg(node.abs_bounding_box());

    let local_from_user = match checked_inverse(user_from_local) {
        Ok(inv) => inv,
        Err(err) => {
            tracing::warn!(id = node.id(), %err, "element transform is singular; using user space");
            Affine::IDENTITY
        }
    };

    let outline = first_outline(node).map(|(user_from_path, mut bez)| {
        bez.apply_affine(local_from_user * user_from_path);
        bez
    });

    SceneElement {
        id: node.id().to_owned(),
        screen_from_local: screen_from_user * user_from_local,
        local_bbox: local_from_user.transform_rect_bbox(user_bbox),
        outline,
    }
}

/// First non-empty path at or below `node`, with its path → user transform.
fn first_outline(node: &usvg::Node) -> Option<(Affine, BezPath)> {
    match node {
        usvg::Node::Path(path) => {
            let bez = bez_path_from_usvg(path.data());
            (!bez.elements().is_empty()).then(|| (affine_from_usvg(path.abs_transform()), bez))
        }
        usvg::Node::Group(group) => group.children().iter().find_map(first_outline),
        _ => None,
    }
}

fn bez_path_from_usvg(data: &usvg::tiny_skia_path::Path) -> BezPath {
    use usvg::tiny_skia_path::PathSegment;

    fn pt(p: usvg::tiny_skia_path::Point) -> Point {
        Point::new(f64::from(p.x), f64::from(p.y))
    }

    let mut bez = BezPath::new();
    for seg in data.segments() {
        match seg {
            PathSegment::MoveTo(p) => bez.move_to(pt(p)),
            PathSegment::LineTo(p) => bez.line_to(pt(p)),
            PathSegment::QuadTo(p1, p) => bez.quad_to(pt(p1), pt(p)),
            PathSegment::CubicTo(p1, p2, p) => bez.curve_to(pt(p1), pt(p2), pt(p)),
            PathSegment::Close => bez.close_path(),
        }
    }
    bez
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
