//! Conversions between element-local space, the root graphic's user space (viewBox units)
//! and screen pixels.
//!
//! Transform math never fails loudly here: a singular or non-finite transform yields
//! [`Mapped::Fallback`] carrying the untouched input point, and a warning is logged.

use crate::foundation::core::{Affine, Point};
use crate::foundation::error::{VitrinaError, VitrinaResult};

const MIN_ABS_DETERMINANT: f64 = 1e-12;

/// Outcome of a point conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Mapped {
    /// The conversion succeeded.
    Exact(Point),
    /// The conversion failed; `point` is the unconverted input.
    Fallback {
        /// Input point, returned unchanged.
        point: Point,
        /// Why the conversion was abandoned.
        reason: String,
    },
}

impl Mapped {
    /// The usable point, converted or not.
    pub fn point(&self) -> Point {
        match self {
            Self::Exact(p) => *p,
            Self::Fallback { point, .. } => *point,
        }
    }

    /// True when the conversion succeeded.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// `a` after `b`.
#[inline]
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

/// Inverse of `m`, or an error when `m` is singular or not finite.
pub fn checked_inverse(m: Affine) -> VitrinaResult<Affine> {
    if !m.is_finite() {
        return Err(VitrinaError::degenerate_transform(format!(
            "non-finite coefficients {:?}",
            m.as_coeffs()
        )));
    }
    let det = m.determinant();
    if det.abs() < MIN_ABS_DETERMINANT {
        return Err(VitrinaError::degenerate_transform(format!(
            "determinant {det} is not invertible"
        )));
    }
    Ok(m.inverse())
}

fn soften(result: VitrinaResult<Point>, input: Point, what: &str) -> Mapped {
    let err = match result {
        Ok(p) if p.is_finite() => return Mapped::Exact(p),
        Ok(p) => VitrinaError::degenerate_transform(format!("{what} produced {p:?}")),
        Err(e) => e,
    };
    tracing::warn!(%err, x = input.x, y = input.y, "{what} failed; using input point");
    Mapped::Fallback {
        point: input,
        reason: err.to_string(),
    }
}

/// Maps points for one root graphic given its current user → screen transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryAdapter {
    screen_from_user: Affine,
}

impl GeometryAdapter {
    /// Adapter for a graphic drawn with `screen_from_user`.
    pub fn new(screen_from_user: Affine) -> Self {
        Self { screen_from_user }
    }

    /// User space to screen pixels.
    pub fn screen_from_user(&self) -> Affine {
        self.screen_from_user
    }

    /// Element-local point to root user space: local → screen through the element's
    /// accumulated transform, then screen → user through the root's inverse.
    pub fn local_to_user(&self, screen_from_local: Affine, p: Point) -> Mapped {
        let result = checked_inverse(self.screen_from_user)
            .map(|user_from_screen| compose(user_from_screen, screen_from_local) * p);
        soften(result, p, "local_to_user")
    }

    /// User-space point to screen pixels.
    pub fn user_to_screen(&self, p: Point) -> Mapped {
        let result = if self.screen_from_user.is_finite() {
            Ok(self.screen_from_user * p)
        } else {
            Err(VitrinaError::degenerate_transform(
                "non-finite root transform",
            ))
        };
        soften(result, p, "user_to_screen")
    }

    /// Screen pixel to user space.
    pub fn screen_to_user(&self, p: Point) -> Mapped {
        let result = checked_inverse(self.screen_from_user).map(|inv| inv * p);
        soften(result, p, "screen_to_user")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
