/// Crate-wide result alias.
pub type VitrinaResult<T> = Result<T, VitrinaError>;

/// Failures that stop a feature from running.
///
/// Cosmetic problems (an unresolvable waypoint, a singular transform) are logged and
/// degraded around instead; they only surface here when nothing usable is left.
#[derive(thiserror::Error, Debug)]
pub enum VitrinaError {
    /// A required element id did not resolve in the scene.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A coordinate transform could not be inverted or produced non-finite output.
    #[error("degenerate transform: {0}")]
    DegenerateTransform(String),

    /// Rejected configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped third-party failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitrinaError {
    /// Build a [`VitrinaError::MissingElement`].
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement(id.into())
    }

    /// Build a [`VitrinaError::DegenerateTransform`].
    pub fn degenerate_transform(msg: impl Into<String>) -> Self {
        Self::DegenerateTransform(msg.into())
    }

    /// Build a [`VitrinaError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`VitrinaError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
