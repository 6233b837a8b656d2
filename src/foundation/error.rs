/// Convenience result type used across Oculyte.
pub type OculyteResult<T> = Result<T, OculyteError>;

/// Top-level error taxonomy used by crate APIs.
///
/// The generative core (spec generation, trait description, frame
/// planning) is infallible by contract; errors only arise at the
/// raster and IO boundaries.
#[derive(thiserror::Error, Debug)]
pub enum OculyteError {
    /// Invalid caller-provided data (canvas dimensions, seed ranges).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a frame plan.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OculyteError {
    /// Build a [`OculyteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OculyteError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_prefix() {
        let e = OculyteError::validation("canvas width must be > 0");
        assert_eq!(e.to_string(), "validation error: canvas width must be > 0");

        let e = OculyteError::render("pixmap dims exceed u16");
        assert_eq!(e.to_string(), "render error: pixmap dims exceed u16");
    }

    #[test]
    fn anyhow_wraps_transparently() {
        let inner = anyhow::anyhow!("disk on fire");
        let e = OculyteError::from(inner);
        assert_eq!(e.to_string(), "disk on fire");
    }
}
