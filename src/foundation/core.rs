use crate::foundation::error::{OculyteError, OculyteResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Target surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> OculyteResult<Self> {
        if width == 0 || height == 0 {
            return Err(OculyteError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Center of the surface in pixel coordinates.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Smaller of the two dimensions; all generated sizes scale off this.
    pub fn min_dim(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Same color with alpha scaled to `a01` in [0,1].
    pub fn with_alpha(self, a01: f64) -> Self {
        Self {
            a: (a01.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

/// One rasterized frame: premultiplied RGBA8, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_rejects_zero_dims() {
        assert!(Canvas::new(0, 300).is_err());
        assert!(Canvas::new(300, 0).is_err());
        let c = Canvas::new(300, 200).unwrap();
        assert_eq!(c.center(), Point::new(150.0, 100.0));
        assert_eq!(c.min_dim(), 200.0);
    }

    #[test]
    fn with_alpha_scales_and_clamps() {
        let c = Rgba8::opaque(10, 20, 30);
        assert_eq!(c.with_alpha(0.5).a, 128);
        assert_eq!(c.with_alpha(-1.0).a, 0);
        assert_eq!(c.with_alpha(2.0).a, 255);
        assert_eq!(c.with_alpha(0.5).r, 10);
    }
}
