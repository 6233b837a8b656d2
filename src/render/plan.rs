//! Backend-agnostic render IR: an ordered, layer-tagged list of draw
//! ops for one frame.
//!
//! The layer order is the compositing contract: ops are appended
//! back-to-front, and [`Layer::Laser`], [`Layer::Particles`] and
//! [`Layer::Lightning`] are strictly last so effects never occlude the
//! subject.

use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8};

/// Draw layer, declared back-to-front. `Ord` follows declaration order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Layer {
    Background,
    Glow,
    Aura,
    Socket,
    Sclera,
    Iris,
    Pupil,
    Highlight,
    Laser,
    Particles,
    Lightning,
}

impl Layer {
    /// True for the effect layers that must never be occluded.
    pub fn is_overlay_effect(self) -> bool {
        matches!(self, Self::Laser | Self::Particles | Self::Lightning)
    }
}

/// One primitive draw command.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DrawOp {
    FillPath {
        path: BezPath,
        transform: Affine,
        color: Rgba8,
    },
    StrokePath {
        path: BezPath,
        transform: Affine,
        color: Rgba8,
        width: f64,
    },
}

/// A draw command with its layer tag.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlannedOp {
    pub layer: Layer,
    pub op: DrawOp,
}

/// The complete, ordered plan for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FramePlan {
    pub canvas: Canvas,
    pub time: f64,
    pub ops: Vec<PlannedOp>,
}

impl FramePlan {
    pub fn new(canvas: Canvas, time: f64) -> Self {
        Self {
            canvas,
            time,
            ops: Vec::new(),
        }
    }

    pub(crate) fn fill(&mut self, layer: Layer, path: BezPath, transform: Affine, color: Rgba8) {
        self.ops.push(PlannedOp {
            layer,
            op: DrawOp::FillPath {
                path,
                transform,
                color,
            },
        });
    }

    pub(crate) fn stroke(
        &mut self,
        layer: Layer,
        path: BezPath,
        transform: Affine,
        color: Rgba8,
        width: f64,
    ) {
        self.ops.push(PlannedOp {
            layer,
            op: DrawOp::StrokePath {
                path,
                transform,
                color,
                width,
            },
        });
    }

    /// Layer tags in emission order.
    pub fn layer_sequence(&self) -> impl Iterator<Item = Layer> + '_ {
        self.ops.iter().map(|p| p.layer)
    }
}
