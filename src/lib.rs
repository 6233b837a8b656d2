//! Oculyte generates deterministic, animated 2D eyeball portraits.
//!
//! An integer seed is the whole identity of an eyeball: it produces an
//! immutable attribute set (`EyeballSpec`), a human-readable trait
//! manifest for cataloguing, and a per-frame plan of layered draw
//! commands rasterized by a CPU backend.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `seed -> EyeballSpec` (seeded LCG stream, frozen draw order)
//! 2. **Describe**: `EyeballSpec -> TraitManifest` (pure lookup + hashing)
//! 3. **Plan**: `EyeballSpec + Canvas + time -> FramePlan` (ordered, layer-tagged ops)
//! 4. **Raster**: `FramePlan -> FrameRGBA` (CPU backend over `vello_cpu`)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: generation, description and planning
//!   are pure and stable for a given (seed, canvas, time).
//! - **Pushed time**: animation is driven by caller-supplied deltas;
//!   the crate never reads a clock, so frames are trivially replayable.
//! - **Load-bearing layer order**: laser, particle and lightning ops
//!   are emitted strictly after the subject so effects never occlude it.
#![forbid(unsafe_code)]

mod foundation;
mod genome;
mod instance;
mod manifest;
mod render;

pub use foundation::core::{Affine, BezPath, Canvas, FrameRGBA, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{OculyteError, OculyteResult};
pub use genome::palette::{Palette, color_name};
pub use genome::rng::Lcg;
pub use genome::spec::{
    EyeShape, EyeballSpec, IrisPattern, PupilShape, ScleraTexture, Style, bounds, odds,
};
pub use instance::Eyeball;
pub use manifest::export::{
    CollectionEntry, CollectionInfo, TraitAttribute, export_collection,
};
pub use manifest::traits::{POWERS_PLACEHOLDER, TraitEntry, TraitManifest};
pub use render::cpu::CpuRenderer;
pub use render::plan::{DrawOp, FramePlan, Layer, PlannedOp};
pub use render::scene::plan_frame;
pub use render::shape::{polyline, radial_polygon, shape_path};
