//! One live eyeball: immutable spec + manifest, plus the per-instance
//! elapsed-time accumulator.
//!
//! Instances share nothing; any number can be driven by independent
//! tick sources without coordination. Time is pushed in by the caller
//! as deltas — the crate never reads a clock.

use crate::foundation::core::{Canvas, FrameRGBA};
use crate::foundation::error::OculyteResult;
use crate::genome::spec::EyeballSpec;
use crate::manifest::traits::TraitManifest;
use crate::render::cpu::CpuRenderer;
use crate::render::plan::FramePlan;
use crate::render::scene::plan_frame;

/// Seconds of animation time per second of pushed wall time, before
/// the per-instance energy multiplier.
const BASE_RATE: f64 = 1.0;

/// A generated eyeball with its render state.
#[derive(Clone, Debug)]
pub struct Eyeball {
    spec: EyeballSpec,
    manifest: TraitManifest,
    canvas: Canvas,
    elapsed: f64,
}

impl Eyeball {
    /// Generate the instance for `seed` at the given surface size.
    ///
    /// Spec and manifest are built once here and never change; all
    /// frame-to-frame variation comes from the time accumulator.
    pub fn new(seed: u32, width: u32, height: u32) -> OculyteResult<Self> {
        let canvas = Canvas::new(width, height)?;
        let spec = EyeballSpec::generate(seed);
        let manifest = TraitManifest::describe(&spec);
        tracing::debug!(seed, ?canvas, "generated eyeball instance");
        Ok(Self {
            spec,
            manifest,
            canvas,
            elapsed: 0.0,
        })
    }

    pub fn seed(&self) -> u32 {
        self.spec.seed
    }

    pub fn spec(&self) -> &EyeballSpec {
        &self.spec
    }

    /// Ordered trait manifest; stable after construction.
    pub fn traits(&self) -> &TraitManifest {
        &self.manifest
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Accumulated animation time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance the accumulator by `dt` (scaled by the instance energy)
    /// and plan the next frame.
    pub fn advance(&mut self, dt: f64) -> FramePlan {
        self.elapsed += dt * BASE_RATE * self.spec.energy;
        plan_frame(&self.spec, self.canvas, self.elapsed)
    }

    /// Plan a frame at an explicit time without touching the
    /// accumulator. Useful for deterministic inspection and tests.
    pub fn plan_at(&self, time: f64) -> FramePlan {
        plan_frame(&self.spec, self.canvas, time)
    }

    /// Advance and rasterize in one step.
    pub fn render(&mut self, renderer: &mut CpuRenderer, dt: f64) -> OculyteResult<FrameRGBA> {
        let plan = self.advance(dt);
        renderer.render(&plan)
    }
}
