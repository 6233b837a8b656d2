//! The per-frame planner: turns an [`EyeballSpec`], a canvas and an
//! elapsed-time value into an ordered [`FramePlan`].
//!
//! `plan_frame` is pure and stateless: equal inputs produce equal
//! plans. Layers are emitted back-to-front in a fixed order —
//! background, glow, aura, socket, sclera, iris, pupil, highlights —
//! with laser, particles and lightning strictly last so they are never
//! occluded by the subject.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8, Vec2};
use crate::foundation::math::{Fnv1a64, lerp_u8};
use crate::genome::rng::Lcg;
use crate::genome::spec::{EyeShape, EyeballSpec, IrisPattern, PupilShape, ScleraTexture};
use crate::render::plan::{FramePlan, Layer};
use crate::render::shape::{polyline, radial_polygon, shape_path};
use kurbo::Shape as _;

/// Fixed page-dark backdrop behind every portrait.
const BACKGROUND: Rgba8 = Rgba8::opaque(10, 10, 18);

/// Materialization phase below which the laser is skipped entirely.
const LASER_THRESHOLD: f64 = 0.3;

/// Sample count along each laser beam path.
const BEAM_SAMPLES: usize = 24;

/// Recursion depth of the fractal iris pattern.
const FRACTAL_DEPTH: u32 = 4;

/// Radius floor terminating fractal recursion regardless of depth.
const FRACTAL_MIN_RADIUS: f64 = 2.0;

const TOL: f64 = 0.1;

/// Plan one frame for `spec` at elapsed time `time`.
#[tracing::instrument(level = "debug", skip(spec), fields(seed = spec.seed))]
pub fn plan_frame(spec: &EyeballSpec, canvas: Canvas, time: f64) -> FramePlan {
    let mut p = Planner::new(spec, canvas, time);
    p.background();
    p.glow_halo();
    p.aura_rays();
    p.socket();
    p.sclera();
    p.iris();
    p.pupil();
    p.highlights();
    p.laser();
    p.particles();
    p.lightning();
    p.plan
}

struct Planner<'a> {
    spec: &'a EyeballSpec,
    plan: FramePlan,
    center: Point,
    socket_r: f64,
    sclera_r: f64,
    iris_r: f64,
    pupil_r: f64,
    t: f64,
    /// Oscillating iris/pupil offset for this frame.
    wander: Vec2,
}

impl<'a> Planner<'a> {
    fn new(spec: &'a EyeballSpec, canvas: Canvas, t: f64) -> Self {
        let socket_r = spec.socket_radius(canvas);
        let iris_r = spec.iris_radius(canvas);
        let amp = socket_r * 0.04 * spec.energy;
        let wander = Vec2::new((t * 1.3).sin() * amp, (t * 1.7 + 1.3).cos() * amp);
        Self {
            spec,
            plan: FramePlan::new(canvas, t),
            center: canvas.center(),
            socket_r,
            sclera_r: socket_r * 0.85,
            iris_r,
            pupil_r: spec.pupil_radius(canvas),
            t,
            wander,
        }
    }

    fn background(&mut self) {
        let c = self.plan.canvas;
        let rect = Rect::new(0.0, 0.0, f64::from(c.width), f64::from(c.height));
        self.plan
            .fill(Layer::Background, rect.to_path(TOL), Affine::IDENTITY, BACKGROUND);
    }

    /// Concentric decreasing-alpha rings in the effect color, then a
    /// brighter white inner set. Alpha-faked glow, not true additive
    /// blending.
    fn glow_halo(&mut self) {
        if !self.spec.glow {
            return;
        }
        let intensity = self.spec.intensity;
        for i in 0..5 {
            let f = i as f64;
            let radius = self.socket_r * (1.12 + f * 0.16);
            let alpha = 0.16 * intensity * (1.0 - f / 5.0);
            let ring = kurbo::Circle::new(self.center, radius).to_path(TOL);
            self.plan.stroke(
                Layer::Glow,
                ring,
                Affine::IDENTITY,
                self.spec.effect_color.with_alpha(alpha),
                self.socket_r * 0.12,
            );
        }
        for i in 0..3 {
            let f = i as f64;
            let radius = self.socket_r * (1.02 + f * 0.07);
            let alpha = 0.10 * intensity * (1.0 - f / 3.0);
            let ring = kurbo::Circle::new(self.center, radius).to_path(TOL);
            self.plan.stroke(
                Layer::Glow,
                ring,
                Affine::IDENTITY,
                Rgba8::WHITE.with_alpha(alpha),
                self.socket_r * 0.06,
            );
        }
    }

    /// Rotating rays whose length and angle oscillate with time and the
    /// instance energy; each ray is stroked four times, nested widths,
    /// for a glow-through-overlap look.
    fn aura_rays(&mut self) {
        if !self.spec.aura {
            return;
        }
        const RAYS: usize = 12;
        let color = self.spec.aura_color;
        for k in 0..RAYS {
            let f = k as f64;
            let angle = f * TAU / RAYS as f64
                + self.t * 0.35
                + (self.t * 0.9 + f).sin() * 0.06 * self.spec.energy;
            let len = self.socket_r
                * (1.5 + (self.t * 1.1 + f * 0.7).sin() * 0.25 * self.spec.energy);
            let start = self.polar(angle, self.socket_r * 1.08);
            let end = self.polar(angle, self.socket_r * 1.08 + len);
            let ray = polyline(&[start, end]);

            let passes: [(Rgba8, f64); 4] = [
                (color.with_alpha(0.20), 5.0),
                (Rgba8::WHITE.with_alpha(0.18), 3.0),
                (color.with_alpha(0.45), 1.8),
                (Rgba8::WHITE.with_alpha(0.65), 0.8),
            ];
            for (c, w) in passes {
                self.plan
                    .stroke(Layer::Aura, ray.clone(), Affine::IDENTITY, c, w);
            }
        }
    }

    /// Socket plate; under glow, preceded by decreasing-alpha oversized
    /// copies of itself.
    fn socket(&mut self) {
        let shape = self.spec.socket_shape;
        if self.spec.glow {
            for (scale, alpha) in [(1.18, 0.08), (1.12, 0.12), (1.06, 0.18)] {
                let path = shape_path(shape, self.center, self.socket_r * scale);
                self.plan.fill(
                    Layer::Socket,
                    path,
                    Affine::IDENTITY,
                    self.spec.effect_color.with_alpha(alpha),
                );
            }
        }
        let path = shape_path(shape, self.center, self.socket_r);
        self.plan
            .fill(Layer::Socket, path, Affine::IDENTITY, self.spec.socket_color);
    }

    fn sclera(&mut self) {
        let shape = self.spec.socket_shape;
        let path = shape_path(shape, self.center, self.sclera_r);
        self.plan
            .fill(Layer::Sclera, path, Affine::IDENTITY, self.spec.sclera_color);

        match self.spec.sclera_texture {
            ScleraTexture::Veined => self.sclera_veins(),
            ScleraTexture::Metallic => self.sclera_metallic(),
            ScleraTexture::Smooth | ScleraTexture::Marbled | ScleraTexture::Weathered => {}
        }
    }

    /// Short stroked segments radiating from center. The jitter stream
    /// is seeded from the instance identity so veins are static across
    /// frames.
    fn sclera_veins(&mut self) {
        let mut rng = Lcg::new(self.spec.identity_hash() as u32);
        for _ in 0..14 {
            let angle = rng.upto(TAU);
            let inner = self.sclera_r * rng.range(0.25, 0.45);
            let outer = self.sclera_r * rng.range(0.6, 0.95);
            let bend = rng.range(-0.25, 0.25);
            let mid_r = (inner + outer) / 2.0;
            let pts = [
                self.polar(angle, inner),
                self.polar(angle + bend * 0.5, mid_r),
                self.polar(angle + bend, outer),
            ];
            self.plan.stroke(
                Layer::Sclera,
                polyline(&pts),
                Affine::IDENTITY,
                Rgba8::opaque(200, 60, 60).with_alpha(0.28),
                1.2,
            );
        }
    }

    /// Many decreasing-size, decreasing-alpha concentric outlines to
    /// fake a metallic gradient.
    fn sclera_metallic(&mut self) {
        let shape = self.spec.socket_shape;
        const RINGS: usize = 10;
        for i in 0..RINGS {
            let f = i as f64 / RINGS as f64;
            let size = self.sclera_r * (1.0 - f * 0.8);
            let alpha = 0.30 * (1.0 - f);
            let ring = shape_path(shape, self.center, size);
            self.plan.stroke(
                Layer::Sclera,
                ring,
                Affine::IDENTITY,
                Rgba8::opaque(230, 230, 240).with_alpha(alpha),
                1.5,
            );
        }
    }

    fn iris(&mut self) {
        let wander = Affine::translate(self.wander);

        // Dim base plate under every pattern; Solid repaints it fully.
        let base = shape_path(self.spec.iris_shape, self.center, self.iris_r);
        self.plan.fill(
            Layer::Iris,
            base,
            wander,
            mix(self.spec.iris_color_1, Rgba8::opaque(0, 0, 0), 0.55),
        );

        match self.spec.iris_pattern {
            IrisPattern::Solid => {
                let path = shape_path(self.spec.iris_shape, self.center, self.iris_r);
                self.plan
                    .fill(Layer::Iris, path, wander, self.spec.iris_color_1);
            }
            IrisPattern::Radial => self.iris_radial(wander),
            IrisPattern::Spiral => self.iris_spiral(wander),
            IrisPattern::Geometric => self.iris_geometric(wander),
            IrisPattern::Fractal => {
                self.iris_fractal(wander, self.center, self.iris_r * 0.5, FRACTAL_DEPTH)
            }
            IrisPattern::Crystalline => self.iris_crystalline(wander),
            IrisPattern::Void => self.iris_void(wander),
        }

        self.charge_overlay(Layer::Iris, self.iris_r, wander);
    }

    /// Color-interpolated wedge triangles, slowly rotating.
    fn iris_radial(&mut self, wander: Affine) {
        const WEDGES: usize = 12;
        let rot = self.t * 0.2;
        for k in 0..WEDGES {
            let a0 = rot + k as f64 * TAU / WEDGES as f64;
            let a1 = rot + (k + 1) as f64 * TAU / WEDGES as f64;
            let tri = polyline_closed(&[
                self.center,
                self.polar(a0, self.iris_r * 0.96),
                self.polar(a1, self.iris_r * 0.96),
            ]);
            let t = k as f64 / (WEDGES - 1) as f64;
            let color = mix(self.spec.iris_color_1, self.spec.iris_color_2, t);
            self.plan.fill(Layer::Iris, tri, wander, color);
        }
    }

    /// Overlapping stroked paths with sinusoidally modulated radius.
    fn iris_spiral(&mut self, wander: Affine) {
        const ARMS: usize = 3;
        const STEPS: usize = 48;
        for j in 0..ARMS {
            let phase = j as f64 * TAU / ARMS as f64 + self.t * 0.5;
            let mut pts = Vec::with_capacity(STEPS);
            for i in 0..STEPS {
                let theta = i as f64 / (STEPS - 1) as f64 * 2.0 * TAU;
                let grow = 0.12 + 0.84 * theta / (2.0 * TAU);
                let ripple = 1.0 + 0.08 * (theta * 3.0 + phase).sin();
                pts.push(self.polar(theta + phase, self.iris_r * grow * ripple));
            }
            let color = if j % 2 == 0 {
                self.spec.iris_color_2
            } else {
                self.spec.iris_color_1
            };
            self.plan.stroke(
                Layer::Iris,
                polyline(&pts),
                wander,
                color.with_alpha(0.8),
                2.0,
            );
        }
    }

    /// Concentric counter-rotating rings of small squares.
    fn iris_geometric(&mut self, wander: Affine) {
        for ring in 1..=3usize {
            let f = ring as f64;
            let ring_r = self.iris_r * f / 3.5;
            let count = 6 * ring;
            let dir = if ring % 2 == 0 { -1.0 } else { 1.0 };
            let rot = self.t * 0.4 * dir;
            let side = self.iris_r * 0.11;
            for k in 0..count {
                let a = rot + k as f64 * TAU / count as f64;
                let p = self.polar(a, ring_r);
                // Small square rotated to face outward.
                let sq = radial_polygon(p, 4, &[side], a + FRAC_PI_4);
                let color = if (ring + k) % 2 == 0 {
                    self.spec.iris_color_1
                } else {
                    self.spec.iris_color_2
                };
                self.plan.fill(Layer::Iris, sq, wander, color.with_alpha(0.85));
            }
        }
    }

    /// Recursive four-way offset circles. Hard base case on both depth
    /// and radius keeps the recursion bounded.
    fn iris_fractal(&mut self, wander: Affine, center: Point, radius: f64, depth: u32) {
        if depth == 0 || radius < FRACTAL_MIN_RADIUS {
            return;
        }
        let t = depth as f64 / FRACTAL_DEPTH as f64;
        let color = mix(self.spec.iris_color_1, self.spec.iris_color_2, 1.0 - t);
        let disc = kurbo::Circle::new(center, radius).to_path(TOL);
        self.plan
            .fill(Layer::Iris, disc, wander, color.with_alpha(0.5));

        let step = radius * 0.95;
        for (dx, dy) in [(step, 0.0), (-step, 0.0), (0.0, step), (0.0, -step)] {
            let next = Point::new(center.x + dx, center.y + dy);
            self.iris_fractal(wander, next, radius * 0.5, depth - 1);
        }
    }

    /// Ring of outward triangles plus a central disc.
    fn iris_crystalline(&mut self, wander: Affine) {
        const SHARDS: usize = 8;
        let rot = self.t * 0.15;
        for k in 0..SHARDS {
            let a = rot + k as f64 * TAU / SHARDS as f64;
            let half = TAU / SHARDS as f64 * 0.38;
            let tri = polyline_closed(&[
                self.polar(a - half, self.iris_r * 0.45),
                self.polar(a + half, self.iris_r * 0.45),
                self.polar(a, self.iris_r * 0.95),
            ]);
            let color = if k % 2 == 0 {
                self.spec.iris_color_1
            } else {
                self.spec.iris_color_2
            };
            self.plan.fill(Layer::Iris, tri, wander, color.with_alpha(0.9));
        }
        let core = kurbo::Circle::new(self.center, self.iris_r * 0.35).to_path(TOL);
        self.plan
            .fill(Layer::Iris, core, wander, self.spec.iris_color_2);
    }

    /// Twenty alternating-color concentric discs, large and transparent
    /// down to small and opaque.
    fn iris_void(&mut self, wander: Affine) {
        const DISCS: usize = 20;
        for i in 0..DISCS {
            let f = i as f64 / DISCS as f64;
            let radius = self.iris_r * (1.0 - f * 0.95);
            let alpha = 0.08 + f * 0.9;
            let color = if i % 2 == 0 {
                self.spec.iris_color_1
            } else {
                self.spec.iris_color_2
            };
            let disc = kurbo::Circle::new(self.center, radius).to_path(TOL);
            self.plan
                .fill(Layer::Iris, disc, wander, color.with_alpha(alpha.min(1.0)));
        }
    }

    fn pupil(&mut self) {
        let wander = Affine::translate(self.wander);
        let color = self.spec.pupil_color;
        match self.spec.pupil_shape {
            PupilShape::Multiple => {
                for k in 0..3 {
                    let a = FRAC_PI_2 + k as f64 * TAU / 3.0;
                    let p = self.polar(a, self.pupil_r * 0.6);
                    let disc = kurbo::Circle::new(p, self.pupil_r * 0.45).to_path(TOL);
                    self.plan.fill(Layer::Pupil, disc, wander, color);
                }
            }
            PupilShape::Slit => {
                let slit = kurbo::Ellipse::new(
                    self.center,
                    (self.pupil_r * 0.28, self.pupil_r * 1.15),
                    0.0,
                )
                .to_path(TOL);
                self.plan.fill(Layer::Pupil, slit, wander, color);
            }
            PupilShape::Cross => {
                let r = self.pupil_r;
                let horiz = Rect::new(
                    self.center.x - r,
                    self.center.y - r * 0.25,
                    self.center.x + r,
                    self.center.y + r * 0.25,
                );
                let vert = Rect::new(
                    self.center.x - r * 0.25,
                    self.center.y - r,
                    self.center.x + r * 0.25,
                    self.center.y + r,
                );
                self.plan.fill(Layer::Pupil, horiz.to_path(TOL), wander, color);
                self.plan.fill(Layer::Pupil, vert.to_path(TOL), wander, color);
            }
            PupilShape::Void => {
                const LAYERS: usize = 10;
                for i in 0..LAYERS {
                    let f = i as f64 / LAYERS as f64;
                    let radius = self.pupil_r * (1.0 - f * 0.9);
                    let alpha = 0.15 + f * 0.85;
                    let shade = mix(color, Rgba8::opaque(0, 0, 0), f);
                    let disc = kurbo::Circle::new(self.center, radius).to_path(TOL);
                    self.plan
                        .fill(Layer::Pupil, disc, wander, shade.with_alpha(alpha));
                }
            }
            PupilShape::Circle | PupilShape::Diamond | PupilShape::Star => {
                let shape = match self.spec.pupil_shape {
                    PupilShape::Diamond => EyeShape::Diamond,
                    PupilShape::Star => EyeShape::Star,
                    _ => EyeShape::Circle,
                };
                let path = shape_path(shape, self.center, self.pupil_r);
                self.plan.fill(Layer::Pupil, path, wander, color);
            }
        }

        self.charge_overlay(Layer::Pupil, self.pupil_r * 0.6, wander);
    }

    /// Laser charge-up glow composited over the iris and pupil,
    /// synchronized to the same materialization phase the beam uses.
    fn charge_overlay(&mut self, layer: Layer, radius: f64, wander: Affine) {
        if !self.spec.laser {
            return;
        }
        let Some(fade) = laser_fade(self.t) else {
            return;
        };
        let color = self.spec.laser_color;
        for (scale, alpha) in [(1.1, 0.22), (1.25, 0.15), (1.4, 0.09)] {
            let ring = kurbo::Circle::new(self.center, radius * scale).to_path(TOL);
            self.plan.stroke(
                layer,
                ring,
                wander,
                color.with_alpha(alpha * fade * self.spec.intensity),
                radius * 0.12,
            );
        }
        let disc = kurbo::Circle::new(self.center, radius).to_path(TOL);
        self.plan
            .fill(layer, disc.clone(), wander, Rgba8::WHITE.with_alpha(0.18 * fade));
        self.plan
            .fill(layer, disc, wander, color.with_alpha(0.15 * fade));
    }

    /// Two fixed white translucent discs, drawn regardless of flags.
    fn highlights(&mut self) {
        let big = kurbo::Circle::new(
            Point::new(
                self.center.x - self.iris_r * 0.35,
                self.center.y - self.iris_r * 0.35,
            ),
            self.iris_r * 0.18,
        )
        .to_path(TOL);
        let small = kurbo::Circle::new(
            Point::new(
                self.center.x + self.iris_r * 0.22,
                self.center.y - self.iris_r * 0.15,
            ),
            self.iris_r * 0.08,
        )
        .to_path(TOL);
        self.plan.fill(
            Layer::Highlight,
            big,
            Affine::IDENTITY,
            Rgba8::WHITE.with_alpha(0.7),
        );
        self.plan.fill(
            Layer::Highlight,
            small,
            Affine::IDENTITY,
            Rgba8::WHITE.with_alpha(0.5),
        );
    }

    /// Double wave-perturbed beam sweeping a fixed arc, each path
    /// stroked six times wide-to-narrow, with origin sparks at high
    /// intensity.
    fn laser(&mut self) {
        if !self.spec.laser {
            return;
        }
        let Some(fade) = laser_fade(self.t) else {
            return;
        };

        let sweep = (self.t * 2.0).sin();
        let angle = FRAC_PI_2 + sweep * FRAC_PI_4;
        let origin = self.center + self.wander;
        let len = f64::from(self.plan.canvas.width.max(self.plan.canvas.height)) * 1.2;
        let dir = Vec2::new(angle.cos(), angle.sin());
        let perp = Vec2::new(-dir.y, dir.x);
        let color = self.spec.laser_color;

        for (side, fan) in [(-1.0, -0.015), (1.0, 0.015)] {
            let beam_angle = angle + fan;
            let beam_dir = Vec2::new(beam_angle.cos(), beam_angle.sin());
            let root = origin + perp * (side * self.pupil_r * 0.25);
            let mut pts = Vec::with_capacity(BEAM_SAMPLES);
            for i in 0..BEAM_SAMPLES {
                let d = len * i as f64 / (BEAM_SAMPLES - 1) as f64;
                // Wave amplitude grows with distance along the beam.
                let wave = (d * 0.05 + self.t * 6.0 + side).sin() * d * 0.03;
                pts.push(root + beam_dir * d + perp * wave);
            }
            let beam = polyline(&pts);

            let passes: [(Rgba8, f64); 6] = [
                (color.with_alpha(0.10 * fade), 10.0),
                (color.with_alpha(0.16 * fade), 7.0),
                (color.with_alpha(0.28 * fade), 5.0),
                (mix(color, Rgba8::WHITE, 0.5).with_alpha(0.5 * fade), 3.2),
                (Rgba8::WHITE.with_alpha(0.75 * fade), 1.8),
                (Rgba8::WHITE.with_alpha(0.95 * fade), 0.9),
            ];
            for (c, w) in passes {
                self.plan
                    .stroke(Layer::Laser, beam.clone(), Affine::IDENTITY, c, w);
            }
        }

        if fade > 0.7 {
            const SPARKS: usize = 8;
            for k in 0..SPARKS {
                let f = k as f64 / SPARKS as f64;
                let prog = (self.t * 0.9 + f).fract();
                let d = prog * len * 0.35;
                let p = origin + dir * d;
                let radius = 1.5 + 2.0 * (1.0 - prog);
                let c = if k % 2 == 0 { Rgba8::WHITE } else { color };
                let spark = kurbo::Circle::new(p, radius).to_path(TOL);
                self.plan.fill(
                    Layer::Laser,
                    spark,
                    Affine::IDENTITY,
                    c.with_alpha((1.0 - prog) * 0.8 * fade),
                );
            }
        }
    }

    /// Orbiting motes with pulsing alpha.
    fn particles(&mut self) {
        if !self.spec.particles {
            return;
        }
        const MOTES: usize = 16;
        for k in 0..MOTES {
            let f = k as f64;
            let angle = f * TAU / MOTES as f64 + self.t * (0.3 + 0.05 * (k % 4) as f64);
            let orbit = self.socket_r
                * (1.15 + 0.02 * ((k * 37) % 10) as f64 + (self.t * 1.3 + f).sin() * 0.08);
            let p = self.polar(angle, orbit);
            let radius = 1.5 + (k % 3) as f64;
            let pulse = 0.35 + 0.3 * (self.t * 2.1 + f * 1.7).sin();
            let mote = kurbo::Circle::new(p, radius).to_path(TOL);
            self.plan.fill(
                Layer::Particles,
                mote,
                Affine::IDENTITY,
                self.spec
                    .effect_color
                    .with_alpha(pulse.max(0.0) * self.spec.intensity),
            );
        }
    }

    /// Jagged bolts from the iris edge outward past the socket
    /// boundary. Jitter re-rolls on a quantized time bucket so the
    /// frame stays a pure function of (spec, time).
    fn lightning(&mut self) {
        if !self.spec.lightning {
            return;
        }
        let bucket = (self.t * 8.0).floor() as i64;
        let mut h = Fnv1a64::new(self.spec.identity_hash());
        h.write_u64(bucket as u64);
        let mut rng = Lcg::new(h.finish() as u32);

        let bolts = rng.int(3, 4);
        for _ in 0..bolts {
            let mut angle = rng.upto(TAU);
            let mut radius = self.iris_r;
            let mut pts = vec![self.polar(angle, radius)];
            for _ in 0..6 {
                angle += rng.range(-0.45, 0.45);
                radius += self.socket_r * rng.range(0.12, 0.22);
                pts.push(self.polar(angle, radius));
            }
            let bolt = polyline(&pts);
            let passes: [(Rgba8, f64); 3] = [
                (Rgba8::WHITE.with_alpha(0.18), 4.5),
                (Rgba8::opaque(150, 180, 255).with_alpha(0.5), 2.2),
                (Rgba8::WHITE.with_alpha(0.9), 1.0),
            ];
            for (c, w) in passes {
                self.plan
                    .stroke(Layer::Lightning, bolt.clone(), Affine::IDENTITY, c, w);
            }
        }
    }

    fn polar(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.center.x + angle.cos() * radius,
            self.center.y + angle.sin() * radius,
        )
    }
}

/// Laser materialization: slow sine phase gates visibility; above the
/// threshold, intensity fades in on a sine-shaped ease. Returns `None`
/// while the beam is dematerialized.
pub(crate) fn laser_fade(t: f64) -> Option<f64> {
    let phase = (t * 0.8).sin();
    if phase <= LASER_THRESHOLD {
        return None;
    }
    let x = (phase - LASER_THRESHOLD) / (1.0 - LASER_THRESHOLD);
    Some((x * FRAC_PI_2).sin())
}

fn polyline_closed(points: &[Point]) -> crate::foundation::core::BezPath {
    let mut p = polyline(points);
    p.close_path();
    p
}

fn mix(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    Rgba8 {
        r: lerp_u8(a.r, b.r, t),
        g: lerp_u8(a.g, b.g, t),
        b: lerp_u8(a.b, b.b, t),
        a: lerp_u8(a.a, b.a, t),
    }
}
