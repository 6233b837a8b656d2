//! The immutable attribute set of one eyeball and its generator.
//!
//! `EyeballSpec::generate` draws every attribute from a seeded [`Lcg`]
//! in a frozen order. The order is load-bearing: changing it changes
//! every seed's appearance and breaks reproducibility with previously
//! published seeds. All animation variation comes from the elapsed-time
//! value pushed into the render pipeline, never from re-sampling.

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::math::Fnv1a64;
use crate::genome::palette::Palette;
use crate::genome::rng::Lcg;

/// Closed set of outline shapes shared by socket, sclera and iris.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EyeShape {
    Circle,
    Oval,
    Diamond,
    Star,
    Hexagon,
    Almond,
}

impl EyeShape {
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Oval,
        Self::Diamond,
        Self::Star,
        Self::Hexagon,
        Self::Almond,
    ];
}

/// Sclera surface treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ScleraTexture {
    Smooth,
    Veined,
    Marbled,
    Metallic,
    Weathered,
}

impl ScleraTexture {
    pub const ALL: [Self; 5] = [
        Self::Smooth,
        Self::Veined,
        Self::Marbled,
        Self::Metallic,
        Self::Weathered,
    ];
}

/// Iris interior pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum IrisPattern {
    Solid,
    Radial,
    Spiral,
    Geometric,
    Fractal,
    Crystalline,
    Void,
}

impl IrisPattern {
    pub const ALL: [Self; 7] = [
        Self::Solid,
        Self::Radial,
        Self::Spiral,
        Self::Geometric,
        Self::Fractal,
        Self::Crystalline,
        Self::Void,
    ];
}

/// Pupil silhouette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PupilShape {
    Circle,
    Slit,
    Diamond,
    Star,
    Cross,
    Multiple,
    Void,
}

impl PupilShape {
    pub const ALL: [Self; 7] = [
        Self::Circle,
        Self::Slit,
        Self::Diamond,
        Self::Star,
        Self::Cross,
        Self::Multiple,
        Self::Void,
    ];
}

/// Overall character style, surfaced in the trait manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Style {
    Mystic,
    Demonic,
    Celestial,
    Mechanical,
    Organic,
    Ethereal,
    Cursed,
}

impl Style {
    pub const ALL: [Self; 7] = [
        Self::Mystic,
        Self::Demonic,
        Self::Celestial,
        Self::Mechanical,
        Self::Organic,
        Self::Ethereal,
        Self::Cursed,
    ];
}

/// Documented bounds for the continuous attributes.
pub mod bounds {
    /// Socket radius as a fraction of the smaller canvas dimension.
    pub const SOCKET_SIZE: (f64, f64) = (0.36, 0.46);
    /// Iris radius as a fraction of the socket radius.
    pub const IRIS_SIZE: (f64, f64) = (0.48, 0.66);
    /// Pupil radius as a fraction of the iris radius.
    pub const PUPIL_SIZE: (f64, f64) = (0.28, 0.46);
    /// Per-instance animation energy multiplier.
    pub const ENERGY: (f64, f64) = (0.5, 2.0);
    /// Effect intensity multiplier.
    pub const INTENSITY: (f64, f64) = (0.5, 1.5);

    /// Minimum radius in pixels for any drawn component.
    pub const MIN_RADIUS_PX: f64 = 4.0;
}

/// Effect-flag sampling probabilities, in draw order.
pub mod odds {
    pub const GLOW: f64 = 0.5;
    pub const LASER: f64 = 0.25;
    pub const AURA: f64 = 0.35;
    pub const PARTICLES: f64 = 0.4;
    pub const LIGHTNING: f64 = 0.2;
}

/// Full immutable attribute record of one eyeball instance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EyeballSpec {
    pub seed: u32,

    pub socket_shape: EyeShape,
    pub socket_size: f64,
    pub socket_color: Rgba8,

    pub sclera_color: Rgba8,
    pub sclera_texture: ScleraTexture,

    pub iris_size: f64,
    pub iris_shape: EyeShape,
    pub iris_color_1: Rgba8,
    pub iris_color_2: Rgba8,
    pub iris_pattern: IrisPattern,

    pub pupil_size: f64,
    pub pupil_shape: PupilShape,
    pub pupil_color: Rgba8,

    pub glow: bool,
    pub laser: bool,
    pub aura: bool,
    pub particles: bool,
    pub lightning: bool,

    pub energy: f64,

    pub effect_color: Rgba8,
    pub laser_color: Rgba8,
    pub aura_color: Rgba8,

    pub style: Style,
    pub intensity: f64,
}

impl EyeballSpec {
    /// Generate the full attribute set for `seed`.
    ///
    /// Draw order is frozen; see module docs.
    #[tracing::instrument(level = "debug")]
    pub fn generate(seed: u32) -> Self {
        let mut rng = Lcg::new(seed);

        let socket_shape = *rng.choice(&EyeShape::ALL);
        let socket_size = rng.range(bounds::SOCKET_SIZE.0, bounds::SOCKET_SIZE.1);
        let socket_color = Palette::Socket.sample(&mut rng);

        let sclera_color = Palette::Sclera.sample(&mut rng);
        let sclera_texture = *rng.choice(&ScleraTexture::ALL);

        let iris_size = rng.range(bounds::IRIS_SIZE.0, bounds::IRIS_SIZE.1);
        let iris_shape = *rng.choice(&EyeShape::ALL);
        let iris_color_1 = Palette::Iris.sample(&mut rng);
        let iris_color_2 = Palette::Iris.sample(&mut rng);
        let iris_pattern = *rng.choice(&IrisPattern::ALL);

        let pupil_size = rng.range(bounds::PUPIL_SIZE.0, bounds::PUPIL_SIZE.1);
        let pupil_shape = *rng.choice(&PupilShape::ALL);
        let pupil_color = Palette::Pupil.sample(&mut rng);

        let glow = rng.chance(odds::GLOW);
        let laser = rng.chance(odds::LASER);
        let aura = rng.chance(odds::AURA);
        let particles = rng.chance(odds::PARTICLES);
        let lightning = rng.chance(odds::LIGHTNING);

        let energy = rng.range(bounds::ENERGY.0, bounds::ENERGY.1);

        let effect_color = Palette::Effect.sample(&mut rng);
        let laser_color = Palette::Laser.sample(&mut rng);
        let aura_color = Palette::Aura.sample(&mut rng);

        let style = *rng.choice(&Style::ALL);
        let intensity = rng.range(bounds::INTENSITY.0, bounds::INTENSITY.1);

        Self {
            seed,
            socket_shape,
            socket_size,
            socket_color,
            sclera_color,
            sclera_texture,
            iris_size,
            iris_shape,
            iris_color_1,
            iris_color_2,
            iris_pattern,
            pupil_size,
            pupil_shape,
            pupil_color,
            glow,
            laser,
            aura,
            particles,
            lightning,
            energy,
            effect_color,
            laser_color,
            aura_color,
            style,
            intensity,
        }
    }

    /// Socket radius in pixels for `canvas`, clamped to a drawable minimum.
    pub fn socket_radius(&self, canvas: Canvas) -> f64 {
        (self.socket_size * canvas.min_dim() * 0.5).max(bounds::MIN_RADIUS_PX)
    }

    /// Iris radius in pixels for `canvas`.
    pub fn iris_radius(&self, canvas: Canvas) -> f64 {
        (self.iris_size * self.socket_radius(canvas)).max(bounds::MIN_RADIUS_PX)
    }

    /// Pupil radius in pixels for `canvas`.
    pub fn pupil_radius(&self, canvas: Canvas) -> f64 {
        (self.pupil_size * self.iris_radius(canvas)).max(bounds::MIN_RADIUS_PX / 2.0)
    }

    /// Number of active effect flags.
    pub fn active_effects(&self) -> usize {
        [
            self.glow,
            self.laser,
            self.aura,
            self.particles,
            self.lightning,
        ]
        .iter()
        .filter(|&&f| f)
        .count()
    }

    /// Stable per-instance hash over the categorical identity.
    ///
    /// Used to seed cosmetic jitter (veins, lightning buckets) and the
    /// manifest's flavor scores without touching the generation stream.
    pub(crate) fn identity_hash(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.seed);
        h.write_u8(self.socket_shape as u8);
        h.write_u8(self.sclera_texture as u8);
        h.write_u8(self.iris_shape as u8);
        h.write_u8(self.iris_pattern as u8);
        h.write_u8(self.pupil_shape as u8);
        h.write_u8(self.style as u8);
        for c in [
            self.socket_color,
            self.sclera_color,
            self.iris_color_1,
            self.iris_color_2,
            self.pupil_color,
        ] {
            h.write_bytes(&[c.r, c.g, c.b]);
        }
        h.finish()
    }
}
