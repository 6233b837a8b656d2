//! Fixed color palettes and the nearest-named-color classifier.
//!
//! Each color category owns a small table of base RGB triples; sampling
//! picks a base uniformly and then jitters each channel independently
//! within [-30, 30], clamped to [0, 255]. Sampling consumes exactly
//! four stream draws (base pick + three channel jitters).

use crate::foundation::core::Rgba8;
use crate::genome::rng::Lcg;

/// Per-channel jitter bound applied after the base pick.
const JITTER: f64 = 30.0;

/// Color category, keyed to the part of the portrait it paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Palette {
    Socket,
    Sclera,
    Iris,
    Pupil,
    Effect,
    Laser,
    Aura,
}

impl Palette {
    fn base_colors(self) -> &'static [(u8, u8, u8)] {
        match self {
            Self::Socket => &[
                (184, 134, 11),
                (192, 192, 200),
                (140, 90, 50),
                (60, 60, 75),
                (120, 40, 140),
                (40, 110, 120),
            ],
            Self::Sclera => &[
                (240, 240, 235),
                (225, 215, 185),
                (200, 220, 235),
                (215, 195, 225),
                (180, 180, 190),
            ],
            Self::Iris => &[
                (70, 130, 180),
                (46, 139, 87),
                (178, 34, 34),
                (218, 165, 32),
                (138, 43, 226),
                (255, 140, 0),
                (0, 160, 170),
                (199, 21, 133),
            ],
            Self::Pupil => &[
                (15, 15, 20),
                (40, 20, 20),
                (20, 30, 45),
                (35, 15, 45),
                (25, 25, 25),
            ],
            Self::Effect => &[
                (0, 255, 200),
                (255, 80, 220),
                (120, 255, 80),
                (255, 200, 40),
                (80, 160, 255),
            ],
            Self::Laser => &[
                (255, 40, 40),
                (255, 90, 20),
                (220, 30, 160),
                (60, 220, 255),
            ],
            Self::Aura => &[
                (160, 120, 255),
                (80, 230, 180),
                (255, 170, 60),
                (110, 190, 255),
                (240, 100, 140),
            ],
        }
    }

    /// Draw one jittered color from this palette.
    pub fn sample(self, rng: &mut Lcg) -> Rgba8 {
        let &(r, g, b) = rng.choice(self.base_colors());
        let jitter = |rng: &mut Lcg, c: u8| -> u8 {
            (f64::from(c) + rng.range(-JITTER, JITTER))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        let r = jitter(rng, r);
        let g = jitter(rng, g);
        let b = jitter(rng, b);
        Rgba8::opaque(r, g, b)
    }
}

/// Classify a color into one of 17 named buckets.
///
/// Priority-ordered channel-threshold predicates; the first match wins
/// and the final arm catches everything else.
pub fn color_name(c: Rgba8) -> &'static str {
    let (r, g, b) = (i32::from(c.r), i32::from(c.g), i32::from(c.b));
    if r > 220 && g > 220 && b > 220 {
        "Pearl"
    } else if r < 40 && g < 40 && b < 40 {
        "Obsidian"
    } else if r > 200 && g < 90 && b < 90 {
        "Crimson"
    } else if r > 200 && g > 120 && g < 190 && b < 80 {
        "Amber"
    } else if r > 190 && g > 170 && b < 110 {
        "Gold"
    } else if r < 110 && g > 170 && b < 110 {
        "Emerald"
    } else if r < 110 && g > 150 && b > 150 {
        "Teal"
    } else if r < 100 && g < 140 && b > 170 {
        "Sapphire"
    } else if r > 110 && g < 100 && b > 170 {
        "Violet"
    } else if r > 180 && g < 120 && b > 160 {
        "Magenta"
    } else if r > 200 && g > 150 && b > 150 {
        "Rose"
    } else if r > 130 && r < 200 && g > 80 && g < 140 && b < 80 {
        "Bronze"
    } else if r > 150 && g > 150 && b > 150 {
        "Silver"
    } else if r < 90 && g > 120 && b > 120 {
        "Glacier"
    } else if g >= r && g >= b {
        "Moss"
    } else if b >= r && b >= g {
        "Abyss"
    } else {
        "Ember"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_consumes_four_draws_and_stays_in_range() {
        let mut a = Lcg::new(5);
        let mut b = Lcg::new(5);
        let c = Palette::Iris.sample(&mut a);
        for _ in 0..4 {
            b.next();
        }
        assert_eq!(a, b);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn sample_is_deterministic() {
        for palette in [
            Palette::Socket,
            Palette::Sclera,
            Palette::Iris,
            Palette::Pupil,
            Palette::Effect,
            Palette::Laser,
            Palette::Aura,
        ] {
            let x = palette.sample(&mut Lcg::new(123));
            let y = palette.sample(&mut Lcg::new(123));
            assert_eq!(x, y);
        }
    }

    #[test]
    fn color_name_first_match_wins() {
        assert_eq!(color_name(Rgba8::opaque(255, 255, 255)), "Pearl");
        assert_eq!(color_name(Rgba8::opaque(10, 10, 10)), "Obsidian");
        assert_eq!(color_name(Rgba8::opaque(230, 40, 40)), "Crimson");
        assert_eq!(color_name(Rgba8::opaque(30, 200, 60)), "Emerald");
        assert_eq!(color_name(Rgba8::opaque(50, 60, 220)), "Sapphire");
        // Pure white is also > 150 on every channel; the Pearl arm must
        // shadow the Silver arm.
        assert_ne!(color_name(Rgba8::opaque(255, 255, 255)), "Silver");
    }

    #[test]
    fn color_name_is_total() {
        // Every corner of the cube lands in some bucket.
        for r in [0u8, 85, 170, 255] {
            for g in [0u8, 85, 170, 255] {
                for b in [0u8, 85, 170, 255] {
                    assert!(!color_name(Rgba8::opaque(r, g, b)).is_empty());
                }
            }
        }
    }
}
