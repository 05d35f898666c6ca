//! Confetti particle generation.
//!
//! Particles are plain descriptors; rendering them (and animating the fall)
//! is up to the view layer.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Colors used when the content table does not supply a palette.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#ff6b9d", "#c44569", "#ffc048", "#f8b500", "#48dbfb", "#0abde3",
];

/// Particles per burst.
pub const DEFAULT_PARTICLES: usize = 50;

const MIN_FALL_SECS: f32 = 2.0;
const MAX_FALL_SECS: f32 = 4.0;
const MAX_DELAY_SECS: f32 = 0.5;

/// One piece of confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal start position, percent of the viewport width.
    pub left_pct: f32,
    pub color: String,
    /// Time to fall the full viewport height.
    pub fall_secs: f32,
    /// Delay before the fall starts.
    pub delay_secs: f32,
    /// Rotation reached at the end of the fall.
    pub spin_deg: f32,
}

impl Particle {
    /// Inline CSS for this particle.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; background-color: {}; animation-duration: {:.2}s; animation-delay: {:.2}s; --spin: {:.0}deg;",
            self.left_pct, self.color, self.fall_secs, self.delay_secs, self.spin_deg
        )
    }
}

/// Upper bound on how long any particle of a burst stays on screen.
pub fn burst_lifetime() -> Duration {
    Duration::from_secs_f32(MAX_FALL_SECS + MAX_DELAY_SECS)
}

/// Generates `count` particles with colors drawn from `palette`.
///
/// An empty palette falls back to [`DEFAULT_PALETTE`].
pub fn generate<R, S>(count: usize, palette: &[S], rng: &mut R) -> Vec<Particle>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let colors: Vec<&str> = if palette.is_empty() {
        DEFAULT_PALETTE.to_vec()
    } else {
        palette.iter().map(AsRef::as_ref).collect()
    };

    (0..count)
        .map(|_| Particle {
            left_pct: rng.random_range(0.0..100.0),
            color: colors[rng.random_range(0..colors.len())].to_string(),
            fall_secs: rng.random_range(MIN_FALL_SECS..MAX_FALL_SECS),
            delay_secs: rng.random_range(0.0..MAX_DELAY_SECS),
            spin_deg: rng.random_range(0.0..360.0),
        })
        .collect()
}

/// Random source for bursts: seeded for reproducible runs, otherwise from
/// the operating system.
pub fn source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_within_ranges() {
        let mut rng = source(Some(7));
        let particles = generate(500, &DEFAULT_PALETTE, &mut rng);
        assert_eq!(particles.len(), 500);

        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((MIN_FALL_SECS..MAX_FALL_SECS).contains(&p.fall_secs));
            assert!((0.0..MAX_DELAY_SECS).contains(&p.delay_secs));
            assert!((0.0..360.0).contains(&p.spin_deg));
            assert!(DEFAULT_PALETTE.contains(&p.color.as_str()));
            assert!(p.fall_secs + p.delay_secs <= burst_lifetime().as_secs_f32());
        }
    }

    #[test]
    fn test_same_seed_same_burst() {
        let a = generate(DEFAULT_PARTICLES, &DEFAULT_PALETTE, &mut source(Some(42)));
        let b = generate(DEFAULT_PARTICLES, &DEFAULT_PALETTE, &mut source(Some(42)));
        let c = generate(DEFAULT_PARTICLES, &DEFAULT_PALETTE, &mut source(Some(43)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_custom_and_empty_palette() {
        let mut rng = source(Some(1));
        let custom = generate(20, &["#000000".to_string()], &mut rng);
        assert!(custom.iter().all(|p| p.color == "#000000"));

        let empty: [&str; 0] = [];
        let fallback = generate(20, &empty, &mut rng);
        assert!(fallback
            .iter()
            .all(|p| DEFAULT_PALETTE.contains(&p.color.as_str())));
    }

    #[test]
    fn test_zero_count() {
        assert!(generate(0, &DEFAULT_PALETTE, &mut source(Some(3))).is_empty());
    }

    #[test]
    fn test_style_contains_fields() {
        let particle = Particle {
            left_pct: 12.5,
            color: "#48dbfb".into(),
            fall_secs: 3.0,
            delay_secs: 0.25,
            spin_deg: 90.0,
        };
        let style = particle.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("background-color: #48dbfb"));
        assert!(style.contains("animation-duration: 3.00s"));
        assert!(style.contains("--spin: 90deg"));
    }
}
