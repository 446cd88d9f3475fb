// galaxy_core/src/parameters.rs

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::random::RngAlgorithm;

// =========================================================================
// == Parameter Set ==
// =========================================================================

/// Upper limit of [`GalaxyParameters::particle_count`] (`count` = 8). Larger
/// requests could not be allocated anyway.
pub const MAX_PARTICLES: usize = 100_000_000;

/// # GalaxyParameters
/// The full input of one generation run. The host owns the mutable copy and
/// hands an immutable reference to [`crate::generator::generate`].
///
/// Missing fields fall back to [`GalaxyParameters::default`] when
/// deserialized, so a preset file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::prelude::Resource))]
#[serde(default, deny_unknown_fields)]
pub struct GalaxyParameters {
    /// Seed of the random stream. Determines the whole point cloud.
    pub seed: u64,
    /// Base-10 logarithm of the particle count.
    pub count: f64,
    /// Maximum galaxy radius.
    pub radius: f64,
    /// Exponent biasing the radial distribution towards the center.
    pub radius_power: f64,
    /// Number of spiral arms.
    pub branches: u32,
    /// Spiral twist factor, in full turns at the outer edge.
    pub spin: f64,
    /// Maximum lateral scatter away from an arm.
    pub spread: f64,
    /// Exponent biasing scatter towards zero.
    pub spread_power: f64,
    /// Color at the galaxy center.
    pub inside_color: Rgb,
    /// Color at the galaxy edge.
    pub outside_color: Rgb,
    /// Weight of the radial position in the color blend; the rest is noise.
    pub color_exp: f64,
    /// Algorithm behind the random stream.
    pub rng: RngAlgorithm,
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            seed: 10_000,
            count: 4.6,
            radius: 5.0,
            radius_power: 2.8,
            branches: 8,
            spin: 0.65,
            spread: 3.0,
            spread_power: 1.21,
            inside_color: Rgb::new(240.0 / 255.0, 175.0 / 255.0, 85.0 / 255.0), // #f0af55
            outside_color: Rgb::new(2.0 / 255.0, 69.0 / 255.0, 187.0 / 255.0), // #0245bb
            color_exp: 0.7,
            rng: RngAlgorithm::Alea,
        }
    }
}

impl GalaxyParameters {
    /// `round(10^count)`, capped at [`MAX_PARTICLES`]. A NaN or negative
    /// result yields zero particles.
    pub fn particle_count(&self) -> usize {
        let count = 10f64.powf(self.count).round();
        if count.is_nan() || count <= 0.0 {
            0
        } else if count >= MAX_PARTICLES as f64 {
            MAX_PARTICLES
        } else {
            count as usize
        }
    }

    /// The arm a particle index belongs to. Zero branches behave as one arm.
    pub fn branch_of(&self, index: usize) -> u32 {
        (index % self.branches.max(1) as usize) as u32
    }
}

// =========================================================================
// == Advisory UI Bounds ==
// =========================================================================

/// An inclusive slider range with its step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The ranges the debug panel offers for each parameter. These are UI
/// affordances; the generator never enforces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterBounds {
    pub seed: SliderRange,
    pub count: SliderRange,
    pub radius: SliderRange,
    pub radius_power: SliderRange,
    pub branches: SliderRange,
    pub spin: SliderRange,
    pub spread: SliderRange,
    pub spread_power: SliderRange,
    pub color_exp: SliderRange,
    /// Sprite size of the rendered points; belongs to the material, not the generator.
    pub point_size: SliderRange,
}

impl ParameterBounds {
    pub const DEFAULT: ParameterBounds = ParameterBounds {
        seed: SliderRange::new(10_000.0, 99_999.0, 1.0),
        count: SliderRange::new(3.0, 6.0, 0.1),
        radius: SliderRange::new(0.1, 10.0, 0.01),
        radius_power: SliderRange::new(1.0, 10.0, 0.01),
        branches: SliderRange::new(2.0, 10.0, 1.0),
        spin: SliderRange::new(0.0, 1.0, 0.001),
        spread: SliderRange::new(0.0, 10.0, 0.001),
        spread_power: SliderRange::new(1.0, 2.0, 0.01),
        color_exp: SliderRange::new(0.0, 1.0, 0.01),
        point_size: SliderRange::new(0.001, 0.05, 0.001),
    };
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
