// galaxy_core/src/generator.rs

use nalgebra::Point3;
use std::f64::consts::TAU;

use crate::color::Rgb;
use crate::parameters::GalaxyParameters;
use crate::random::RandomSource;

/// Below this particle radius the spread-spin angle is taken as zero instead
/// of dividing by (almost) nothing.
const MIN_PARTICLE_RADIUS: f64 = 1e-12;

// =========================================================================
// == Particle Buffer ==
// =========================================================================

/// Flat, GPU-ready particle data: `positions` and `colors` each hold three
/// `f32` per particle, in the same index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleBuffer {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleBuffer {
    fn with_capacity(particles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(particles * 3),
            colors: Vec::with_capacity(particles * 3),
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Point3<f32> {
        let p = &self.positions[index * 3..index * 3 + 3];
        Point3::new(p[0], p[1], p[2])
    }

    pub fn color(&self, index: usize) -> Rgb {
        let c = &self.colors[index * 3..index * 3 + 3];
        Rgb::new(c[0], c[1], c[2])
    }

    pub fn positions_as_triplets(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.positions.chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }

    pub fn colors_as_triplets(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.colors.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// A few aggregate numbers, handy for logging.
    pub fn summary(&self) -> BufferSummary {
        let mut non_finite = 0;
        let mut max_radius = 0.0_f32;
        for index in 0..self.len() {
            let p = self.position(index);
            if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                non_finite += 1;
                continue;
            }
            max_radius = max_radius.max(p.coords.xz().norm());
        }
        BufferSummary {
            particles: self.len(),
            non_finite,
            max_radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferSummary {
    pub particles: usize,
    /// Particles with a NaN or infinite coordinate.
    pub non_finite: usize,
    /// Largest distance from the spin axis among the finite particles.
    pub max_radius: f32,
}

// =========================================================================
// == Generation ==
// =========================================================================

/// Generates a fresh point cloud, seeding the algorithm chosen in `params`.
pub fn generate(params: &GalaxyParameters) -> ParticleBuffer {
    let mut random = params.rng.source(params.seed);
    generate_with(params, &mut random)
}

/// Generates a point cloud drawing from a caller-supplied random stream.
///
/// Every particle consumes exactly four values, in this order: radius,
/// spread, spread angle, color noise. Inputs are not validated; out-of-range
/// parameters flow through the formulas (a spread wider than the radius, for
/// instance, pushes `acos` out of its domain and yields NaN coordinates).
pub fn generate_with<R>(params: &GalaxyParameters, random: &mut R) -> ParticleBuffer
where
    R: RandomSource + ?Sized,
{
    let count = params.particle_count();
    let mut buffer = ParticleBuffer::with_capacity(count);

    let branches = params.branches.max(1);
    let inside = params.inside_color;
    let outside = params.outside_color;

    for i in 0..count {
        // --- 1. Arm assignment ---
        let branch = params.branch_of(i);
        let branch_angle = branch as f64 / branches as f64 * TAU;

        // --- 2. Radial placement and spiral twist ---
        let radius = random.next_unit().powf(params.radius_power) * params.radius;
        // Normalized distance from the center. A zero-sized galaxy keeps every
        // particle at the origin rather than dividing zero by zero.
        let t = if params.radius == 0.0 {
            0.0
        } else {
            radius / params.radius
        };
        let spin_angle = params.spin * TAU * t;

        // --- 3. Lateral scatter ---
        let spread = random.next_unit().powf(params.spread_power) * params.spread;
        let spread_radius = spread * t;
        let spread_angle = random.next_unit() * TAU;
        let spread_spin_angle = if radius.abs() < MIN_PARTICLE_RADIUS {
            0.0
        } else {
            ((spread_angle.cos() * spread_radius) / radius).acos()
        };

        let angle = branch_angle + spin_angle + spread_spin_angle;
        buffer.positions.extend_from_slice(&[
            (radius * angle.cos()) as f32,
            (spread_radius * spread_angle.sin()) as f32,
            (radius * angle.sin()) as f32,
        ]);

        // --- 4. Color ---
        let lerp = t * params.color_exp + random.next_unit() * (1.0 - params.color_exp);
        let color = inside.lerp(&outside, lerp as f32);
        buffer.colors.extend_from_slice(&color.to_array());
    }

    buffer
}
