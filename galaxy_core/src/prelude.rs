// galaxy_core/src/prelude.rs

// --- Core Abstractions ---
pub use crate::random::{Alea, ChaChaSource, RandomSource, RngAlgorithm};

// --- Core Data Structures ---
pub use crate::color::Rgb;
pub use crate::parameters::{GalaxyParameters, ParameterBounds, SliderRange, MAX_PARTICLES};

// --- Generation ---
pub use crate::generator::{generate, generate_with, BufferSummary, ParticleBuffer};

pub use crate::error::GalaxyError;
