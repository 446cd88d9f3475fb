// galaxy_core/src/error.rs

use thiserror::Error;

/// Errors raised while building inputs for the generator.
///
/// The generator itself never fails; these only come from parsing
/// host-supplied values such as hex color strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalaxyError {
    #[error("invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: &'static str },
}
