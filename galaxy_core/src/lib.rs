// galaxy_core/src/lib.rs

// This file defines the public modules of the library.
pub mod color;
pub mod error;
pub mod generator;
pub mod parameters;
pub mod prelude;
pub mod random;
