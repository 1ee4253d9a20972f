
//! Crystallographic texture library
//!
//! This library provides orientation distribution functions over SO(3),
//! reconstructed from discrete weighted orientation samples through a
//! truncated generalized-spherical-harmonic expansion, together with the
//! rotation, basis, and solver primitives the reconstruction needs.

pub mod config;
pub mod rotations;
pub mod harmonics;
pub mod solvers;
pub mod odf;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
