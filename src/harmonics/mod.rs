// Harmonics module: generalized spherical harmonics on the rotation group
// Provides the canonical index enumeration, Wigner-D evaluation, SO(3)
// quadrature, and the basis trait the ODF core consumes

// ======================== MODULE DECLARATIONS ========================
pub mod harmonic_indices;
pub mod wigner_d;
pub mod so3_quadrature;
pub mod harmonic_basis;


// ======================== INDEX ENUMERATION ========================
pub use harmonic_indices::{
    HarmonicIndex,    // struct - harmonic index triple (n, i, j)
    basis_size,       // fn(order: usize) -> usize - total harmonics through a degree, closed form
    harmonic_indices, // fn(order: usize) -> Vec<HarmonicIndex> - canonical coefficient enumeration
    linear_index,     // fn(idx: &HarmonicIndex) -> usize - enumeration position of a triple
};

// ======================== BASIS EVALUATION ========================
pub use wigner_d::{
    wigner_d,     // fn(n: i32, i: i32, j: i32, beta: f64) -> f64 - Wigner small-d element
    harmonic_so3, // fn(n: i32, i: i32, j: i32, pt: &UnitQuaternion<f64>) -> Complex64 - orthonormalized harmonic
};

// ======================== QUADRATURE ========================
pub use so3_quadrature::{
    gauss_legendre, // fn(n: usize) -> (Vec<f64>, Vec<f64>) - nodes and weights on [-1, 1]
    quadrature_so3, // fn(order: usize) -> (Vec<UnitQuaternion<f64>>, Vec<f64>) - product rule over SO(3)
};

// ======================== BASIS ABSTRACTION ========================
pub use harmonic_basis::{
    HarmonicBasis, // trait - basis evaluation + quadrature consumed by the ODF core
    WignerBasis,   // struct - canonical Wigner-D implementation
};
