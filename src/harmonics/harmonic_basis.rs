use nalgebra::UnitQuaternion;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::so3_quadrature::quadrature_so3;
use super::wigner_d::harmonic_so3;

/// A generalized-spherical-harmonic basis over SO(3).
///
/// The orientation distribution code consumes the basis only through this
/// trait, so tests can substitute a mock and alternative normalizations
/// stay pluggable.
pub trait HarmonicBasis {
    /// Basis function value for the triple (n, i, j) at an orientation.
    fn value(&self, n: i32, i: i32, j: i32, pt: &UnitQuaternion<f64>) -> Complex64;

    /// Quadrature points and weights for integrating expansions of the
    /// given order over SO(3); weights sum to the group volume 8π².
    fn quadrature(&self, order: usize) -> (Vec<UnitQuaternion<f64>>, Vec<f64>);
}

/// The canonical orthonormalized Wigner-D basis.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WignerBasis;

impl HarmonicBasis for WignerBasis {
    fn value(&self, n: i32, i: i32, j: i32, pt: &UnitQuaternion<f64>) -> Complex64 {
        harmonic_so3(n, i, j, pt)
    }

    fn quadrature(&self, order: usize) -> (Vec<UnitQuaternion<f64>>, Vec<f64>) {
        quadrature_so3(order)
    }
}
