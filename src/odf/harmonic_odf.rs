use log::{debug, warn};
use nalgebra::{DMatrix, DVector, UnitQuaternion};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::orientation_distribution::Odf;
use crate::config::NORMALIZATION_MASS_TOLERANCE;
use crate::harmonics::harmonic_basis::{HarmonicBasis, WignerBasis};
use crate::harmonics::harmonic_indices::{basis_size, harmonic_indices, HarmonicIndex};
use crate::solvers::least_squares::solve_least_squares;
use crate::solvers::nonnegative_least_squares::solve_nonnegative_least_squares;

/// Strategy used to fit expansion coefficients to discrete orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMethod {
    /// Dirac-delta/Fourier projection of the empirical measure; always
    /// succeeds but is statistically noisy for small samples
    Series,
    /// Unconstrained least squares against the sample weights, followed
    /// by unit-mass renormalization
    LeastSquares,
    /// Least squares restricted to non-negative coefficients, followed
    /// by unit-mass renormalization
    NonNegativeLeastSquares,
}

impl FromStr for ProjectionMethod {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "series" => Ok(Self::Series),
            "ls" => Ok(Self::LeastSquares),
            "nnls" => Ok(Self::NonNegativeLeastSquares),
            other => Err(format!("Unknown projection method {}!", other)),
        }
    }
}

/// Orientation distribution function expanded in generalized spherical
/// harmonics up to a fixed truncation order.
///
/// The coefficient vector is indexed by the canonical (n, i, j)
/// enumeration and always has length `basis_size(order)`. Coefficients
/// start at zero and are overwritten wholesale by each projection call;
/// the order is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonicOdf<B = WignerBasis> {
    order: usize,
    indices: Vec<HarmonicIndex>,
    coefficients: DVector<Complex64>,
    basis: B,
}

impl HarmonicOdf<WignerBasis> {
    /// New zeroed expansion of the given order over the canonical Wigner
    /// basis.
    pub fn new(order: usize) -> Self {
        Self::with_basis(order, WignerBasis)
    }
}

impl<B: HarmonicBasis> HarmonicOdf<B> {
    /// New zeroed expansion over an explicit basis implementation.
    ///
    /// The basis is an injection seam: tests substitute mock bases, and
    /// alternative normalizations stay possible without touching the
    /// fitting code.
    pub fn with_basis(order: usize, basis: B) -> Self {
        let indices = harmonic_indices(order);
        debug_assert_eq!(indices.len(), basis_size(order));
        let coefficients = DVector::zeros(indices.len());
        Self {
            order,
            indices,
            coefficients,
            basis,
        }
    }

    /// Truncation order of the expansion.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of expansion coefficients, equal to `basis_size(order)`.
    pub fn coefficient_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Current coefficients in canonical enumeration order.
    pub fn coefficients(&self) -> &[Complex64] {
        self.coefficients.as_slice()
    }

    /// Fit the expansion to weighted discrete orientations.
    ///
    /// `wts = None` means uniform unit weights; otherwise the weights must
    /// be matched one-to-one with `pts`. On success the coefficient vector
    /// is overwritten in full (every call is a complete re-fit); on error
    /// the previous coefficients are left untouched.
    ///
    /// # Arguments
    /// * `pts` - sample orientations
    /// * `wts` - optional per-sample weights
    /// * `method` - projection strategy to dispatch to
    pub fn project(
        &mut self,
        pts: &[UnitQuaternion<f64>],
        wts: Option<&[f64]>,
        method: ProjectionMethod,
    ) -> Result<(), String> {
        if pts.is_empty() {
            return Err("Projection needs at least one orientation".to_string());
        }
        let uniform;
        let weights: &[f64] = match wts {
            Some(w) => {
                if w.len() != pts.len() {
                    return Err(format!(
                        "Length of pts ({}) and wts ({}) should be the same",
                        pts.len(),
                        w.len()
                    ));
                }
                w
            }
            None => {
                uniform = vec![1.0; pts.len()];
                &uniform
            }
        };

        let fitted = match method {
            ProjectionMethod::Series => self.fit_series(pts, weights),
            ProjectionMethod::LeastSquares => self.fit_least_squares(pts, weights)?,
            ProjectionMethod::NonNegativeLeastSquares => self.fit_nonnegative(pts, weights)?,
        };
        self.coefficients = fitted;
        Ok(())
    }

    /// Dirac-delta/Fourier projection.
    ///
    /// Accumulates w · conj(Z_k) per sample and divides by the total
    /// weight, making the estimate an average over the empirical measure.
    /// No solve is involved, and unlike the solver-based methods the
    /// result is not renormalized through the quadrature mass.
    fn fit_series(&self, pts: &[UnitQuaternion<f64>], wts: &[f64]) -> DVector<Complex64> {
        let mut coefficients = DVector::<Complex64>::zeros(self.indices.len());
        for (pt, wt) in pts.iter().zip(wts.iter()) {
            for (k, idx) in self.indices.iter().enumerate() {
                coefficients[k] += *wt * self.basis.value(idx.n, idx.i, idx.j, pt).conj();
            }
        }
        let total: f64 = wts.iter().sum();
        coefficients.map(|c| c / total)
    }

    /// Unconstrained least-squares projection.
    ///
    /// Treats the weights as noisy density observations: solves
    /// A·p ≈ w for the dense complex evaluation matrix A, tolerating rank
    /// deficiency by SVD truncation, then renormalizes to unit mass.
    fn fit_least_squares(
        &self,
        pts: &[UnitQuaternion<f64>],
        wts: &[f64],
    ) -> Result<DVector<Complex64>, String> {
        let a = self.evaluation_matrix(pts);
        let b = DVector::from_iterator(wts.len(), wts.iter().map(|w| Complex64::new(*w, 0.0)));
        let solution = solve_least_squares(&a, &b, None)?;
        Ok(self.normalized_to_unit_mass(solution))
    }

    /// Non-negative least-squares projection.
    ///
    /// Splits the complex system into a real one by stacking the real part
    /// of A over its imaginary part (with zeros as targets for the
    /// imaginary residual) and solves under the constraint that every
    /// coefficient is >= 0, then renormalizes to unit mass.
    fn fit_nonnegative(
        &self,
        pts: &[UnitQuaternion<f64>],
        wts: &[f64],
    ) -> Result<DVector<Complex64>, String> {
        let a = self.evaluation_matrix(pts);
        let (rows, cols) = a.shape();
        let mut stacked = DMatrix::<f64>::zeros(2 * rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                stacked[(r, c)] = a[(r, c)].re;
                stacked[(rows + r, c)] = a[(r, c)].im;
            }
        }
        let mut b = DVector::<f64>::zeros(2 * rows);
        for (r, w) in wts.iter().enumerate() {
            b[r] = *w;
        }

        let solution = solve_nonnegative_least_squares(&stacked, &b, None)?;
        let coefficients = DVector::from_iterator(
            solution.len(),
            solution.iter().map(|v| Complex64::new(*v, 0.0)),
        );
        Ok(self.normalized_to_unit_mass(coefficients))
    }

    /// Dense evaluation matrix: one row per sample orientation, one column
    /// per basis triple in canonical order. Shared by both solver-based
    /// projections.
    fn evaluation_matrix(&self, pts: &[UnitQuaternion<f64>]) -> DMatrix<Complex64> {
        DMatrix::from_fn(pts.len(), self.indices.len(), |row, col| {
            let idx = self.indices[col];
            self.basis.value(idx.n, idx.i, idx.j, &pts[row])
        })
    }

    /// Scale candidate coefficients so the fitted density integrates to
    /// one over SO(3), using the basis quadrature for this order.
    ///
    /// A nearly singular mass is logged but, matching the solver-tolerance
    /// policy, not raised as an error.
    fn normalized_to_unit_mass(&self, coefficients: DVector<Complex64>) -> DVector<Complex64> {
        let (qpts, qwts) = self.basis.quadrature(self.order);
        let mass: f64 = qpts
            .iter()
            .zip(qwts.iter())
            .map(|(pt, w)| w * self.value_with(&coefficients, pt))
            .sum();
        debug!(
            "renormalizing projection by quadrature mass {:.6e} over {} points",
            mass,
            qpts.len()
        );
        if mass.abs() < NORMALIZATION_MASS_TOLERANCE {
            warn!(
                "quadrature mass {:.3e} is nearly singular, renormalized coefficients will be extreme",
                mass
            );
        }
        coefficients.map(|c| c / mass)
    }

    /// Density from an explicit coefficient vector (used both for the
    /// public value and for pre-assignment renormalization).
    fn value_with(&self, coefficients: &DVector<Complex64>, pt: &UnitQuaternion<f64>) -> f64 {
        self.indices
            .iter()
            .zip(coefficients.iter())
            .map(|(idx, c)| self.basis.value(idx.n, idx.i, idx.j, pt) * *c)
            .sum::<Complex64>()
            .re
    }
}

impl<B: HarmonicBasis> Odf for HarmonicOdf<B> {
    fn value(&self, pt: &UnitQuaternion<f64>) -> f64 {
        self.value_with(&self.coefficients, pt)
    }
}
