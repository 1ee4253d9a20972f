#[cfg(test)]
mod _tests_harmonic_odf {
    use super::super::harmonic_odf::{HarmonicOdf, ProjectionMethod};
    use super::super::orientation_distribution::Odf;
    use crate::harmonics::harmonic_basis::HarmonicBasis;
    use crate::harmonics::harmonic_indices::basis_size;
    use crate::harmonics::so3_quadrature::quadrature_so3;
    use crate::harmonics::wigner_d::harmonic_so3;
    use crate::rotations::euler_angles::from_euler_zyz;
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;
    use num_complex::Complex64;
    use std::f64::consts::PI;

    fn sample_orientations() -> Vec<UnitQuaternion<f64>> {
        vec![
            from_euler_zyz(0.1, 0.4, 0.9),
            from_euler_zyz(1.2, 1.0, 0.3),
            from_euler_zyz(2.5, 2.1, 4.0),
            from_euler_zyz(4.7, 0.8, 2.2),
            from_euler_zyz(3.3, 1.7, 5.1),
            from_euler_zyz(0.6, 2.8, 1.5),
            from_euler_zyz(5.5, 0.2, 3.7),
            from_euler_zyz(2.0, 1.3, 0.0),
            from_euler_zyz(1.8, 2.5, 2.9),
            from_euler_zyz(0.0, 1.9, 5.9),
            from_euler_zyz(3.9, 0.6, 1.1),
            from_euler_zyz(5.1, 2.3, 4.6),
        ]
    }

    /// An order-1 expansion with known coefficients: the series projection
    /// of two point masses, which has exactly unit integrated mass.
    fn reference_odf() -> HarmonicOdf {
        let mut odf = HarmonicOdf::new(1);
        let pts = [from_euler_zyz(0.7, 1.1, 0.3), from_euler_zyz(2.9, 0.5, 4.2)];
        odf.project(&pts, None, ProjectionMethod::Series).unwrap();
        odf
    }

    #[test]
    fn test_new_odf_has_zero_coefficients_of_basis_length() {
        for order in [0usize, 1, 2, 3] {
            let odf = HarmonicOdf::new(order);
            assert_eq!(odf.order(), order);
            assert_eq!(odf.coefficient_count(), basis_size(order));
            assert!(odf
                .coefficients()
                .iter()
                .all(|c| c.re == 0.0 && c.im == 0.0));
            assert_relative_eq!(odf.value(&UnitQuaternion::identity()), 0.0);
        }
    }

    #[test]
    fn test_projection_preserves_coefficient_length() {
        let pts = sample_orientations();
        for method in [
            ProjectionMethod::Series,
            ProjectionMethod::LeastSquares,
            ProjectionMethod::NonNegativeLeastSquares,
        ] {
            let mut odf = HarmonicOdf::new(1);
            odf.project(&pts, None, method).unwrap();
            assert_eq!(odf.coefficient_count(), basis_size(1));
        }
    }

    #[test]
    fn test_series_on_repeated_point_reduces_to_conjugate_harmonics() {
        // With identical samples the weight normalization cancels exactly
        let q = from_euler_zyz(0.9, 1.4, 2.6);
        let pts = vec![q; 7];
        let wts = vec![2.5; 7];

        let mut odf = HarmonicOdf::new(2);
        odf.project(&pts, Some(&wts), ProjectionMethod::Series)
            .unwrap();

        let mut position = 0usize;
        for n in 0..=2i32 {
            for i in -n..=n {
                for j in -n..=n {
                    let expected = harmonic_so3(n, i, j, &q).conj();
                    let got = odf.coefficients()[position];
                    assert_relative_eq!(got.re, expected.re, epsilon = 1e-12);
                    assert_relative_eq!(got.im, expected.im, epsilon = 1e-12);
                    position += 1;
                }
            }
        }
    }

    #[test]
    fn test_mismatched_weights_fail_without_touching_coefficients() {
        let mut odf = reference_odf();
        let before: Vec<Complex64> = odf.coefficients().to_vec();

        let pts = sample_orientations();
        let short_wts = vec![1.0; pts.len() - 1];
        let result = odf.project(&pts, Some(&short_wts), ProjectionMethod::Series);
        assert!(result.is_err());
        assert_eq!(odf.coefficients(), before.as_slice());
    }

    #[test]
    fn test_empty_sample_set_is_rejected() {
        let mut odf = HarmonicOdf::new(1);
        assert!(odf
            .project(&[], None, ProjectionMethod::Series)
            .is_err());
    }

    #[test]
    fn test_method_names_parse_like_the_string_interface() {
        assert_eq!(
            "series".parse::<ProjectionMethod>().unwrap(),
            ProjectionMethod::Series
        );
        assert_eq!(
            "ls".parse::<ProjectionMethod>().unwrap(),
            ProjectionMethod::LeastSquares
        );
        assert_eq!(
            "nnls".parse::<ProjectionMethod>().unwrap(),
            ProjectionMethod::NonNegativeLeastSquares
        );
        assert!("fourier".parse::<ProjectionMethod>().is_err());
        assert!("".parse::<ProjectionMethod>().is_err());
    }

    #[test]
    fn test_least_squares_fit_integrates_to_unity() {
        let target = reference_odf();
        let (qpts, qwts) = quadrature_so3(1);
        let wts: Vec<f64> = qpts.iter().map(|pt| target.value(pt)).collect();

        let mut fitted = HarmonicOdf::new(1);
        fitted
            .project(&qpts, Some(&wts), ProjectionMethod::LeastSquares)
            .unwrap();

        let mass: f64 = qpts
            .iter()
            .zip(qwts.iter())
            .map(|(pt, w)| w * fitted.value(pt))
            .sum();
        assert_relative_eq!(mass, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_least_squares_recovers_consistent_density() {
        // Density observations generated by a known expansion are fitted
        // back exactly (up to the unit-mass renormalization, which is a
        // no-op here because the target already has unit mass)
        let target = reference_odf();
        let (qpts, _) = quadrature_so3(1);
        let wts: Vec<f64> = qpts.iter().map(|pt| target.value(pt)).collect();

        let mut fitted = HarmonicOdf::new(1);
        fitted
            .project(&qpts, Some(&wts), ProjectionMethod::LeastSquares)
            .unwrap();

        for pt in &[
            from_euler_zyz(0.3, 0.9, 1.8),
            from_euler_zyz(4.4, 2.6, 0.2),
            from_euler_zyz(1.0, 1.0, 1.0),
        ] {
            assert_relative_eq!(fitted.value(pt), target.value(pt), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_least_squares_tolerates_underdetermined_samples() {
        // Fewer samples than coefficients: rank truncation handles it
        let pts = sample_orientations()[..4].to_vec();
        let mut odf = HarmonicOdf::new(2);
        odf.project(&pts, None, ProjectionMethod::LeastSquares)
            .unwrap();
        assert_eq!(odf.coefficient_count(), basis_size(2));
    }

    #[test]
    fn test_nonnegative_fit_integrates_to_unity() {
        let (qpts, qwts) = quadrature_so3(1);
        let uniform_density = 1.0 / (8.0 * PI * PI);
        let wts = vec![uniform_density; qpts.len()];

        let mut fitted = HarmonicOdf::new(1);
        fitted
            .project(&qpts, Some(&wts), ProjectionMethod::NonNegativeLeastSquares)
            .unwrap();

        let mass: f64 = qpts
            .iter()
            .zip(qwts.iter())
            .map(|(pt, w)| w * fitted.value(pt))
            .sum();
        assert_relative_eq!(mass, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nonnegative_fit_recovers_uniform_density() {
        let (qpts, _) = quadrature_so3(1);
        let uniform_density = 1.0 / (8.0 * PI * PI);
        let wts = vec![uniform_density; qpts.len()];

        let mut fitted = HarmonicOdf::new(1);
        fitted
            .project(&qpts, Some(&wts), ProjectionMethod::NonNegativeLeastSquares)
            .unwrap();

        for pt in &[
            UnitQuaternion::identity(),
            from_euler_zyz(1.1, 0.8, 2.3),
            from_euler_zyz(3.0, 2.2, 5.0),
        ] {
            assert_relative_eq!(fitted.value(pt), uniform_density, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_nonnegative_fit_yields_nonnegative_coefficients() {
        // A clustered sample set drives the unconstrained solution
        // negative; the constrained fit must stay at or above zero
        let pts = sample_orientations();
        let wts: Vec<f64> = (0..pts.len()).map(|k| 0.25 + (k % 3) as f64).collect();

        let mut odf = HarmonicOdf::new(1);
        odf.project(&pts, Some(&wts), ProjectionMethod::NonNegativeLeastSquares)
            .unwrap();

        for (k, c) in odf.coefficients().iter().enumerate() {
            assert!(c.re >= -1e-9, "coefficient {} is negative: {}", k, c.re);
            assert_relative_eq!(c.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_isotropic_pole_density_is_constant() {
        // An order-0 expansion fitted to any single orientation is the
        // uniform density with unit mass
        let mut odf = HarmonicOdf::new(0);
        odf.project(
            &[from_euler_zyz(1.0, 0.7, 0.2)],
            None,
            ProjectionMethod::Series,
        )
        .unwrap();

        let uniform_density = 1.0 / (8.0 * PI * PI);
        assert_relative_eq!(
            odf.value(&from_euler_zyz(2.2, 1.5, 0.4)),
            uniform_density,
            epsilon = 1e-12
        );

        let directions = [
            (nalgebra::Vector3::z(), nalgebra::Vector3::x()),
            (nalgebra::Vector3::x(), nalgebra::Vector3::new(1.0, 1.0, 1.0)),
            (nalgebra::Vector3::new(0.3, -0.4, 0.8), nalgebra::Vector3::y()),
        ];
        let expected = uniform_density / (2.0 * PI);
        for (pt, pole) in &directions {
            let density = odf.pole_density(pt, pole).unwrap();
            assert_relative_eq!(density, expected, epsilon = 1e-12);
            let coarse = odf.pole_density_with_steps(pt, pole, 3).unwrap();
            assert_relative_eq!(coarse, expected, epsilon = 1e-12);
        }
        assert_relative_eq!(odf.pdf_to_mrd(), 8.0 * PI * PI);
    }

    #[test]
    fn test_series_round_trip_reproduces_low_order_expansion() {
        // Samples carrying quadrature weight times the target density make
        // the series estimator the exact Fourier projection of the target
        let target = reference_odf();
        let (qpts, qwts) = quadrature_so3(2);
        let wts: Vec<f64> = qpts
            .iter()
            .zip(qwts.iter())
            .map(|(pt, w)| w * target.value(pt))
            .collect();

        let mut refit = HarmonicOdf::new(1);
        refit
            .project(&qpts, Some(&wts), ProjectionMethod::Series)
            .unwrap();

        for (got, expected) in refit.coefficients().iter().zip(target.coefficients()) {
            assert_relative_eq!(got.re, expected.re, epsilon = 1e-9);
            assert_relative_eq!(got.im, expected.im, epsilon = 1e-9);
        }
        for pt in qpts.iter().step_by(7) {
            assert_relative_eq!(refit.value(pt), target.value(pt), epsilon = 1e-9);
        }
    }

    // A trivial one-function basis exercising the dependency seam
    struct MockBasis;

    impl HarmonicBasis for MockBasis {
        fn value(
            &self,
            _n: i32,
            _i: i32,
            _j: i32,
            _pt: &UnitQuaternion<f64>,
        ) -> Complex64 {
            Complex64::new(1.0, 0.0)
        }

        fn quadrature(&self, _order: usize) -> (Vec<UnitQuaternion<f64>>, Vec<f64>) {
            (vec![UnitQuaternion::identity()], vec![8.0 * PI * PI])
        }
    }

    #[test]
    fn test_mock_basis_injection() {
        let mut odf = HarmonicOdf::with_basis(0, MockBasis);
        odf.project(
            &[UnitQuaternion::identity(), from_euler_zyz(1.0, 1.0, 1.0)],
            None,
            ProjectionMethod::LeastSquares,
        )
        .unwrap();

        // The constant basis function carries all the mass: the fitted
        // coefficient must be the reciprocal of the group volume
        assert_relative_eq!(
            odf.coefficients()[0].re,
            1.0 / (8.0 * PI * PI),
            epsilon = 1e-12
        );
        assert_relative_eq!(odf.value(&UnitQuaternion::identity()), 1.0 / (8.0 * PI * PI));
    }
}
