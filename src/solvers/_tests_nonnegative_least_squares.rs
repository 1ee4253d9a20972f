#[cfg(test)]
mod _tests_nonnegative_least_squares {
    use super::super::nonnegative_least_squares::solve_nonnegative_least_squares;
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};

    const TOL: f64 = 1e-10;

    #[test]
    fn test_recovers_nonnegative_solution_exactly() {
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_row_slice(&[2.0, 3.0, 5.0]);
        let x = solve_nonnegative_least_squares(&a, &b, None).unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = TOL);
        assert_relative_eq!(x[1], 3.0, epsilon = TOL);
    }

    #[test]
    fn test_clamps_negative_unconstrained_solution() {
        // Unconstrained solution is (1, -1); the feasible optimum zeroes
        // the second component
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let b = DVector::from_row_slice(&[1.0, -1.0]);
        let x = solve_nonnegative_least_squares(&a, &b, None).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = TOL);
        assert_relative_eq!(x[1], 0.0, epsilon = TOL);
    }

    #[test]
    fn test_all_negative_target_yields_zero_vector() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let b = DVector::from_row_slice(&[-1.0, -2.0]);
        let x = solve_nonnegative_least_squares(&a, &b, None).unwrap();
        assert_relative_eq!(x[0], 0.0, epsilon = TOL);
        assert_relative_eq!(x[1], 0.0, epsilon = TOL);
    }

    #[test]
    fn test_solution_is_nonnegative_for_mixed_system() {
        let a = DMatrix::from_row_slice(
            4,
            3,
            &[
                1.0, -0.5, 0.3, //
                0.2, 1.0, -0.7, //
                -0.4, 0.6, 1.0, //
                0.8, 0.1, 0.2,
            ],
        );
        let b = DVector::from_row_slice(&[1.0, -0.2, 0.5, 0.9]);
        let x = solve_nonnegative_least_squares(&a, &b, None).unwrap();
        for k in 0..3 {
            assert!(x[k] >= 0.0, "component {} is negative: {}", k, x[k]);
        }
    }

    #[test]
    fn test_residual_not_worse_than_zero_iterate() {
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 1.0, 1.0, 1.0]);
        let b = DVector::from_row_slice(&[3.0, 3.0, 2.0]);
        let x = solve_nonnegative_least_squares(&a, &b, None).unwrap();
        let fitted = (&a * &x - &b).norm();
        assert!(fitted <= b.norm() + 1e-12);
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let b = DVector::from_row_slice(&[1.0]);
        assert!(solve_nonnegative_least_squares(&a, &b, None).is_err());
    }
}
