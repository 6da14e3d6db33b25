// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Property-Based Tests (proptest) for toeplitz-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for toeplitz-math using proptest.
//!
//! Covers: Poisson solver, general Toeplitz solver, cross-consistency,
//! purity, linearity (power-of-two exact, arbitrary scalar), pivot generation.

use ndarray::ArrayView1;
use proptest::prelude::*;
use toeplitz_math::operator::SymmetricTridiagonalToeplitz;
use toeplitz_math::poisson::{poisson_pivots, poisson_pivots_par, PoissonSolver};
use toeplitz_math::{solve_fixed_poisson, solve_toeplitz, ToeplitzFactorization};

fn max_abs(v: &[f32]) -> f64 {
    v.iter().fold(0.0f64, |m, x| m.max(x.abs() as f64))
}

fn rhs(max_len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, 1..max_len)
}

// ── Poisson Solver Properties ────────────────────────────────────────

proptest! {
    /// A x = q within single-precision backward error.
    #[test]
    fn poisson_ax_eq_q(q in rhs(200)) {
        let x = solve_fixed_poisson(&q).unwrap();
        let op = SymmetricTridiagonalToeplitz::poisson(q.len()).unwrap();
        let res = op.residual_max(ArrayView1::from(x.as_slice()), ArrayView1::from(q.as_slice())).unwrap();
        let scale = 4.0 * max_abs(&x) + max_abs(&q);
        prop_assert!(res <= 1e-5 * scale,
            "n = {}, residual = {}, scale = {}", q.len(), res, scale);
    }

    /// Output length equals input length.
    #[test]
    fn poisson_output_length(q in rhs(300)) {
        let x = solve_fixed_poisson(&q).unwrap();
        prop_assert_eq!(x.len(), q.len());
    }

    /// Single equation 2x = q gives x = q/2 exactly.
    #[test]
    fn poisson_single_equation(q0 in -1.0e6f32..1.0e6) {
        let x = solve_fixed_poisson(&[q0]).unwrap();
        prop_assert_eq!(x, vec![q0 / 2.0]);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn poisson_pure(q in rhs(200)) {
        prop_assert_eq!(solve_fixed_poisson(&q).unwrap(), solve_fixed_poisson(&q).unwrap());
    }

    /// Scaling q by a power of two scales x exactly.
    #[test]
    fn poisson_power_of_two_linearity(q in rhs(200), k in -8i32..8) {
        let c = 2.0f32.powi(k);
        let scaled: Vec<f32> = q.iter().map(|v| c * v).collect();
        let x = solve_fixed_poisson(&q).unwrap();
        let xs = solve_fixed_poisson(&scaled).unwrap();
        for i in 0..x.len() {
            prop_assert_eq!(xs[i], c * x[i], "i = {}", i);
        }
    }

    /// solve(c q) = c solve(q) for any scalar, up to rounding of c q.
    ///
    /// The load is non-negative so |A^-1| |q| = x (A^-1 is entrywise
    /// positive) and the perturbation stays relative to max |x|.
    #[test]
    fn poisson_scalar_linearity(
        q in prop::collection::vec(0.1f32..10.0, 1..64),
        c in -100.0f32..100.0,
    ) {
        let scaled: Vec<f32> = q.iter().map(|v| c * v).collect();
        let x = solve_fixed_poisson(&q).unwrap();
        let xs = solve_fixed_poisson(&scaled).unwrap();
        let tol = 1e-4 * c.abs() as f64 * max_abs(&x);
        for i in 0..x.len() {
            let diff = (xs[i] as f64 - c as f64 * x[i] as f64).abs();
            prop_assert!(diff <= tol,
                "n = {}, c = {}, x[{}]: {} vs {}", q.len(), c, i, xs[i], c * x[i]);
        }
    }

    /// Cached solver reproduces the fused solve bit for bit.
    #[test]
    fn poisson_cached_matches_fused(q in rhs(200)) {
        let solver = PoissonSolver::new(q.len()).unwrap();
        prop_assert_eq!(solver.solve(&q).unwrap(), solve_fixed_poisson(&q).unwrap());
    }

    /// Parallel pivot generation is bit-identical to serial.
    #[test]
    fn pivots_parallel_eq_serial(n in 0usize..5000) {
        prop_assert_eq!(poisson_pivots_par(n), poisson_pivots(n));
    }

    /// Pivots lie in [1/2, 1) and increase with the row index.
    #[test]
    fn pivots_bounded_increasing(n in 2usize..2000) {
        let d = poisson_pivots(n);
        prop_assert_eq!(d[0], 0.5);
        for i in 1..n {
            prop_assert!(d[i] >= d[i - 1], "d[{}] = {} < d[{}] = {}", i, d[i], i - 1, d[i - 1]);
            prop_assert!(d[i] < 1.0);
        }
    }
}

// ── General Toeplitz Solver Properties ───────────────────────────────

proptest! {
    /// A x = q for positive definite tridiag(a, b, a), b > 2|a|.
    #[test]
    fn toeplitz_ax_eq_q(q in rhs(150), a in -3.0f32..3.0, margin in 0.1f32..3.0) {
        let b = 2.0 * a.abs() + margin;
        let x = solve_toeplitz(a, b, &q).unwrap();
        let op = SymmetricTridiagonalToeplitz::new(b, a, q.len()).unwrap();
        let res = op.residual_max(ArrayView1::from(x.as_slice()), ArrayView1::from(q.as_slice())).unwrap();
        let scale = (b.abs() as f64 + 2.0 * a.abs() as f64) * max_abs(&x) + max_abs(&q);
        prop_assert!(res <= 1e-5 * scale,
            "a = {}, b = {}, n = {}, residual = {}", a, b, q.len(), res);
    }

    /// tridiag(-1, 2, -1) through the general path agrees with the
    /// closed-form Poisson solver.
    #[test]
    fn toeplitz_matches_poisson(q in rhs(64)) {
        let general = solve_toeplitz(-1.0, 2.0, &q).unwrap();
        let fixed = solve_fixed_poisson(&q).unwrap();
        let tol = 1e-4 * max_abs(&fixed);
        for i in 0..q.len() {
            let diff = (general[i] as f64 - fixed[i] as f64).abs();
            prop_assert!(diff <= tol, "x[{}]: general {} vs fixed {}", i, general[i], fixed[i]);
        }
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn toeplitz_pure(q in rhs(100), a in -2.0f32..2.0) {
        let b = 2.0 * a.abs() + 1.0;
        prop_assert_eq!(solve_toeplitz(a, b, &q).unwrap(), solve_toeplitz(a, b, &q).unwrap());
    }

    /// A reused factorization reproduces the one-shot solve bit for bit.
    #[test]
    fn toeplitz_factorization_reuse(q in rhs(100), a in -2.0f32..2.0) {
        let b = 2.0 * a.abs() + 0.5;
        let f = ToeplitzFactorization::new(a, b, q.len()).unwrap();
        prop_assert_eq!(f.solve(&q).unwrap(), solve_toeplitz(a, b, &q).unwrap());
    }
}
