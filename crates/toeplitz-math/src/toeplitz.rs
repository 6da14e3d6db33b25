// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Symmetric Toeplitz
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for symmetric tridiagonal Toeplitz systems tridiag(a, b, a).
//!
//! The factorization stores 1/u(i) and -l(i) so both sweeps run on FMA and
//! multiplication only; the n reciprocals are the only divisions.
//!
//! Precondition: the matrix is positive definite or positive semidefinite
//! (e.g. b >= 2|a| with b > 0). Otherwise a pivot may vanish and the output
//! is meaningless. This is not checked.

use toeplitz_types::error::{ensure_len, ensure_nonempty, ToeplitzResult};

/// LU factors of tridiag(a, b, a) for a fixed size n.
///
/// `recip_pivots[i]` = 1/u(i), `neg_multipliers[i]` = -l(i), with
/// `neg_multipliers[0]` = 0 (row 0 has no elimination step).
#[derive(Debug, Clone)]
pub struct ToeplitzFactorization {
    neg_off_diag: f32,
    recip_pivots: Vec<f32>,
    neg_multipliers: Vec<f32>,
}

impl ToeplitzFactorization {
    /// Factorize tridiag(a, b, a) of size n.
    ///
    ///   d(0) = 1/b
    ///   l(i) = -a d(i-1)
    ///   d(i) = 1/(a l(i) + b)
    pub fn new(a: f32, b: f32, n: usize) -> ToeplitzResult<Self> {
        ensure_nonempty(n, "Toeplitz factorization")?;
        let neg_a = -a;

        let mut d = vec![0.0f32; n];
        let mut l = vec![0.0f32; n];
        d[0] = 1.0 / b;
        for i in 1..n {
            l[i] = neg_a * d[i - 1];
            d[i] = 1.0 / a.mul_add(l[i], b);
        }

        Ok(ToeplitzFactorization {
            neg_off_diag: neg_a,
            recip_pivots: d,
            neg_multipliers: l,
        })
    }

    /// System size.
    pub fn len(&self) -> usize {
        self.recip_pivots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recip_pivots.is_empty()
    }

    /// Reciprocal pivots 1/u(i).
    pub fn recip_pivots(&self) -> &[f32] {
        &self.recip_pivots
    }

    /// Negated elimination multipliers -l(i).
    pub fn neg_multipliers(&self) -> &[f32] {
        &self.neg_multipliers
    }

    /// Forward and backward substitution against the stored factors.
    pub fn solve(&self, q: &[f32]) -> ToeplitzResult<Vec<f32>> {
        let n = self.len();
        ensure_len(n, q.len())?;
        let d = &self.recip_pivots;
        let l = &self.neg_multipliers;

        // Forward: y(i) = -l(i) y(i-1) + q(i)
        let mut y = vec![0.0f32; n];
        y[0] = q[0];
        for i in 1..n {
            y[i] = l[i].mul_add(y[i - 1], q[i]);
        }

        // Backward, in place: x(i) = (-a x(i+1) + y(i)) / u(i)
        y[n - 1] *= d[n - 1];
        for i in (0..n - 1).rev() {
            y[i] = self.neg_off_diag.mul_add(y[i + 1], y[i]) * d[i];
        }

        Ok(y)
    }
}

/// Solve tridiag(a, b, a) x = q.
///
/// `a` is the off-diagonal, `b` the main diagonal. Returns `InvalidInput`
/// for an empty `q`; see the module docs for the definiteness precondition.
pub fn solve_toeplitz(a: f32, b: f32, q: &[f32]) -> ToeplitzResult<Vec<f32>> {
    ToeplitzFactorization::new(a, b, q.len())?.solve(q)
}
