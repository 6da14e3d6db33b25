// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Operator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Matrix-free symmetric tridiagonal Toeplitz operator.
//!
//! Used to check solver output (residuals) and, for small n, to build the
//! dense matrix for comparison against a general dense solve.

use ndarray::{Array1, Array2, ArrayView1};
use toeplitz_types::constants::{POISSON_DIAG, POISSON_OFF_DIAG};
use toeplitz_types::error::{ensure_len, ensure_nonempty, ToeplitzResult};

/// tridiag(off_diag, diag, off_diag) of size n.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricTridiagonalToeplitz {
    pub diag: f32,
    pub off_diag: f32,
    n: usize,
}

impl SymmetricTridiagonalToeplitz {
    pub fn new(diag: f32, off_diag: f32, n: usize) -> ToeplitzResult<Self> {
        ensure_nonempty(n, "Toeplitz operator")?;
        Ok(SymmetricTridiagonalToeplitz { diag, off_diag, n })
    }

    /// The 1D Dirichlet Laplacian tridiag(-1, 2, -1).
    pub fn poisson(n: usize) -> ToeplitzResult<Self> {
        Self::new(POISSON_DIAG, POISSON_OFF_DIAG, n)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// A x.
    pub fn apply(&self, x: ArrayView1<f32>) -> ToeplitzResult<Array1<f32>> {
        ensure_len(self.n, x.len())?;
        let n = self.n;
        Ok(Array1::from_shape_fn(n, |i| {
            let mut v = self.diag * x[i];
            if i > 0 {
                v = self.off_diag.mul_add(x[i - 1], v);
            }
            if i + 1 < n {
                v = self.off_diag.mul_add(x[i + 1], v);
            }
            v
        }))
    }

    /// max_i |(A x)_i - q_i|, accumulated in f64 so the check itself adds
    /// no single-precision rounding.
    pub fn residual_max(&self, x: ArrayView1<f32>, q: ArrayView1<f32>) -> ToeplitzResult<f64> {
        ensure_len(self.n, x.len())?;
        ensure_len(self.n, q.len())?;
        let n = self.n;
        let diag = self.diag as f64;
        let off = self.off_diag as f64;

        let mut max_res: f64 = 0.0;
        for i in 0..n {
            let mut ax = diag * x[i] as f64;
            if i > 0 {
                ax += off * x[i - 1] as f64;
            }
            if i + 1 < n {
                ax += off * x[i + 1] as f64;
            }
            max_res = max_res.max((ax - q[i] as f64).abs());
        }
        Ok(max_res)
    }

    /// Dense n x n matrix. Only sensible for small n.
    pub fn to_dense(&self) -> Array2<f32> {
        let n = self.n;
        let mut a = Array2::zeros((n, n));
        for i in 0..n {
            a[[i, i]] = self.diag;
            if i > 0 {
                a[[i, i - 1]] = self.off_diag;
            }
            if i + 1 < n {
                a[[i, i + 1]] = self.off_diag;
            }
        }
        a
    }
}
