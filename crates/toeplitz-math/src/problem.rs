// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Reference Poisson Problem
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Manufactured 1D Dirichlet problem with a closed-form solution.
//!
//!   -u''(x) = A exp(-k x),  x in (0, 1),  u(0) = u(1) = 0
//!   u(x)    = (A / k^2) (1 - (1 - exp(-k)) x - exp(-k x))
//!
//! Discretized on n interior points x_i = (i+1) h, h = 1/(n+1), the
//! second-order stencil gives tridiag(-1, 2, -1) v = h^2 f. The discrete
//! solution converges to u as O(h^2) until f32 rounding takes over.

use crate::poisson::solve_fixed_poisson;
use ndarray::{Array1, ArrayView1};
use toeplitz_types::config::PoissonProblemConfig;
use toeplitz_types::error::{ensure_len, ToeplitzError, ToeplitzResult};

/// Error summary of one discrete solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonReport {
    pub n: usize,
    pub max_abs_error: f32,
    /// Common log of `max_abs_error`.
    pub log10_max_error: f32,
}

/// Right-hand side and analytic solution sampled on the interior grid.
#[derive(Debug, Clone)]
pub struct PoissonProblem {
    pub h: f32,
    /// x_i = (i+1) h
    pub grid: Array1<f32>,
    /// h^2 A exp(-k x_i)
    pub rhs: Array1<f32>,
    /// u(x_i)
    pub exact: Array1<f32>,
}

impl PoissonProblem {
    pub fn new(config: &PoissonProblemConfig) -> ToeplitzResult<Self> {
        config.validate()?;
        let n = config.n;
        let amp = config.source_amplitude;
        let k = config.decay_rate;

        let h = 1.0 / (n as f32 + 1.0);
        let h2 = h * h;
        let scale = amp / (k * k);
        let tail = 1.0 - (-k).exp();

        let grid = Array1::from_shape_fn(n, |i| (i + 1) as f32 * h);
        let rhs = grid.mapv(|x| h2 * amp * (-k * x).exp());
        let exact = grid.mapv(|x| scale * (1.0 - tail * x - (-k * x).exp()));

        Ok(PoissonProblem {
            h,
            grid,
            rhs,
            exact,
        })
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// max_i |v_i - u(x_i)|
    ///
    /// NaN if any deviation is NaN (`f32::max` would drop it).
    pub fn max_abs_error(&self, v: ArrayView1<f32>) -> ToeplitzResult<f32> {
        ensure_len(self.len(), v.len())?;
        let mut max_err = 0.0f32;
        for (vi, ui) in v.iter().zip(self.exact.iter()) {
            let err = (vi - ui).abs();
            if err.is_nan() {
                return Ok(f32::NAN);
            }
            max_err = max_err.max(err);
        }
        Ok(max_err)
    }

    pub fn report(&self, v: ArrayView1<f32>) -> ToeplitzResult<PoissonReport> {
        let max_abs_error = self.max_abs_error(v)?;
        Ok(PoissonReport {
            n: self.len(),
            max_abs_error,
            log10_max_error: max_abs_error.log10(),
        })
    }

    /// Solve with the closed-form Poisson solver and report the deviation
    /// from the analytic solution.
    pub fn solve(&self) -> ToeplitzResult<(Array1<f32>, PoissonReport)> {
        let q = self.rhs.as_slice().ok_or_else(|| {
            ToeplitzError::InvalidInput("Poisson rhs must be contiguous".to_string())
        })?;
        let v = Array1::from(solve_fixed_poisson(q)?);
        let report = self.report(v.view())?;
        log::info!(
            "Poisson n={}: max error {:.3e} (log10 {:.3})",
            report.n,
            report.max_abs_error,
            report.log10_max_error
        );
        Ok((v, report))
    }
}
