// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Poisson
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct solver for the 1D Dirichlet Laplacian, tridiag(-1, 2, -1).
//!
//! The LU factors of this matrix have a closed form. With 0-based rows the
//! U pivots are u(i) = (i+2)/(i+1) and the L multipliers are
//! l(i) = -i/(i+1), so a single vector
//!
//!   d(i) = 1/u(i) = (i+1)/(i+2) = -l(i+1)
//!
//! carries both factors: it is the reciprocal pivot for back substitution
//! and the negated multiplier for forward substitution. Each entry depends
//! only on its index, so generating `d` has no serial dependency chain.
//!
//! Cost for n rows: n FMA + n ADD + n MUL (serial) and n DIV (index-parallel).

use rayon::prelude::*;
use toeplitz_types::config::SolverConfig;
use toeplitz_types::error::{ensure_len, ensure_nonempty, ToeplitzResult};

/// Reciprocal pivot of row `i`: (i+1)/(i+2).
#[inline(always)]
pub fn poisson_pivot(i: usize) -> f32 {
    (i + 1) as f32 / (i + 2) as f32
}

/// All `n` reciprocal pivots, generated serially.
///
/// Bit-identical to the pivots produced inside [`solve_fixed_poisson`].
pub fn poisson_pivots(n: usize) -> Vec<f32> {
    (0..n).map(poisson_pivot).collect()
}

/// All `n` reciprocal pivots, generated across the rayon pool.
pub fn poisson_pivots_par(n: usize) -> Vec<f32> {
    (0..n).into_par_iter().map(poisson_pivot).collect()
}

/// Solve tridiag(-1, 2, -1) x = q.
///
/// Pivot generation is fused into the forward sweep so `d` is written and
/// consumed in the same cache line. Returns `InvalidInput` for an empty `q`.
pub fn solve_fixed_poisson(q: &[f32]) -> ToeplitzResult<Vec<f32>> {
    let n = q.len();
    ensure_nonempty(n, "Poisson solve")?;

    let mut d = vec![0.0f32; n];
    let mut y = vec![0.0f32; n];

    // Forward substitution with fused pivot generation.
    y[0] = q[0];
    let mut fcurr = 1.0f32;
    let mut fnext = 2.0f32;
    for i in 1..n {
        d[i - 1] = fcurr / fnext;
        // Carry the denominator over instead of converting both counters.
        fcurr = fnext;
        fnext = (i + 2) as f32;
        // d(i-1) is already -l(i).
        y[i] = d[i - 1].mul_add(y[i - 1], q[i]);
    }
    d[n - 1] = n as f32 / (n + 1) as f32;

    back_substitute(&mut y, &d);
    Ok(y)
}

/// Forward and backward sweeps against precomputed pivots.
///
/// `d.len()` must equal `q.len()`; callers validate.
fn substitute(d: &[f32], q: &[f32]) -> Vec<f32> {
    let n = q.len();
    let mut y = vec![0.0f32; n];

    y[0] = q[0];
    for i in 1..n {
        y[i] = d[i - 1].mul_add(y[i - 1], q[i]);
    }

    back_substitute(&mut y, d);
    y
}

/// Backward sweep, overwriting y with x.
///
///   x(n-1) = y(n-1) d(n-1)
///   x(i)   = (x(i+1) + y(i)) d(i)
#[inline(always)]
fn back_substitute(y: &mut [f32], d: &[f32]) {
    let n = y.len();
    y[n - 1] *= d[n - 1];
    for i in (0..n - 1).rev() {
        y[i] = (y[i + 1] + y[i]) * d[i];
    }
}

/// Poisson solver with pivots cached for a fixed system size.
///
/// The pivots never depend on the right-hand side, so repeated solves at the
/// same `n` only pay for the two substitution sweeps.
#[derive(Debug, Clone)]
pub struct PoissonSolver {
    pivots: Vec<f32>,
}

impl PoissonSolver {
    pub fn new(n: usize) -> ToeplitzResult<Self> {
        Self::with_config(n, &SolverConfig::default())
    }

    pub fn with_config(n: usize, config: &SolverConfig) -> ToeplitzResult<Self> {
        ensure_nonempty(n, "Poisson solver")?;
        let parallel = config.use_parallel_pivots(n);
        log::debug!("Building Poisson pivots for n={n} (parallel={parallel})");
        let pivots = if parallel {
            poisson_pivots_par(n)
        } else {
            poisson_pivots(n)
        };
        Ok(PoissonSolver { pivots })
    }

    /// System size.
    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// Reciprocal pivots d(0..n).
    pub fn pivots(&self) -> &[f32] {
        &self.pivots
    }

    /// Solve against the cached pivots. Bit-identical to [`solve_fixed_poisson`].
    pub fn solve(&self, q: &[f32]) -> ToeplitzResult<Vec<f32>> {
        ensure_len(self.pivots.len(), q.len())?;
        Ok(substitute(&self.pivots, q))
    }
}
