// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Toeplitz Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct O(n) solvers for symmetric tridiagonal Toeplitz systems.

pub mod operator;
pub mod poisson;
pub mod problem;
pub mod toeplitz;

pub use poisson::{solve_fixed_poisson, PoissonSolver};
pub use toeplitz::{solve_toeplitz, ToeplitzFactorization};
