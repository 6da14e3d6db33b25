// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Main diagonal of the 1D Dirichlet Laplacian stencil [-1, 2, -1].
pub const POISSON_DIAG: f32 = 2.0;

/// Off-diagonal of the 1D Dirichlet Laplacian stencil.
pub const POISSON_OFF_DIAG: f32 = -1.0;

/// Source amplitude of the reference problem -u'' = 100 exp(-10x).
pub const REFERENCE_SOURCE_AMPLITUDE: f32 = 100.0;

/// Decay rate of the reference source term.
pub const REFERENCE_DECAY_RATE: f32 = 10.0;

/// Interior point count used by the reference benchmark run (10^5).
pub const REFERENCE_N: usize = 100_000;

/// Below this size the cached Poisson solver generates pivots serially;
/// rayon task overhead dominates for small systems.
pub const DEFAULT_PARALLEL_PIVOTS_THRESHOLD: usize = 1 << 16;
