// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    DEFAULT_PARALLEL_PIVOTS_THRESHOLD, REFERENCE_DECAY_RATE, REFERENCE_N,
    REFERENCE_SOURCE_AMPLITUDE,
};
use crate::error::{ToeplitzError, ToeplitzResult};
use serde::{Deserialize, Serialize};

/// 1D Dirichlet Poisson problem -u'' = A exp(-k x) on (0, 1), u(0) = u(1) = 0.
///
/// Every field is optional in JSON; an empty object yields the reference
/// problem (n = 10^5, A = 100, k = 10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoissonProblemConfig {
    /// Number of interior grid points.
    #[serde(default = "default_n")]
    pub n: usize,
    /// Source amplitude A.
    #[serde(default = "default_source_amplitude")]
    pub source_amplitude: f32,
    /// Source decay rate k.
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f32,
}

fn default_n() -> usize {
    REFERENCE_N
}
fn default_source_amplitude() -> f32 {
    REFERENCE_SOURCE_AMPLITUDE
}
fn default_decay_rate() -> f32 {
    REFERENCE_DECAY_RATE
}

impl Default for PoissonProblemConfig {
    fn default() -> Self {
        PoissonProblemConfig {
            n: default_n(),
            source_amplitude: default_source_amplitude(),
            decay_rate: default_decay_rate(),
        }
    }
}

impl PoissonProblemConfig {
    /// Reference problem with a different grid size.
    pub fn with_n(n: usize) -> Self {
        PoissonProblemConfig {
            n,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ToeplitzResult<()> {
        if self.n == 0 {
            return Err(ToeplitzError::ConfigError(
                "Poisson problem requires n >= 1 interior points".to_string(),
            ));
        }
        if !self.source_amplitude.is_finite() {
            return Err(ToeplitzError::ConfigError(
                "Poisson source_amplitude must be finite".to_string(),
            ));
        }
        // k = 0 makes the analytic solution's normalisation A/k^2 singular.
        if !self.decay_rate.is_finite() || self.decay_rate == 0.0 {
            return Err(ToeplitzError::ConfigError(
                "Poisson decay_rate must be finite and non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> ToeplitzResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file.
    pub fn from_file(path: &str) -> ToeplitzResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Tuning knobs for the cached solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// System size from which Poisson pivots are generated with rayon.
    #[serde(default = "default_parallel_pivots_threshold")]
    pub parallel_pivots_threshold: usize,
}

fn default_parallel_pivots_threshold() -> usize {
    DEFAULT_PARALLEL_PIVOTS_THRESHOLD
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            parallel_pivots_threshold: default_parallel_pivots_threshold(),
        }
    }
}

impl SolverConfig {
    /// Always generate pivots serially.
    pub fn serial() -> Self {
        SolverConfig {
            parallel_pivots_threshold: usize::MAX,
        }
    }

    pub fn use_parallel_pivots(&self, n: usize) -> bool {
        n >= self.parallel_pivots_threshold
    }

    pub fn from_json_str(json: &str) -> ToeplitzResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from JSON file.
    pub fn from_file(path: &str) -> ToeplitzResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
