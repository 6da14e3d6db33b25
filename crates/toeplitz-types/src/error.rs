// ─────────────────────────────────────────────────────────────────────
// SCPN Tridiag — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToeplitzError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ToeplitzResult<T> = Result<T, ToeplitzError>;

/// Reject empty systems. Every solver entry point calls this before
/// touching index 0.
pub fn ensure_nonempty(n: usize, what: &str) -> ToeplitzResult<()> {
    if n == 0 {
        return Err(ToeplitzError::InvalidInput(format!(
            "{what} requires a system of size n >= 1"
        )));
    }
    Ok(())
}

/// Reject a right-hand side whose length differs from a cached system size.
pub fn ensure_len(expected: usize, found: usize) -> ToeplitzResult<()> {
    if expected != found {
        return Err(ToeplitzError::DimensionMismatch { expected, found });
    }
    Ok(())
}
