// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl MathError {
    /// Kurzform für den einzigen Fehlerfall der Generatoren.
    pub fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        MathError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Name des fehlerhaften Parameters.
    pub fn parameter(&self) -> &'static str {
        match self {
            MathError::InvalidParameter { name, .. } => name,
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;

/// Gemeinsame Prüfungen für die Parameter aller Generatoren.
pub mod checks {
    use super::{MathError, MathResult};

    pub fn resolution(resolution: usize) -> MathResult<()> {
        if resolution < 1 {
            return Err(MathError::invalid(
                "resolution",
                resolution,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn positive(name: &'static str, value: f32) -> MathResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(MathError::invalid(name, value, "must be a finite value > 0"));
        }
        Ok(())
    }

    pub fn unit_interval(name: &'static str, value: f32) -> MathResult<()> {
        if !(0.0..=1.0).contains(&value) {
            // NaN landet ebenfalls hier
            return Err(MathError::invalid(name, value, "must lie within [0, 1]"));
        }
        Ok(())
    }

    pub fn count(name: &'static str, value: usize) -> MathResult<()> {
        if value == 0 {
            return Err(MathError::invalid(name, value, "must be at least 1"));
        }
        Ok(())
    }
}
