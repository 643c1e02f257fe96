//! Particle engine error handling
//!
//! The per-frame update path never fails; errors only surface while building
//! a system from configuration.

use std::path::PathBuf;

/// Type alias for particle engine results
pub type ParticleResult<T> = Result<T, ParticleError>;

/// Particle configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ParticleError {
    #[error("Curve '{curve}' has no control points")]
    EmptyCurve { curve: &'static str },

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("Spawn volume min exceeds max on the {axis} axis")]
    InvalidSpawnVolume { axis: char },

    #[error("Effect #{index} names neither a preset nor a system")]
    MissingEffectSource { index: usize },

    #[error("Unsupported config format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse config {}: {error}", .path.display())]
    ConfigParse { path: PathBuf, error: String },

    #[error("Failed to read config {}: {error}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// Reject negative or non-finite values for a named parameter
pub fn non_negative(name: &'static str, value: f32) -> ParticleResult<()> {
    if !value.is_finite() {
        return Err(ParticleError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ParticleError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

/// Reject zero, negative or non-finite values for a named parameter
pub fn positive(name: &'static str, value: f32) -> ParticleResult<()> {
    non_negative(name, value)?;
    if value == 0.0 {
        return Err(ParticleError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_checks() {
        assert!(non_negative("rate", 0.0).is_ok());
        assert!(non_negative("rate", -1.0).is_err());
        assert!(non_negative("rate", f32::NAN).is_err());
        assert!(positive("max_life", 0.0).is_err());
        assert!(positive("max_life", 1.5).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = ParticleError::EmptyCurve { curve: "alpha" };
        assert_eq!(err.to_string(), "Curve 'alpha' has no control points");

        let err = positive("max_size", -3.0).unwrap_err();
        assert!(err.to_string().contains("max_size"));
    }
}
