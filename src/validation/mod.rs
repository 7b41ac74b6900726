// src/validation/mod.rs

//! State and input validation helpers shared by the simulator.

use crate::core::{QsearchError, StateVector};

/// Tolerance for the post-run probability-sum check. A deviation beyond
/// this is an implementation bug in the gate kernels, never user error.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-6;

/// Checks that the state vector is normalized (sum of squared amplitudes
/// approximately 1.0).
///
/// # Arguments
/// * `state` - The [`StateVector`] to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to
///   [`DEFAULT_NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QsearchError::NumericalDrift)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QsearchError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QsearchError::NumericalDrift {
            message: format!(
                "probability sum {} deviates from 1 by more than {}",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Rejects non-positive shot counts before any sampling work happens.
pub fn check_shot_count(shots: u64) -> Result<(), QsearchError> {
    if shots == 0 {
        Err(QsearchError::Sampling {
            message: "shot count must be positive".to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn normalized_state_passes() {
        let state = StateVector::from_amplitudes(
            vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
            1,
        );
        assert!(check_normalization(&state, None).is_ok());
    }

    #[test]
    fn drifted_state_fails() {
        let state = StateVector::from_amplitudes(
            vec![Complex::new(0.9, 0.0), Complex::new(0.0, 0.0)],
            1,
        );
        let err = check_normalization(&state, None).unwrap_err();
        assert!(matches!(err, QsearchError::NumericalDrift { .. }));
    }

    #[test]
    fn zero_shots_rejected() {
        assert!(check_shot_count(0).is_err());
        assert!(check_shot_count(1024).is_ok());
    }
}
