//! Run input validation.
//!
//! Validates simulation inputs before the chain is built, catching
//! data-level errors early with clear diagnostics.

use tendril_types::{TendrilError, TendrilResult};

use crate::contract::{SimulationInput, SimulationParams};

/// Stiffness numbers `k * dt² / m` at or above this leave explicit
/// Euler's bounded regime.
const STIFFNESS_NUMBER_LIMIT: f32 = 4.0;

/// Validates a complete simulation input.
///
/// Checks:
/// - Chain configuration (node count, spacing, material, perturbation)
/// - Run parameters (timestep, duration, anchor path)
///
/// A stiffness number outside the stable regime is reported as a
/// warning, not an error: variable-timestep hosts may still want it.
pub fn validate_input(input: &SimulationInput) -> TendrilResult<()> {
    input.chain.validate()?;
    validate_params(&input.params)?;

    let number = input.chain.material.stiffness_number(input.params.dt);
    if number >= STIFFNESS_NUMBER_LIMIT {
        tracing::warn!(
            stiffness_number = number,
            "k*dt^2/m is outside the stable range, the chain may oscillate"
        );
    }
    Ok(())
}

fn validate_params(params: &SimulationParams) -> TendrilResult<()> {
    if !(params.dt > 0.0 && params.dt.is_finite()) {
        return Err(TendrilError::InvalidConfig(
            "Timestep dt must be positive".into(),
        ));
    }
    if params.dt > 1.0 {
        return Err(TendrilError::InvalidConfig(
            "Timestep dt > 1.0 is unreasonably large".into(),
        ));
    }
    if !(params.duration > 0.0 && params.duration.is_finite()) {
        return Err(TendrilError::InvalidConfig(
            "Duration must be positive".into(),
        ));
    }
    if !params.anchor_start.is_finite() {
        return Err(TendrilError::InvalidConfig(format!(
            "Anchor start must be finite, got {}",
            params.anchor_start
        )));
    }
    if !params.anchor_path.is_finite() {
        return Err(TendrilError::InvalidConfig(format!(
            "Anchor path '{}' has non-finite parameters",
            params.anchor_path.name()
        )));
    }
    Ok(())
}
