use super::{LocalState, StressStrainTrait};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Computes the tangent operator ∂flux/∂gradient by finite differences (5-point central formula)
///
/// The state is not modified: each perturbed update starts from a copy of `state`.
///
/// # Input
///
/// * `model` -- the stress-strain model
/// * `state` -- the state at the beginning of the increment
/// * `gradient` -- the new gradient
/// * `dt` -- the time increment
/// * `h` -- the step size (e.g., 1e-6 for small strains)
///
/// # Output
///
/// Returns the (flux.dim, gradient.dim) tangent matrix
pub fn numerical_tangent(
    model: &dyn StressStrainTrait,
    state: &LocalState,
    gradient: &Vector,
    dt: f64,
    h: f64,
) -> Result<Matrix, StrError> {
    if h <= 0.0 {
        return Err("the step size must be positive");
    }
    let ncol = gradient.dim();
    let nrow = state.flux.dim();
    let mut tangent = Matrix::new(nrow, ncol);
    let mut perturbed = gradient.clone();
    let mut trial = state.clone();
    let steps = [(-2.0, 1.0), (-1.0, -8.0), (1.0, 8.0), (2.0, -1.0)];
    for j in 0..ncol {
        for (m, coef) in steps {
            perturbed[j] = gradient[j] + m * h;
            trial.copy_from(state);
            model.update(&mut trial, &perturbed, dt)?;
            for i in 0..nrow {
                tangent.set(i, j, tangent.get(i, j) + coef * trial.flux[i] / (12.0 * h));
            }
        }
        perturbed[j] = gradient[j];
    }
    Ok(tangent)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
