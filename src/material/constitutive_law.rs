use super::{LocalState, Schema, SchemaSize};
use crate::ad::{jacobian, Dual, Scalar};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Specifies a constitutive law written for generic (differentiable) scalars
///
/// The update is a pure function of the new gradient, the old (converged) state and the
/// time increment. It is evaluated with [f64] to update the state and with [Dual] to
/// obtain the consistent tangent operator `∂flux/∂gradient`.
pub trait ConstitutiveLaw: Send + Sync {
    /// Returns the state-variable schema
    fn variables(&self) -> Schema;

    /// Returns the number of components of the state variables
    ///
    /// Called at every update; implementations return the sizes without building the schema.
    fn variables_size(&self) -> SchemaSize {
        self.variables().size()
    }

    /// Initializes the internal values (the default is zero)
    fn initialize_internal_values(&self, _internal_values: &mut Vector) -> Result<(), StrError> {
        Ok(())
    }

    /// Computes the flux and the updated internal values
    ///
    /// # Input
    ///
    /// * `gradient` -- the new gradient (strain or deformation gradient)
    /// * `old` -- the state at the beginning of the increment
    /// * `dt` -- the time increment
    ///
    /// # Output
    ///
    /// * `flux` -- the new flux (stress)
    /// * `internal` -- the new internal values
    /// * returns `true` if the update is elastoplastic (loading)
    fn compute<T: Scalar>(
        &self,
        flux: &mut [T],
        internal: &mut [T],
        gradient: &[T],
        old: &LocalState,
        dt: f64,
    ) -> Result<bool, StrError>;
}

/// Specifies the (object-safe) interface of stress-strain models
///
/// This trait is implemented for all [ConstitutiveLaw]s.
pub trait StressStrainTrait: Send + Sync {
    /// Returns the state-variable schema
    fn schema(&self) -> Schema;

    /// Returns the number of components of the state variables
    fn size(&self) -> SchemaSize;

    /// Returns the initial state
    fn initial_state(&self) -> Result<LocalState, StrError>;

    /// Updates the state given the new gradient (no tangent)
    fn update(&self, state: &mut LocalState, gradient: &Vector, dt: f64) -> Result<(), StrError>;

    /// Updates the state and computes the consistent tangent operator
    ///
    /// The tangent is `∂flux/∂gradient` with dimensions (flux.size, gradient.size).
    fn integrate(
        &self,
        state: &mut LocalState,
        gradient: &Vector,
        dt: f64,
        tangent: &mut Matrix,
    ) -> Result<(), StrError>;
}

/// Checks the dimensions of the state and the new gradient
fn check_dims(size: SchemaSize, state: &LocalState, gradient: &Vector) -> Result<(), StrError> {
    if gradient.dim() != size.gradient || state.gradient.dim() != size.gradient {
        return Err("gradient has incorrect dimension");
    }
    if state.flux.dim() != size.flux {
        return Err("flux has incorrect dimension");
    }
    if state.internal_values.dim() != size.n_internal_values {
        return Err("internal values have incorrect dimension");
    }
    Ok(())
}

impl<L: ConstitutiveLaw> StressStrainTrait for L {
    fn schema(&self) -> Schema {
        self.variables()
    }

    fn size(&self) -> SchemaSize {
        self.variables_size()
    }

    fn initial_state(&self) -> Result<LocalState, StrError> {
        let mut state = LocalState::new(&self.variables());
        self.initialize_internal_values(&mut state.internal_values)?;
        Ok(state)
    }

    fn update(&self, state: &mut LocalState, gradient: &Vector, dt: f64) -> Result<(), StrError> {
        check_dims(self.variables_size(), state, gradient)?;
        let mut flux = vec![0.0; state.flux.dim()];
        let mut internal = vec![0.0; state.internal_values.dim()];
        let loading = self.compute(&mut flux, &mut internal, gradient.as_data(), state, dt)?;
        state.gradient.as_mut_data().copy_from_slice(gradient.as_data());
        state.flux.as_mut_data().copy_from_slice(&flux);
        state.internal_values.as_mut_data().copy_from_slice(&internal);
        state.loading = loading;
        Ok(())
    }

    fn integrate(
        &self,
        state: &mut LocalState,
        gradient: &Vector,
        dt: f64,
        tangent: &mut Matrix,
    ) -> Result<(), StrError> {
        check_dims(self.variables_size(), state, gradient)?;
        let mut flux = vec![Dual::constant(0.0); state.flux.dim()];
        let mut internal = vec![Dual::constant(0.0); state.internal_values.dim()];
        let mut loading = false;
        let old: &LocalState = state;
        jacobian(tangent, &mut flux, gradient.as_data(), |f, g| {
            loading = self.compute(f, &mut internal, g, old, dt)?;
            Ok(())
        })?;
        state.gradient.as_mut_data().copy_from_slice(gradient.as_data());
        for i in 0..flux.len() {
            state.flux[i] = flux[i].val;
        }
        for i in 0..internal.len() {
            state.internal_values[i] = internal[i].val;
        }
        state.loading = loading;
        Ok(())
    }
}
